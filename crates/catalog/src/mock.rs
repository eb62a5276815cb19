//! The demo data set shown when no catalog file is supplied.

use crate::model::{File, Folder, ROOT};
use crate::Catalog;

fn folder(id: &str, name: &str, parent: &str) -> Folder {
    Folder {
        id: id.into(),
        name: name.into(),
        parent: parent.into(),
    }
}

fn file(id: &str, name: &str, parent: &str, kind: &str, size_kb: u64) -> File {
    File {
        id: id.into(),
        name: name.into(),
        parent: parent.into(),
        kind: kind.into(),
        size_kb,
    }
}

impl Catalog {
    pub fn mock() -> Self {
        Catalog::new(
            vec![
                folder("documents", "Documents", ROOT),
                folder("photos", "Photos", ROOT),
                folder("work", "Work", ROOT),
                folder("taxes", "Taxes", "documents"),
                folder("receipts", "Receipts", "taxes"),
                folder("vacation", "Vacation", "photos"),
            ],
            vec![
                file("resume", "resume.pdf", "documents", "Document", 84),
                file("cover-letter", "cover_letter.docx", "documents", "Document", 32),
                file("w2", "w2_2024.pdf", "taxes", "Document", 120),
                file("laptop-receipt", "laptop_receipt.pdf", "receipts", "Document", 56),
                file("beach", "beach.png", "vacation", "Image", 2048),
                file("skyline", "skyline.jpg", "photos", "Image", 1536),
                file("roadmap", "roadmap.xlsx", "work", "Spreadsheet", 96),
                file("pitch-deck", "pitch_deck.pptx", "work", "Presentation", 4096),
                file("todo", "todo.txt", ROOT, "Text", 4),
            ],
        )
    }
}
