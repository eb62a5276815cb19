//! Immutable folder/file catalog plus the navigation state of the browser.
//!
//! The catalog is a flat arena of records with parent pointers; listings and
//! breadcrumbs are derived by walking it, never by mutating it. An app builds
//! one catalog at startup and passes it into the views.

mod mock;
pub mod model;
pub mod navigation;

pub use model::{File, Folder, ROOT};
pub use navigation::Navigation;

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    folders: Vec<Folder>,
    files: Vec<File>,
    folder_index: HashMap<String, usize>,
}

/// The JSON shape of a catalog file: `{ "folders": [...], "files": [...] }`.
#[derive(Deserialize)]
struct CatalogData {
    folders: Vec<Folder>,
    files: Vec<File>,
}

impl Catalog {
    pub fn new(folders: Vec<Folder>, files: Vec<File>) -> Self {
        let folder_index = folders
            .iter()
            .enumerate()
            .map(|(i, folder)| (folder.id.clone(), i))
            .collect();
        Catalog {
            folders,
            files,
            folder_index,
        }
    }

    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        let data: CatalogData = serde_json::from_str(src)?;
        Ok(Self::new(data.folders, data.files))
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folder_index.get(id).map(|&i| &self.folders[i])
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Every folder whose parent is `parent`, in catalog order. An unknown
    /// parent id is not an error, it just matches nothing.
    pub fn folders_in(&self, parent: &str) -> Vec<&Folder> {
        self.folders.iter().filter(|f| f.parent == parent).collect()
    }

    /// Every file whose parent is `parent`, in catalog order.
    pub fn files_in(&self, parent: &str) -> Vec<&File> {
        self.files.iter().filter(|f| f.parent == parent).collect()
    }

    /// Ancestor chain of `current`, ordered root-to-leaf and excluding
    /// `current` itself. `breadcrumbs(ROOT)` is empty, as is the trail for an
    /// id that resolves to no folder. A missing ancestor truncates the trail
    /// instead of failing.
    ///
    /// The walk is bounded by the folder count, so a malformed catalog with a
    /// parent cycle degrades to a truncated trail rather than looping.
    pub fn breadcrumbs(&self, current: &str) -> Vec<&Folder> {
        let mut cursor = match self.folder(current) {
            Some(folder) => folder.parent.as_str(),
            None => return Vec::new(),
        };

        let mut trail = Vec::new();
        while cursor != ROOT {
            match self.folder(cursor) {
                Some(parent) => {
                    trail.push(parent);
                    cursor = parent.parent.as_str();
                }
                None => break,
            }
            if trail.len() > self.folders.len() {
                log::warn!(
                    "breadcrumb walk for {:?} exceeded the folder count; parent graph has a cycle",
                    current
                );
                break;
            }
        }
        trail.reverse();
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn fixture() -> Catalog {
        Catalog::new(
            vec![
                folder("a", "Docs", ROOT),
                folder("b", "Tax", "a"),
                folder("c", "Pics", ROOT),
            ],
            vec![
                file("f1", "r.pdf", "b", "pdf", 10),
                file("f2", "top.txt", ROOT, "Text", 1),
            ],
        )
    }

    #[test]
    fn listing_filters_by_parent() {
        let catalog = fixture();
        let ids: Vec<_> = catalog.folders_in(ROOT).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(catalog.folders_in("a").len(), 1);
        assert_eq!(catalog.files_in("b")[0].name, "r.pdf");
        assert!(catalog.files_in("a").is_empty());
    }

    #[test]
    fn listings_partition_the_catalog() {
        let catalog = fixture();
        let parents: Vec<&str> = std::iter::once(ROOT)
            .chain(catalog.folders().iter().map(|f| f.id.as_str()))
            .collect();
        let listed_folders: usize = parents.iter().map(|p| catalog.folders_in(p).len()).sum();
        let listed_files: usize = parents.iter().map(|p| catalog.files_in(p).len()).sum();
        assert_eq!(listed_folders, catalog.folders().len());
        assert_eq!(listed_files, catalog.files().len());
    }

    #[test]
    fn unknown_folder_lists_nothing() {
        let catalog = fixture();
        assert!(catalog.folders_in("ghost").is_empty());
        assert!(catalog.files_in("ghost").is_empty());
    }

    #[test]
    fn breadcrumbs_at_root_are_empty() {
        assert!(fixture().breadcrumbs(ROOT).is_empty());
    }

    #[test]
    fn breadcrumbs_exclude_the_current_folder() {
        let catalog = fixture();
        let trail = catalog.breadcrumbs("b");
        let ids: Vec<_> = trail.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
        // nearest ancestor last, and it is the current folder's parent
        assert_eq!(trail.last().unwrap().id, catalog.folder("b").unwrap().parent);
    }

    #[test]
    fn breadcrumbs_for_a_top_level_folder_are_empty() {
        assert!(fixture().breadcrumbs("a").is_empty());
    }

    #[test]
    fn breadcrumbs_for_unknown_id_are_empty() {
        assert!(fixture().breadcrumbs("ghost").is_empty());
    }

    #[test]
    fn breadcrumb_walk_stops_at_missing_ancestor() {
        let catalog = Catalog::new(
            vec![folder("b", "Tax", "gone"), folder("c", "Old", "b")],
            vec![],
        );
        let ids: Vec<_> = catalog.breadcrumbs("c").iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
    }

    #[test]
    fn breadcrumb_walk_survives_a_parent_cycle() {
        let catalog = Catalog::new(
            vec![folder("x", "X", "y"), folder("y", "Y", "x")],
            vec![],
        );
        // malformed data: the walk must still terminate
        let trail = catalog.breadcrumbs("x");
        assert!(trail.len() <= catalog.folders().len() + 1);
    }

    #[test]
    fn json_catalog_matches_the_wire_shape() {
        let src = r#"{
            "folders": [
                { "id": "a", "name": "Docs", "parent": "root" },
                { "id": "b", "name": "NoParent" }
            ],
            "files": [{ "id": "f1", "name": "r.pdf", "parent": "a", "type": "pdf", "size": 10 }]
        }"#;
        let catalog = Catalog::from_json(src).unwrap();
        assert_eq!(catalog.folders_in(ROOT).len(), 2);
        // an absent parent means top-level
        assert_eq!(catalog.folder("b").unwrap().parent, ROOT);
        let f = catalog.files_in("a")[0];
        assert_eq!(f.kind, "pdf");
        assert_eq!(f.size_kb, 10);
    }

    #[test]
    fn mock_catalog_is_well_formed() {
        let catalog = Catalog::mock();
        assert!(!catalog.folders_in(ROOT).is_empty());
        for folder in catalog.folders() {
            // every parent chain terminates at the root sentinel
            let trail = catalog.breadcrumbs(&folder.id);
            assert!(trail.len() <= catalog.folders().len());
            if folder.parent != ROOT {
                assert!(catalog.folder(&folder.parent).is_some());
            }
        }
        for file in catalog.files() {
            assert!(file.parent == ROOT || catalog.folder(&file.parent).is_some());
        }
    }
}
