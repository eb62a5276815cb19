use serde::{Deserialize, Serialize};

/// Identifier of the top-level container. The root is a sentinel, not a
/// `Folder` record: nothing in the catalog carries this id.
pub const ROOT: &str = "root";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Id of the containing folder, or [`ROOT`] for top-level folders.
    /// Absent in JSON means top-level.
    #[serde(default = "root_id")]
    pub parent: String,
}

fn root_id() -> String {
    ROOT.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct File {
    pub id: String,
    pub name: String,
    /// Id of the containing folder, or [`ROOT`]. Files always have a parent.
    pub parent: String,
    /// Free-form category label, e.g. "Document" or "Image".
    #[serde(rename = "type")]
    pub kind: String,
    /// Size in kilobytes.
    #[serde(rename = "size")]
    pub size_kb: u64,
}
