pub mod listing;
pub mod topbar;

/// Intents emitted by the views. The app collects them during the frame and
/// applies them afterwards, so a view never mutates navigation directly.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserCmd {
    /// A folder row or a breadcrumb link was clicked.
    Open(String),
    /// The "My Drive" button was clicked.
    Root,
    /// The upload button was clicked.
    Upload,
}
