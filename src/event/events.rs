/// Notifications raised by the session whenever visible state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// The drawing itself changed: history, in-progress stroke or cursor visibility
    ContentChanged,
    /// Only the cursor or the selected tool changed
    ToolMoved,
}
