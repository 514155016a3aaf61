use gtk4::prelude::*;

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// GDK accepts every text write, so there is nothing to report yet.
#[derive(Debug)]
pub enum ClipboardError {}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clipboard error")
    }
}

impl std::error::Error for ClipboardError {}

/// Destination for copied short links.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> ClipboardResult<()>;
}

pub fn copy_text_to_clipboard(text: &str, display: &gtk4::gdk::Display) -> ClipboardResult<()> {
    let clipboard = display.clipboard();

    clipboard.set_text(text);

    Ok(())
}

pub struct ClipboardManager {
    display: gtk4::gdk::Display,
}

impl ClipboardManager {
    pub fn from_widget(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            display: widget.display(),
        }
    }
}

impl ClipboardSink for ClipboardManager {
    fn write_text(&self, text: &str) -> ClipboardResult<()> {
        copy_text_to_clipboard(text, &self.display)
    }
}
