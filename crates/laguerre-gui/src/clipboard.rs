//! Host clipboard access through egui.

use laguerre_core::Clipboard;

/// Writes through the egui context; the platform integration delivers
/// the text at the end of the frame.
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Clipboard for EguiClipboard {
    /// Only empty text is refused. egui queues the copy as a frame output
    /// command and never reports whether the platform accepted it, so host
    /// clipboard failures cannot surface as "Copy failed" here.
    fn write(&mut self, text: &str) -> Result<(), String> {
        if text.is_empty() {
            return Err("refusing to replace the clipboard with empty text".to_string());
        }
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}
