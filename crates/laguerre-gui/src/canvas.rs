//! The polynomial display area.
//!
//! egui redraws every frame, so the canvas records what the controller
//! drew and replays it on each paint.

use egui::{FontId, RichText, ScrollArea, Ui};
use laguerre_core::Canvas;
use laguerre_format::Placement;
use laguerre_model::RenderError;

/// One line as the controller drew it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnLine {
    pub text: String,
    pub placement: Placement,
    pub font_size: u32,
}

#[derive(Debug, Default)]
pub struct DisplayCanvas {
    lines: Vec<DrawnLine>,
}

impl DisplayCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }

    /// Paint the recorded lines into the remaining space of `ui`.
    pub fn show(&self, ui: &mut Ui) {
        let Some(first) = self.lines.first() else {
            return;
        };
        match first.placement {
            Placement::Centered => self.show_centered(ui),
            Placement::TopLeft => self.show_top_left(ui),
        }
    }

    fn show_centered(&self, ui: &mut Ui) {
        let rect = ui.available_rect_before_wrap();
        let color = ui.visuals().text_color();
        let painter = ui.painter();
        let galleys: Vec<_> = self
            .lines
            .iter()
            .map(|line| {
                painter.layout_no_wrap(
                    line.text.clone(),
                    FontId::proportional(line.font_size as f32),
                    color,
                )
            })
            .collect();

        let height: f32 = galleys.iter().map(|galley| galley.size().y).sum();
        let mut y = rect.center().y - height / 2.0;
        for galley in galleys {
            let size = galley.size();
            let x = rect.center().x - size.x / 2.0;
            painter.galley(egui::pos2(x, y), galley, color);
            y += size.y;
        }
    }

    fn show_top_left(&self, ui: &mut Ui) {
        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            for line in &self.lines {
                ui.label(
                    RichText::new(&line.text)
                        .size(line.font_size as f32)
                        .monospace(),
                );
            }
        });
    }
}

impl Canvas for DisplayCanvas {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn draw_line(
        &mut self,
        text: &str,
        placement: Placement,
        font_size: u32,
    ) -> Result<(), RenderError> {
        self.lines.push(DrawnLine {
            text: text.to_string(),
            placement,
            font_size,
        });
        Ok(())
    }
}
