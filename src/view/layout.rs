//! Browser screen layout.
//!
//! One row each for the prompt, help line and status bar, then one row per
//! entry on the current page. Rows are filled to the full width with their
//! style; text past the right edge is truncated.

use super::constants::{FIRST_ENTRY_ROW, HELP_ROW, PROMPT_ROW, STATUS_ROW};
use super::styles::BrowserStyles;
use crate::state::RenderModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
    Frame,
};

/// Widget drawing a [`RenderModel`].
pub struct BrowserView<'a> {
    model: &'a RenderModel<'a>,
    styles: &'a BrowserStyles,
}

impl<'a> BrowserView<'a> {
    /// Create new BrowserView widget.
    pub fn new(model: &'a RenderModel<'a>, styles: &'a BrowserStyles) -> Self {
        Self { model, styles }
    }
}

impl Widget for BrowserView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let normal = self.styles.normal();

        render_row(area, buf, PROMPT_ROW, &self.model.prompt, normal);
        render_row(area, buf, HELP_ROW, self.model.help, normal);
        render_row(area, buf, STATUS_ROW, &self.model.status, self.styles.status());

        for (index, entry) in self.model.entries.iter().enumerate() {
            let Ok(offset) = u16::try_from(index) else {
                break;
            };
            let style = if self.model.selected == Some(index) {
                self.styles.selected()
            } else {
                normal
            };
            render_row(
                area,
                buf,
                FIRST_ENTRY_ROW.saturating_add(offset),
                entry.as_str(),
                style,
            );
        }
    }
}

/// Draw `text` on row `row` of `area`, skipping rows below the bottom edge.
fn render_row(area: Rect, buf: &mut Buffer, row: u16, text: &str, style: Style) {
    if row >= area.height {
        return;
    }
    let row_area = Rect {
        x: area.x,
        y: area.y + row,
        width: area.width,
        height: 1,
    };
    Paragraph::new(text).style(style).render(row_area, buf);
}

/// Render the whole browser into `frame`.
pub fn render_layout(frame: &mut Frame, model: &RenderModel<'_>, styles: &BrowserStyles) {
    frame.render_widget(BrowserView::new(model, styles), frame.area());
}
