use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::scroll::ScrollableElement;

use crate::components::section;
use crate::theme::{colors, sizing, spacing};

use super::WizardView;

impl WizardView {
    pub(super) fn render_preview_section(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let Some(preview) = self.state.lock().preview().cloned() else {
            return div().into_any_element();
        };

        let cell = |text: String| {
            div()
                .w(sizing::preview_cell_width())
                .flex_shrink_0()
                .px(spacing::sm())
                .py(spacing::xs())
                .overflow_hidden()
                .text_ellipsis()
                .whitespace_nowrap()
                .text_sm()
                .child(text)
        };

        let mut header = div()
            .flex()
            .bg(colors::bg_selected(cx))
            .border_b_1()
            .border_color(cx.theme().border);
        for column in &preview.columns {
            header = header.child(cell(column.clone()).font_weight(FontWeight::SEMIBOLD));
        }

        let mut table = div().flex().flex_col().child(header);
        for row in 0..preview.rows.len() {
            let mut line = div().flex().border_b_1().border_color(cx.theme().border);
            for column in &preview.columns {
                line = line.child(cell(preview.cell(row, column)));
            }
            table = table.child(line);
        }

        section("Data Preview", cx)
            .child(div().text_xs().text_color(cx.theme().muted_foreground).child(format!(
                "Showing {} of {} rows",
                preview.rows.len(),
                preview.total_rows.max(preview.rows.len())
            )))
            .child(
                div()
                    .w_full()
                    .overflow_x_scrollbar()
                    .child(table),
            )
            .into_any_element()
    }
}
