//! Titled card wrapping one wizard section.

use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::theme::{borders, spacing, typography};

pub fn section(title: impl Into<SharedString>, cx: &App) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(spacing::sm())
        .p(spacing::md())
        .rounded(borders::radius_md())
        .border_1()
        .border_color(cx.theme().border)
        .bg(cx.theme().secondary)
        .child(
            div()
                .text_size(typography::text_sm())
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(cx.theme().foreground)
                .child(title.into()),
        )
}

/// Horizontal row of segmented choice buttons.
pub fn choice_row() -> Div {
    div().flex().flex_wrap().items_center().gap(spacing::xs())
}
