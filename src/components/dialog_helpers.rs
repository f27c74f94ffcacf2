//! Dialog helper utilities to reduce boilerplate in dialog creation.

use gpui::*;
use gpui_component::WindowExt as _;

use crate::components::Button;

/// Creates a standard Cancel button. Runs `on_cancel`, then closes the dialog.
pub fn cancel_button(
    id: impl Into<ElementId>,
    on_cancel: impl Fn(&mut Window, &mut App) + 'static,
) -> AnyElement {
    Button::new(id)
        .danger()
        .label("Cancel")
        .on_click(move |_, window, cx| {
            on_cancel(window, cx);
            window.close_dialog(cx);
        })
        .into_any_element()
}

/// Creates a standard primary action button for dialogs.
pub fn primary_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    disabled: bool,
    on_click: impl Fn(&mut Window, &mut App) + 'static,
) -> AnyElement {
    Button::new(id)
        .primary()
        .label(label)
        .disabled(disabled)
        .on_click(move |_, window, cx| {
            on_click(window, cx);
        })
        .into_any_element()
}
