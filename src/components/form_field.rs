//! Reusable form field component for label + input patterns.

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::{Input, InputState};

use crate::theme::spacing;

/// A reusable form field component that renders a label above an input.
pub struct FormField {
    label: SharedString,
    input: Entity<InputState>,
    description: Option<SharedString>,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>, input: &Entity<InputState>) -> Self {
        Self { label: label.into(), input: input.clone(), description: None }
    }

    /// Add a description/help text below the label.
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render the form field into an element.
    pub fn render(self, cx: &App) -> impl IntoElement {
        let mut field = div()
            .flex()
            .flex_col()
            .flex_1()
            .gap(spacing::xs())
            .child(div().text_sm().text_color(cx.theme().foreground).child(self.label));

        if let Some(description) = self.description {
            field = field.child(
                div().text_xs().text_color(cx.theme().muted_foreground).child(description),
            );
        }

        field.child(Input::new(&self.input))
    }
}

/// Create a form field from a label and input state.
pub fn form_field(label: impl Into<SharedString>, input: &Entity<InputState>) -> FormField {
    FormField::new(label, input)
}
