//! Dialog collecting the claims of a JWT and requesting it from the backend.

use gpui::*;
use gpui_component::WindowExt as _;
use gpui_component::dialog::Dialog;
use gpui_component::input::InputState;

use crate::components::dialog_helpers::{cancel_button, primary_button};
use crate::components::{Button, choice_row, form_field};
use crate::models::{MAX_TOKEN_HOURS, MIN_TOKEN_HOURS, TokenRole};
use crate::state::{AppEvent, SharedState};
use crate::theme::spacing;
use crate::views::WizardView;

pub struct TokenDialog {
    state: SharedState,
    wizard: Entity<WizardView>,
    sub_state: Entity<InputState>,
    name_state: Entity<InputState>,
    exp_state: Entity<InputState>,
    role: TokenRole,
    generating: bool,
}

impl TokenDialog {
    pub fn open(state: SharedState, wizard: Entity<WizardView>, window: &mut Window, cx: &mut App) {
        state.lock().apply(AppEvent::TokenDialogOpened);
        let dialog_view = cx.new(|cx| TokenDialog::new(state.clone(), wizard, window, cx));
        window.open_dialog(cx, move |dialog: Dialog, _window: &mut Window, _cx: &mut App| {
            dialog.title("Generate JWT Token").min_w(px(420.0)).child(dialog_view.clone())
        });
    }

    fn new(
        state: SharedState,
        wizard: Entity<WizardView>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let payload = state.lock().token_payload.clone();

        let sub_state = cx.new(|cx| {
            InputState::new(window, cx).placeholder("user123").default_value(payload.sub)
        });
        let name_state = cx.new(|cx| {
            InputState::new(window, cx).placeholder("John Doe").default_value(payload.name)
        });
        let exp_state = cx.new(|cx| {
            InputState::new(window, cx).placeholder("24").default_value(payload.exp.to_string())
        });

        Self {
            state,
            wizard,
            sub_state,
            name_state,
            exp_state,
            role: payload.role,
            generating: false,
        }
    }

    /// Copy the form into the stored payload and hand generation to the wizard.
    fn generate(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let sub = self.sub_state.read(cx).value().trim().to_string();
        let name = self.name_state.read(cx).value().trim().to_string();
        let exp = self.exp_state.read(cx).value().to_string();
        {
            let mut state = self.state.lock();
            state.token_payload.sub = sub;
            state.token_payload.name = name;
            state.token_payload.role = self.role;
            state.token_payload.set_exp_from_input(&exp);
        }

        self.generating = true;
        cx.notify();
        self.wizard.update(cx, |wizard, cx| wizard.generate_token(window, cx));
    }
}

impl Render for TokenDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut roles = choice_row();
        for (ix, role) in TokenRole::all().iter().copied().enumerate() {
            roles = roles.child(
                Button::new(("token-role", ix))
                    .compact()
                    .label(role.label())
                    .selected(role == self.role)
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.role = role;
                        cx.notify();
                    })),
            );
        }

        let view = cx.entity();
        let state = self.state.clone();

        div()
            .flex()
            .flex_col()
            .gap(spacing::md())
            .p(spacing::md())
            .child(form_field("Subject", &self.sub_state).render(cx))
            .child(form_field("Name", &self.name_state).render(cx))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(spacing::xs())
                    .child(div().text_sm().child("Role"))
                    .child(roles),
            )
            .child(
                form_field("Expires In (hours)", &self.exp_state)
                    .description(format!("Between {} and {}", MIN_TOKEN_HOURS, MAX_TOKEN_HOURS))
                    .render(cx),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_end()
                    .gap(spacing::sm())
                    .child(cancel_button("token-cancel", move |_window, _cx| {
                        state.lock().apply(AppEvent::TokenDialogClosed);
                    }))
                    .child(primary_button(
                        "token-generate",
                        if self.generating { "Generating..." } else { "Generate" },
                        self.generating,
                        move |window, cx| {
                            view.update(cx, |this, cx| this.generate(window, cx));
                        },
                    )),
            )
    }
}
