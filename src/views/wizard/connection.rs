use gpui::prelude::FluentBuilder as _;
use gpui::*;

use crate::components::{Button, TokenDialog, form_field, section};
use crate::state::AppCommands;
use crate::theme::spacing;

use super::WizardView;

impl WizardView {
    pub(super) fn render_connection_section(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (can_connect, table_count) = {
            let state = self.state.lock();
            (state.can_connect(), state.available_tables().len())
        };

        let row = || div().flex().gap(spacing::md());

        let actions = div()
            .flex()
            .items_center()
            .gap(spacing::sm())
            .child(
                Button::new("connect")
                    .primary()
                    .label("Connect")
                    .disabled(!can_connect)
                    .on_click(cx.listener(|this, _, window, cx| {
                        let state = this.state.clone();
                        this.run(AppCommands::connect(state), window, cx);
                    })),
            )
            .child(
                Button::new("generate-token")
                    .label("Generate Token")
                    .on_click(cx.listener(|this, _, window, cx| {
                        TokenDialog::open(this.state.clone(), cx.entity(), window, cx);
                    })),
            )
            .when(table_count > 0, |el| {
                el.child(div().text_sm().child(format!("{} tables available", table_count)))
            });

        section("ClickHouse Connection", cx)
            .child(
                row()
                    .child(form_field("Host", &self.inputs.host).render(cx))
                    .child(form_field("Port", &self.inputs.port).render(cx)),
            )
            .child(
                row()
                    .child(form_field("Database", &self.inputs.database).render(cx))
                    .child(form_field("User", &self.inputs.user).render(cx)),
            )
            .child(
                row()
                    .child(form_field("Password", &self.inputs.password).render(cx))
                    .child(
                        form_field("JWT Token", &self.inputs.token)
                            .description("Sent as a bearer token when set")
                            .render(cx),
                    ),
            )
            .child(actions)
            .into_any_element()
    }
}
