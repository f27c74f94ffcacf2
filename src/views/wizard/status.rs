use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::progress::Progress;

use crate::components::{Button, section};
use crate::state::{AppCommands, VisibleSections};
use crate::theme::{borders, colors, spacing};

use super::WizardView;

impl WizardView {
    pub(super) fn render_status_section(
        &mut self,
        sections: &VisibleSections,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (status, message, records, progress) = {
            let state = self.state.lock();
            (
                state.status(),
                state.status_message(),
                state.records_processed(),
                state.progress(),
            )
        };

        section("Status", cx)
            .when(sections.status_line, |el| {
                el.child(div().text_sm().child(format!("Status: {}", status.label())))
            })
            .when(sections.progress, |el| {
                el.child(Progress::new().value(progress.value()))
            })
            .when(records > 0, |el| {
                el.child(div().text_sm().child(format!("Records processed: {}", records)))
            })
            .when_some(message, |el, message| {
                let (bg, border) = if message.is_error() {
                    (colors::bg_error(cx), colors::border_error(cx))
                } else {
                    (colors::bg_success(cx), cx.theme().border)
                };
                el.child(
                    div()
                        .p(spacing::sm())
                        .rounded(borders::radius_sm())
                        .border_1()
                        .border_color(border)
                        .bg(bg)
                        .text_sm()
                        .when(message.is_error(), |el| el.text_color(cx.theme().danger))
                        .child(message.text),
                )
            })
            .into_any_element()
    }

    pub(super) fn render_actions(
        &mut self,
        sections: &VisibleSections,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (can_upload, can_export, join_open) = {
            let state = self.state.lock();
            (state.can_upload(), state.can_export(), state.join().is_open())
        };

        div()
            .flex()
            .justify_end()
            .gap(spacing::sm())
            .when(sections.upload_button, |el| {
                el.child(
                    Button::new("upload")
                        .primary()
                        .label("Upload to ClickHouse")
                        .disabled(!can_upload)
                        .on_click(cx.listener(|this, _, window, cx| {
                            let state = this.state.clone();
                            this.run_transfer(AppCommands::upload(state), window, cx);
                        })),
                )
            })
            .when(sections.export_button, |el| {
                el.child(
                    Button::new("export")
                        .primary()
                        .label(if join_open { "Export Joined Data" } else { "Export to File" })
                        .disabled(!can_export)
                        .on_click(cx.listener(|this, _, window, cx| {
                            let state = this.state.clone();
                            this.run_transfer(AppCommands::execute(state), window, cx);
                        })),
                )
            })
            .into_any_element()
    }
}
