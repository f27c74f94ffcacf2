use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::components::file_picker::pick_flat_file;
use crate::components::{Button, choice_row, form_field, section};
use crate::models::{Delimiter, FileSelection};
use crate::state::{AppCommands, AppEvent, VisibleSections};
use crate::theme::spacing;

use super::WizardView;

impl WizardView {
    pub(super) fn render_flat_file_section(
        &mut self,
        sections: &VisibleSections,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (file_name, current_delimiter, can_preview, loading) = {
            let state = self.state.lock();
            (
                state.file().map(|f| f.name.clone()),
                state.delimiter,
                state.can_preview_file(),
                state.is_loading(),
            )
        };

        let mut delimiters = choice_row().child(div().text_sm().child("Delimiter"));
        for (ix, delimiter) in Delimiter::all().iter().copied().enumerate() {
            delimiters = delimiters.child(
                Button::new(("delimiter", ix))
                    .compact()
                    .label(delimiter.label())
                    .selected(delimiter == current_delimiter)
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.state.lock().delimiter = delimiter;
                        cx.notify();
                    })),
            );
        }

        section("Flat File", cx)
            .when(sections.file_picker, |el| {
                el.child(
                    div()
                        .flex()
                        .items_center()
                        .gap(spacing::sm())
                        .child(
                            Button::new("pick-file")
                                .label("Choose File...")
                                .disabled(loading)
                                .on_click(cx.listener(|_this, _, window, cx| {
                                    cx.spawn_in(
                                        window,
                                        async move |view: WeakEntity<Self>,
                                                    cx: &mut AsyncWindowContext| {
                                            let Some(path) = pick_flat_file().await else {
                                                return;
                                            };
                                            let file = FileSelection::new(path);
                                            log::debug!("Selected flat file {}", file.name);
                                            let _ = view.update_in(cx, |this, window, cx| {
                                                this.dispatch(
                                                    AppEvent::FileSelected(file),
                                                    window,
                                                    cx,
                                                );
                                            });
                                        },
                                    )
                                    .detach();
                                })),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(file_name.unwrap_or_else(|| "No file selected".to_string())),
                        ),
                )
            })
            .child(delimiters)
            .when(sections.export_file_name, |el| {
                el.child(form_field("Output File Name", &self.inputs.export_file_name).render(cx))
            })
            .when(sections.file_preview_button, |el| {
                el.child(
                    div().flex().child(
                        Button::new("preview-file")
                            .label("Preview File")
                            .disabled(!can_preview)
                            .on_click(cx.listener(|this, _, window, cx| {
                                let state = this.state.clone();
                                this.run(AppCommands::preview_file(state), window, cx);
                            })),
                    ),
                )
            })
            .into_any_element()
    }
}
