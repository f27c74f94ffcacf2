use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::Input;

use crate::components::{Button, choice_row, section};
use crate::state::{AppCommands, AppEvent};
use crate::theme::{borders, spacing};

use super::WizardView;
use super::columns::ColumnList;

impl WizardView {
    pub(super) fn render_join_section(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (join, available_tables, can_preview, loading) = {
            let state = self.state.lock();
            (
                state.join().clone(),
                state.available_tables().to_vec(),
                state.can_preview_join(),
                state.is_loading(),
            )
        };

        let mut root = section("Join Tables", cx).child(
            div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child("Each added table needs a join condition, e.g. orders.customer_id = customers.id"),
        );

        for (index, table) in join.tables().iter().enumerate() {
            let mut row = div()
                .flex()
                .flex_col()
                .gap(spacing::sm())
                .p(spacing::sm())
                .rounded(borders::radius_sm())
                .border_1()
                .border_color(cx.theme().border);

            if index == 0 {
                row = row.child(div().text_sm().child(format!("Base table: {}", table)));
            } else {
                row = row
                    .child(self.render_join_table_picker(index, table, &available_tables, cx))
                    .when_some(self.condition_inputs.get(index - 1), |el, (input, _)| {
                        el.child(Input::new(input))
                    });
            }

            let columns = join.columns_of(table).to_vec();
            if !columns.is_empty() {
                let selected = join.selected_columns_of(table).cloned().unwrap_or_default();
                let owner = table.clone();
                let id = format!("join-column-{}", index);
                row = row.child(ColumnList::new(id, columns, selected).render(cx, move |column| {
                    AppEvent::JoinColumnToggled { table: owner.clone(), column }
                }));
            }

            root = root.child(row);
        }

        root.child(
            div()
                .flex()
                .gap(spacing::sm())
                .child(
                    Button::new("join-add-table")
                        .label("Add Table")
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.dispatch(AppEvent::JoinTableAdded, window, cx);
                        })),
                )
                .child(
                    Button::new("join-preview")
                        .label("Preview Join")
                        .disabled(!can_preview || loading)
                        .on_click(cx.listener(|this, _, window, cx| {
                            let state = this.state.clone();
                            this.run(AppCommands::preview_join(state), window, cx);
                        })),
                ),
        )
        .into_any_element()
    }

    fn render_join_table_picker(
        &self,
        index: usize,
        current: &str,
        available_tables: &[String],
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let mut picker = choice_row().child(div().text_sm().child(format!("Table {}", index + 1)));
        for (ix, table) in available_tables.iter().enumerate() {
            let table = table.clone();
            picker = picker.child(
                Button::new(ElementId::NamedInteger(
                    format!("join-table-{}", index).into(),
                    ix as u64,
                ))
                .compact()
                .label(table.clone())
                .selected(table == current)
                .on_click(cx.listener(move |this, _, window, cx| {
                    let state = this.state.clone();
                    let table = table.clone();
                    this.run(
                        async move {
                            if let Some(load) = AppCommands::change_join_table(state, index, table)
                                && let Err(e) = load.await
                            {
                                log::error!("Join column load failed: {}", e);
                            }
                        },
                        window,
                        cx,
                    );
                })),
            );
        }

        picker
            .child(
                Button::new(ElementId::NamedInteger("join-remove".into(), index as u64))
                    .compact()
                    .danger()
                    .label("Remove")
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.dispatch(AppEvent::JoinTableRemoved(index), window, cx);
                    })),
            )
            .into_any_element()
    }
}
