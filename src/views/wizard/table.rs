use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::components::{Button, choice_row, form_field, section};
use crate::state::{AppCommands, AppEvent, VisibleSections};
use crate::theme::spacing;

use super::WizardView;
use super::columns::ColumnList;

impl WizardView {
    pub(super) fn render_table_section(
        &mut self,
        sections: &VisibleSections,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (tables, selected_table, can_load_schema, can_preview, join_open) = {
            let state = self.state.lock();
            (
                state.available_tables().to_vec(),
                state.selected_table().to_string(),
                state.can_load_schema(),
                state.can_preview_table(),
                state.join().is_open(),
            )
        };

        let mut root = section("ClickHouse Table", cx);

        if sections.table_picker {
            let mut picker = choice_row();
            if tables.is_empty() {
                picker = picker.child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Connect to list tables"),
                );
            }
            for (ix, table) in tables.iter().enumerate() {
                let table = table.clone();
                picker = picker.child(
                    Button::new(("table", ix))
                        .compact()
                        .label(table.clone())
                        .selected(table == selected_table)
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.dispatch(AppEvent::TableSelected(table.clone()), window, cx);
                        })),
                );
            }
            root = root.child(picker);
        }

        if sections.load_columns_button {
            root = root.child(
                div().flex().child(
                    Button::new("load-columns")
                        .label("Load Columns")
                        .disabled(!can_load_schema)
                        .on_click(cx.listener(|this, _, window, cx| {
                            let state = this.state.clone();
                            this.run(AppCommands::load_schema(state), window, cx);
                        })),
                ),
            );
        }

        if sections.target_table_name {
            root = root.child(
                form_field("Target Table Name", &self.inputs.target_table_name)
                    .description("Created if it does not exist")
                    .render(cx),
            );
        }

        if sections.column_list {
            root = root.child(self.render_table_columns(window, cx));
        }

        root.when(sections.table_actions, |el| {
            el.child(
                div()
                    .flex()
                    .gap(spacing::sm())
                    .child(
                        Button::new("preview-table")
                            .label("Preview Data")
                            .disabled(!can_preview)
                            .on_click(cx.listener(|this, _, window, cx| {
                                let state = this.state.clone();
                                this.run(AppCommands::preview_table(state), window, cx);
                            })),
                    )
                    .child(
                        Button::new("toggle-join")
                            .label(if join_open { "Cancel Join" } else { "Join Tables" })
                            .selected(join_open)
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.dispatch(AppEvent::JoinPanelToggled, window, cx);
                            })),
                    ),
            )
        })
        .into_any_element()
    }

    fn render_table_columns(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let (columns, selected) = {
            let state = self.state.lock();
            (state.table_columns().to_vec(), state.selected_columns().clone())
        };

        ColumnList::new("table-column", columns, selected)
            .with_bulk_actions()
            .render(cx, AppEvent::TableColumnToggled)
    }
}
