use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::checkbox::Checkbox;
use gpui_component::scroll::ScrollableElement;

use crate::components::{Button, section};
use crate::state::{AppEvent, ColumnSelection};
use crate::theme::{borders, sizing, spacing};

use super::WizardView;

/// A scrollable checkbox list over a column set.
pub(super) struct ColumnList {
    id: SharedString,
    columns: Vec<String>,
    selected: ColumnSelection,
    bulk_actions: bool,
}

impl ColumnList {
    pub(super) fn new(
        id: impl Into<SharedString>,
        columns: Vec<String>,
        selected: ColumnSelection,
    ) -> Self {
        Self { id: id.into(), columns, selected, bulk_actions: false }
    }

    /// Show "Select All" / "Deselect All" above the list.
    pub(super) fn with_bulk_actions(mut self) -> Self {
        self.bulk_actions = true;
        self
    }

    pub(super) fn render(
        self,
        cx: &mut Context<WizardView>,
        toggle: impl Fn(String) -> AppEvent + Clone + 'static,
    ) -> AnyElement {
        let mut header = div()
            .flex()
            .items_center()
            .gap(spacing::sm())
            .child(div().text_sm().text_color(cx.theme().muted_foreground).child(format!(
                "{} of {} columns selected",
                self.selected.len(),
                self.columns.len()
            )));

        if self.bulk_actions {
            header = header
                .child(
                    Button::new(SharedString::from(format!("{}-select-all", self.id)))
                        .compact()
                        .label("Select All")
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.dispatch(AppEvent::AllColumnsSelected, window, cx);
                        })),
                )
                .child(
                    Button::new(SharedString::from(format!("{}-deselect-all", self.id)))
                        .compact()
                        .label("Deselect All")
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.dispatch(AppEvent::AllColumnsDeselected, window, cx);
                        })),
                );
        }

        let mut list = div().flex().flex_col().gap(spacing::xs());
        for (ix, column) in self.columns.into_iter().enumerate() {
            let checked = self.selected.contains(&column);
            let toggle = toggle.clone();
            let label = column.clone();
            list = list.child(
                div()
                    .flex()
                    .items_center()
                    .gap(spacing::sm())
                    .child(
                        Checkbox::new(ElementId::NamedInteger(self.id.clone(), ix as u64))
                            .checked(checked)
                            .on_click(cx.listener(move |this, _, window, cx| {
                                this.dispatch(toggle(column.clone()), window, cx);
                            })),
                    )
                    .child(div().text_sm().child(label)),
            );
        }

        div()
            .flex()
            .flex_col()
            .gap(spacing::sm())
            .child(header)
            .child(
                div()
                    .max_h(sizing::column_list_height())
                    .p(spacing::sm())
                    .rounded(borders::radius_sm())
                    .border_1()
                    .border_color(cx.theme().border)
                    .bg(cx.theme().background)
                    .overflow_y_scrollbar()
                    .child(list),
            )
            .into_any_element()
    }
}

impl WizardView {
    pub(super) fn render_csv_columns_section(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (columns, selected) = {
            let state = self.state.lock();
            (state.csv_columns().to_vec(), state.selected_csv_columns().clone())
        };

        section("File Columns", cx)
            .child(
                ColumnList::new("csv-column", columns, selected)
                    .with_bulk_actions()
                    .render(cx, AppEvent::CsvColumnToggled),
            )
            .into_any_element()
    }
}
