//! The transfer wizard view.
//!
//! Renders the sections `AppState::sections()` reports as visible and forwards user input
//! to the reducer (synchronous edits) or to `AppCommands` (backend calls, run on the
//! tokio runtime).

mod columns;
mod connection;
mod flat_file;
mod join;
mod preview;
mod source;
mod status;
mod table;

use std::future::Future;

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::WindowExt as _;
use gpui_component::input::{InputEvent, InputState};
use gpui_component::scroll::ScrollableElement;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::state::{AppCommands, AppEvent, SharedState};
use crate::theme::{sizing, spacing, typography};

/// Form inputs backed by gpui-component input states.
struct WizardInputs {
    host: Entity<InputState>,
    port: Entity<InputState>,
    database: Entity<InputState>,
    user: Entity<InputState>,
    password: Entity<InputState>,
    token: Entity<InputState>,
    export_file_name: Entity<InputState>,
    target_table_name: Entity<InputState>,
}

pub struct WizardView {
    state: SharedState,
    runtime: Handle,
    inputs: WizardInputs,
    /// One input per join condition, in condition order.
    condition_inputs: Vec<(Entity<InputState>, Subscription)>,
    _subscriptions: Vec<Subscription>,
}

impl WizardView {
    pub fn new(
        state: SharedState,
        runtime: Handle,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let (connection, export_file_name, target_table_name) = {
            let state = state.lock();
            (
                state.connection.clone(),
                state.export_file_name.clone(),
                state.target_table_name.clone(),
            )
        };

        let text_input = |value: String,
                          placeholder: &'static str,
                          window: &mut Window,
                          cx: &mut Context<Self>| {
            cx.new(|cx| InputState::new(window, cx).placeholder(placeholder).default_value(value))
        };

        let inputs = WizardInputs {
            host: text_input(connection.host, "localhost", window, cx),
            port: text_input(connection.port, "9000", window, cx),
            database: text_input(connection.database, "default", window, cx),
            user: text_input(connection.user, "default", window, cx),
            password: cx.new(|cx| {
                InputState::new(window, cx)
                    .masked(true)
                    .placeholder("password")
                    .default_value(connection.password)
            }),
            token: text_input(connection.token, "JWT token (optional)", window, cx),
            export_file_name: text_input(export_file_name, "export.csv", window, cx),
            target_table_name: text_input(target_table_name, "imported_data", window, cx),
        };

        let mut subscriptions = Vec::new();
        let bindings: [(&Entity<InputState>, fn(&mut crate::state::AppState, String)); 8] = [
            (&inputs.host, |s, v| s.connection.host = v),
            (&inputs.port, |s, v| s.connection.port = v),
            (&inputs.database, |s, v| s.connection.database = v),
            (&inputs.user, |s, v| s.connection.user = v),
            (&inputs.password, |s, v| s.connection.password = v),
            (&inputs.token, |s, v| s.connection.token = v),
            (&inputs.export_file_name, |s, v| s.export_file_name = v),
            (&inputs.target_table_name, |s, v| s.target_table_name = v),
        ];
        for (input, write) in bindings {
            subscriptions.push(cx.subscribe_in(
                input,
                window,
                move |view, input, event, _window, cx| {
                    if matches!(event, InputEvent::Change) {
                        let value = input.read(cx).value().to_string();
                        write(&mut view.state.lock(), value);
                        cx.notify();
                    }
                },
            ));
        }

        Self {
            state,
            runtime,
            inputs,
            condition_inputs: Vec::new(),
            _subscriptions: subscriptions,
        }
    }

    /// Apply a synchronous edit and re-render.
    fn dispatch(&mut self, event: AppEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.state.lock().apply(event);
        self.sync_inputs(window, cx);
        cx.notify();
    }

    /// Run a command on the tokio runtime and re-render when it settles.
    fn run<F>(&mut self, command: F, window: &mut Window, cx: &mut Context<Self>)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = self.runtime.spawn(command);
        cx.notify();
        cx.spawn_in(window, async move |view: WeakEntity<Self>, cx: &mut AsyncWindowContext| {
            if let Err(e) = handle.await {
                log::error!("Command task failed: {}", e);
            }
            let _ = view.update_in(cx, |this, window, cx| {
                this.sync_inputs(window, cx);
                cx.notify();
            });
        })
        .detach();
    }

    /// Run a transfer; re-render when it settles and again when its progress bar hides.
    fn run_transfer<F>(&mut self, command: F, window: &mut Window, cx: &mut Context<Self>)
    where
        F: Future<Output = Option<JoinHandle<()>>> + Send + 'static,
    {
        let handle = self.runtime.spawn(command);
        cx.notify();
        cx.spawn_in(window, async move |view: WeakEntity<Self>, cx: &mut AsyncWindowContext| {
            let hide = match handle.await {
                Ok(hide) => hide,
                Err(e) => {
                    log::error!("Transfer task failed: {}", e);
                    None
                }
            };
            let _ = view.update_in(cx, |_, _, cx| cx.notify());

            if let Some(hide) = hide {
                let _ = hide.await;
                let _ = view.update_in(cx, |_, _, cx| cx.notify());
            }
        })
        .detach();
    }

    /// Request a token with the stored payload, then close the token dialog.
    pub fn generate_token(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let handle = self.runtime.spawn(AppCommands::generate_token(self.state.clone()));
        cx.spawn_in(window, async move |view: WeakEntity<Self>, cx: &mut AsyncWindowContext| {
            match handle.await {
                Ok(token) => log::info!("Token ready (placeholder: {})", token.is_placeholder()),
                Err(e) => log::error!("Token task failed: {}", e),
            }
            let _ = view.update_in(cx, |this, window, cx| {
                this.sync_inputs(window, cx);
                window.close_dialog(cx);
                cx.notify();
            });
        })
        .detach();
    }

    /// Push state-derived values back into inputs the state may have rewritten.
    fn sync_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let (token, export_file_name, target_table_name, conditions) = {
            let state = self.state.lock();
            (
                state.connection.token.clone(),
                state.export_file_name.clone(),
                state.target_table_name.clone(),
                state.join().conditions().to_vec(),
            )
        };

        for (input, value) in [
            (&self.inputs.token, token),
            (&self.inputs.export_file_name, export_file_name),
            (&self.inputs.target_table_name, target_table_name),
        ] {
            if input.read(cx).value().to_string() != value {
                input.update(cx, |input, cx| input.set_value(value, window, cx));
            }
        }

        self.sync_condition_inputs(&conditions, window, cx);
    }

    fn sync_condition_inputs(
        &mut self,
        conditions: &[String],
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.condition_inputs.truncate(conditions.len());
        while self.condition_inputs.len() < conditions.len() {
            let input = cx.new(|cx| {
                InputState::new(window, cx).placeholder("e.g. table1.id = table2.table1_id")
            });
            let subscription =
                cx.subscribe_in(&input, window, move |view, input, event, _window, cx| {
                    if !matches!(event, InputEvent::Change) {
                        return;
                    }
                    let Some(index) =
                        view.condition_inputs.iter().position(|(entry, _)| entry == input)
                    else {
                        return;
                    };
                    let condition = input.read(cx).value().to_string();
                    view.state.lock().apply(AppEvent::JoinConditionChanged { index, condition });
                    cx.notify();
                });
            self.condition_inputs.push((input, subscription));
        }

        for ((input, _), condition) in self.condition_inputs.iter().zip(conditions) {
            if input.read(cx).value().to_string() != *condition {
                let condition = condition.clone();
                input.update(cx, |input, cx| input.set_value(condition, window, cx));
            }
        }
    }
}

impl Render for WizardView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let sections = self.state.lock().sections();

        let mut body = div()
            .flex()
            .flex_col()
            .gap(spacing::lg())
            .w_full()
            .max_w(sizing::wizard_max_width())
            .child(
                div()
                    .text_size(typography::text_title())
                    .text_color(cx.theme().foreground)
                    .child("ClickHouse & Flat File Data Transfer"),
            )
            .child(self.render_source_section(window, cx));

        if sections.connection {
            body = body.child(self.render_connection_section(window, cx));
        }
        if sections.flat_file {
            body = body.child(self.render_flat_file_section(&sections, window, cx));
        }
        if sections.clickhouse_table {
            body = body.child(self.render_table_section(&sections, window, cx));
        }
        if sections.join_panel {
            body = body.child(self.render_join_section(window, cx));
        }
        if sections.csv_columns {
            body = body.child(self.render_csv_columns_section(window, cx));
        }
        if sections.preview {
            body = body.child(self.render_preview_section(cx));
        }
        if sections.status_panel {
            body = body.child(self.render_status_section(&sections, cx));
        }
        body = body.child(self.render_actions(&sections, window, cx));

        div()
            .size_full()
            .overflow_y_scrollbar()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(div().flex().justify_center().p(spacing::lg()).child(body))
    }
}
