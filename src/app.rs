//! Root view: hosts the wizard and the dialog layer.

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::Root;
use tokio::runtime::Handle;

use crate::state::SharedState;
use crate::views::WizardView;

pub struct AppRoot {
    state: SharedState,
    wizard: Entity<WizardView>,
}

impl AppRoot {
    pub fn new(
        state: SharedState,
        runtime: Handle,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let wizard = cx.new(|cx| WizardView::new(state.clone(), runtime, window, cx));
        Self { state, wizard }
    }

    /// Persist settings before the window goes away.
    pub fn save_settings(&self) {
        self.state.lock().save_settings();
    }
}

impl Render for AppRoot {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Context derefs to App
        let dialog_layer = Root::render_dialog_layer(window, cx);

        div()
            .size_full()
            .bg(cx.theme().background)
            .child(self.wizard.clone())
            .children(dialog_layer)
    }
}
