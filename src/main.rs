#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clickbridge::app::AppRoot;
use clickbridge::state::{AppCommands, AppState};
use gpui::*;
use gpui_component::Root;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Backend requests run here; views only await their join handles.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("clickbridge-io")
        .build()?;
    let handle = runtime.handle().clone();

    let state = AppCommands::shared(AppState::load()?);
    log::info!("Using backend {}", state.lock().settings.backend.resolved_base_url());

    let app = Application::new().with_assets(gpui_component_assets::Assets);
    app.run(move |cx: &mut gpui::App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(1000.0), px(820.0)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("ClickBridge".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let app_view = cx.new(|cx| AppRoot::new(state.clone(), handle.clone(), window, cx));

                // Quit the app when the window is closed
                let closing_view = app_view.clone();
                window.on_window_should_close(cx, move |_window, cx| {
                    closing_view.read(cx).save_settings();
                    cx.quit();
                    true
                });

                cx.new(|cx| Root::new(app_view, window, cx))
            },
        );
        if let Err(e) = opened {
            log::error!("Failed to open window: {}", e);
            cx.quit();
        }
    });

    drop(runtime);
    Ok(())
}
