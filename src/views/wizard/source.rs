use gpui::*;

use crate::components::{Button, choice_row, section};
use crate::models::{DataSource, TransferDirection};
use crate::state::AppEvent;

use super::WizardView;

impl WizardView {
    pub(super) fn render_source_section(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (current_source, current_direction, loading) = {
            let state = self.state.lock();
            (state.data_source(), state.direction(), state.is_loading())
        };

        let mut sources = choice_row();
        for (ix, source) in DataSource::all().iter().copied().enumerate() {
            sources = sources.child(
                Button::new(("source", ix))
                    .label(source.label())
                    .selected(source == current_source)
                    .disabled(loading)
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.dispatch(AppEvent::DataSourceChanged(source), window, cx);
                    })),
            );
        }

        let mut directions = choice_row();
        for (ix, direction) in TransferDirection::all().iter().copied().enumerate() {
            directions = directions.child(
                Button::new(("direction", ix))
                    .label(direction.label())
                    .selected(direction == current_direction)
                    .disabled(loading)
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.dispatch(AppEvent::DirectionChanged(direction), window, cx);
                    })),
            );
        }

        section("Source & Direction", cx)
            .child(sources)
            .child(directions)
            .into_any_element()
    }
}
