use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::theme::{borders, colors, sizing, spacing, typography};

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Primary,
    Danger,
    Ghost,
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    variant: ButtonVariant,
    on_click: Option<ClickHandler>,
    disabled: bool,
    selected: bool,
    compact: bool,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            variant: ButtonVariant::Secondary,
            on_click: None,
            disabled: false,
            selected: false,
            compact: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.variant = ButtonVariant::Primary;
        self
    }

    pub fn ghost(mut self) -> Self {
        self.variant = ButtonVariant::Ghost;
        self
    }

    pub fn danger(mut self) -> Self {
        self.variant = ButtonVariant::Danger;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Render as the active option of a segmented choice.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let variant = if self.selected { ButtonVariant::Primary } else { self.variant };
        let (bg, hover_bg, text_color, border_color) = match variant {
            ButtonVariant::Primary => {
                (theme.primary, theme.primary_hover, theme.primary_foreground, theme.primary)
            }
            ButtonVariant::Danger => {
                (theme.danger, theme.danger_hover, theme.danger_foreground, theme.danger)
            }
            ButtonVariant::Secondary => {
                (theme.secondary, theme.secondary_hover, theme.foreground, theme.border)
            }
            ButtonVariant::Ghost => (
                colors::transparent(),
                theme.list_hover,
                theme.foreground,
                colors::transparent(),
            ),
        };

        let height = if self.compact { px(22.0) } else { sizing::button_height() };
        let padding_x = if self.compact { spacing::sm() } else { spacing::md() };
        let text_size = if self.compact { typography::text_xs() } else { typography::text_sm() };

        let mut el = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .h(height)
            .px(padding_x)
            .rounded(borders::radius_sm())
            .border_1()
            .border_color(border_color)
            .bg(bg)
            .text_size(text_size)
            .text_color(text_color);

        if self.disabled {
            el = el.opacity(0.5).cursor_not_allowed();
        } else {
            el = el.cursor_pointer().hover(|s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                el = el.on_click(handler);
            }
        }

        if let Some(label) = self.label {
            el = el.child(label);
        }
        el
    }
}
