// Design tokens for the wizard.
// Base colors come from gpui-component's active theme: `cx.theme().background`,
// `cx.theme().primary`, etc. This file only holds what has no direct equivalent there.

// =============================================================================
// Custom Colors (theme-aware)
// =============================================================================

pub mod colors {
    use gpui::{App, Hsla};
    use gpui_component::ActiveTheme as _;

    // Success banner background
    pub fn bg_success(cx: &App) -> Hsla {
        let mut c = cx.theme().success;
        c.a = 0.12;
        c
    }

    // Error banner background
    pub fn bg_error(cx: &App) -> Hsla {
        let mut c = cx.theme().danger;
        c.a = 0.1;
        c
    }

    pub fn border_error(cx: &App) -> Hsla {
        let mut c = cx.theme().danger;
        c.a = 0.3;
        c
    }

    // Selected column row
    pub fn bg_selected(cx: &App) -> Hsla {
        let mut c = cx.theme().primary;
        c.a = 0.15;
        c
    }

    pub fn transparent() -> Hsla {
        gpui::hsla(0.0, 0.0, 0.0, 0.0)
    }
}

// =============================================================================
// Spacing
// =============================================================================

pub mod spacing {
    use gpui::{Pixels, px};

    pub fn xs() -> Pixels {
        px(4.0)
    }
    pub fn sm() -> Pixels {
        px(8.0)
    }
    pub fn md() -> Pixels {
        px(12.0)
    }
    pub fn lg() -> Pixels {
        px(16.0)
    }
}

// =============================================================================
// Sizing
// =============================================================================

pub mod sizing {
    use gpui::{Pixels, px};

    pub fn button_height() -> Pixels {
        px(28.0)
    }

    pub fn wizard_max_width() -> Pixels {
        px(960.0)
    }

    // Scrollable column checklist
    pub fn column_list_height() -> Pixels {
        px(200.0)
    }

    pub fn preview_cell_width() -> Pixels {
        px(140.0)
    }
}

// =============================================================================
// Typography
// =============================================================================

pub mod typography {
    use gpui::{Pixels, px};

    pub fn text_xs() -> Pixels {
        px(10.0)
    }
    pub fn text_sm() -> Pixels {
        px(12.0)
    } // Standard UI text
    pub fn text_title() -> Pixels {
        px(18.0)
    }
}

// =============================================================================
// Borders
// =============================================================================

pub mod borders {
    use gpui::{Pixels, px};

    pub fn radius_sm() -> Pixels {
        px(3.0)
    }
    pub fn radius_md() -> Pixels {
        px(6.0)
    }
}
