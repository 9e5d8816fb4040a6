use eframe::egui::{Color32, Visuals};

use eggtimer_core::Tint;

/// Colours used by the timer screen outside of the egg itself.
#[derive(Debug, Clone)]
pub(crate) struct TimerPalette {
    pub(crate) input_border: Color32,
    pub(crate) egg_outline: Color32,
}

impl TimerPalette {
    const LIGHT_INPUT_BORDER: Color32 = Color32::from_rgb(204, 204, 204);

    #[must_use]
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        if visuals.dark_mode {
            Self {
                input_border: visuals.widgets.inactive.bg_stroke.color,
                egg_outline: visuals.widgets.noninteractive.fg_stroke.color,
            }
        } else {
            Self {
                input_border: Self::LIGHT_INPUT_BORDER,
                egg_outline: Color32::TRANSPARENT,
            }
        }
    }
}

#[must_use]
pub(crate) fn tint_color(tint: Tint) -> Color32 {
    let Tint { r, g, b, a } = tint;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
