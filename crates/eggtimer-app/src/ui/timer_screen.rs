use eframe::egui::{ProgressBar, Ui};
use egui_extras::{Size, StripBuilder};

use super::{controls, duration_input, egg};
use crate::{
    action::ActionRequestQueue,
    ui::{
        controls::ControlsViewModel, duration_input::DurationInputViewModel, egg::EggViewModel,
        theme::TimerPalette,
    },
};

const EGG_HEIGHT: f32 = 375.0;
const INPUT_HEIGHT: f32 = 28.0;
const INPUT_WIDTH: f32 = 60.0;
const INPUT_BOTTOM_GAP: f32 = 40.0;
const PROGRESS_HEIGHT: f32 = 12.0;
const CONTROLS_MARGIN: f32 = 25.0;
const CONTROLS_SIDE_MARGIN: f32 = 35.0;
const CONTROLS_HEIGHT: f32 = 72.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TimerScreenViewModel {
    pub(crate) egg: EggViewModel,
    pub(crate) duration: DurationInputViewModel,
    pub(crate) progress: f32,
    pub(crate) controls: ControlsViewModel,
}

impl TimerScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        egg: EggViewModel,
        duration: DurationInputViewModel,
        progress: f32,
        controls: ControlsViewModel,
    ) -> Self {
        Self {
            egg,
            duration,
            progress,
            controls,
        }
    }
}

/// Draws, top to bottom: the egg, the duration field, the progress bar and
/// the buttons. Free space is left above the egg.
pub(crate) fn show(ui: &mut Ui, vm: &TimerScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let palette = TimerPalette::from_visuals(ui.visuals());

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(EGG_HEIGHT))
        .size(Size::exact(INPUT_HEIGHT))
        .size(Size::exact(INPUT_BOTTOM_GAP))
        .size(Size::exact(PROGRESS_HEIGHT))
        .size(Size::exact(CONTROLS_MARGIN))
        .size(Size::exact(CONTROLS_HEIGHT))
        .size(Size::exact(CONTROLS_MARGIN))
        .vertical(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                egg::show(ui, &vm.egg, &palette);
            });
            strip.strip(|builder| {
                builder
                    .size(Size::remainder())
                    .size(Size::exact(INPUT_WIDTH))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            duration_input::show(ui, &vm.duration, &palette, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
            strip.cell(|ui| {
                ui.add(ProgressBar::new(vm.progress));
            });
            strip.empty();
            strip.strip(|builder| {
                builder
                    .size(Size::exact(CONTROLS_SIDE_MARGIN))
                    .size(Size::remainder())
                    .size(Size::exact(CONTROLS_SIDE_MARGIN))
                    .horizontal(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            controls::show(ui, &vm.controls, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
