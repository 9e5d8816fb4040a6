use eframe::egui::{Align, Button, Layout, Ui, Vec2};

use crate::action::{ActionRequestQueue, TimerAction};

const MAIN_BUTTON_HEIGHT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum MainButton {
    #[display("Start")]
    Start,
    #[display("Stop")]
    Stop,
    #[display("Finished")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ControlsViewModel {
    pub(crate) button: MainButton,
    pub(crate) can_reset: bool,
}

impl ControlsViewModel {
    #[must_use]
    pub(crate) fn new(button: MainButton, can_reset: bool) -> Self {
        Self { button, can_reset }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ControlsViewModel, action_queue: &mut ActionRequestQueue) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        let size = Vec2::new(ui.available_width(), MAIN_BUTTON_HEIGHT);
        // clicked() is edge-triggered: at most once per frame
        if ui
            .add_sized(size, Button::new(vm.button.to_string()))
            .clicked()
        {
            action_queue.request(TimerAction::ToggleBoiling.into());
        }
        if ui.add_enabled(vm.can_reset, Button::new("Reset")).clicked() {
            action_queue.request(TimerAction::Reset.into());
        }
    });
}
