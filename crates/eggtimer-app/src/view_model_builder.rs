use eggtimer_core::{Tint, TimerPhase, format_remaining};

use crate::{
    state::{AppState, UiState},
    ui::{
        controls::{ControlsViewModel, MainButton},
        duration_input::DurationInputViewModel,
        egg::EggViewModel,
        timer_screen::TimerScreenViewModel,
    },
};

#[must_use]
pub(crate) fn build_egg_vm(app_state: &AppState) -> EggViewModel {
    let outline = app_state.config.shape.outline().collect();
    let fill = Tint::for_progress(app_state.timer.progress());
    EggViewModel::new(outline, fill)
}

#[must_use]
pub(crate) fn build_duration_input_vm(
    app_state: &AppState,
    ui_state: &UiState,
) -> DurationInputViewModel {
    let text = app_state
        .timer
        .remaining_seconds()
        .map_or_else(|| ui_state.duration_text.clone(), format_remaining);
    DurationInputViewModel::new(text)
}

#[must_use]
pub(crate) fn build_controls_vm(app_state: &AppState) -> ControlsViewModel {
    let timer = &app_state.timer;
    let button = match timer.phase() {
        TimerPhase::Idle => MainButton::Start,
        TimerPhase::Running => MainButton::Stop,
        TimerPhase::Complete => MainButton::Finished,
    };
    let can_reset = timer.progress().get() > 0.0;
    ControlsViewModel::new(button, can_reset)
}

/// Builds everything the timer screen draws from the current state.
///
/// This is a pure function: the same state always yields the same view model.
#[must_use]
pub(crate) fn build_timer_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> TimerScreenViewModel {
    TimerScreenViewModel::new(
        build_egg_vm(app_state),
        build_duration_input_vm(app_state, ui_state),
        app_state.timer.progress().get(),
        build_controls_vm(app_state),
    )
}
