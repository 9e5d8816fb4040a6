use std::mem;

use eggtimer_core::ProgressIncrement;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Timer(TimerAction),
    Ui(UiAction),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TimerAction {
    /// One or more ticks arrived from the ticker.
    Tick(ProgressIncrement),
    /// Start when idle, stop otherwise. Bound to the main button.
    ToggleBoiling,
    /// Stop and forget all progress.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiAction {
    EditDuration(String),
}

/// Actions collected during one frame, applied in request order.
#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
