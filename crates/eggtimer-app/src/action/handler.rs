use eggtimer_core::{Progress, ProgressIncrement, format_remaining};

use crate::{
    action::{Action, ActionRequestQueue, TimerAction, UiAction},
    state::{AppState, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

/// Applies every queued action in order.
///
/// Returns `true` if any of them changed what is on screen.
pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) -> bool {
    let mut changed = false;
    for action in action_queue.take_all() {
        changed |= handle(app_state, ui_state, action);
    }
    changed
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) -> bool {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    let changed = match action {
        Action::Timer(TimerAction::Tick(increment)) => ctx.tick(increment),
        Action::Timer(TimerAction::ToggleBoiling) => ctx.toggle_boiling(),
        Action::Timer(TimerAction::Reset) => ctx.reset(),
        Action::Ui(UiAction::EditDuration(text)) => {
            ctx.ui_state.duration_text = text;
            true
        }
    };

    ctx.sync_remaining_time();
    changed
}

impl ActionContext<'_> {
    fn tick(&mut self, increment: ProgressIncrement) -> bool {
        let timer = &mut self.app_state.timer;
        let was_running = timer.phase().is_running();
        let changed = timer.apply_tick(increment);
        if was_running && timer.phase().is_complete() {
            log::info!("egg is done");
        }
        changed
    }

    fn toggle_boiling(&mut self) -> bool {
        let timer = &mut self.app_state.timer;
        let before = timer.phase();
        match timer.toggle(&self.ui_state.duration_text) {
            Ok(()) => {
                log::debug!(
                    "timer {before:?} -> {:?} (target {:.1}s, progress {:.3})",
                    timer.phase(),
                    timer.target_duration_secs(),
                    timer.progress().get(),
                );
                true
            }
            Err(err) => {
                log::warn!("not starting the timer: {err}");
                false
            }
        }
    }

    fn reset(&mut self) -> bool {
        let timer = &mut self.app_state.timer;
        // the field holds the time left, so put the full duration back
        if timer.progress() > Progress::ZERO {
            self.ui_state.duration_text = format_remaining(timer.target_duration_secs());
        }
        log::debug!("timer reset");
        timer.reset();
        true
    }

    // While running, the duration field shows the time left and user edits
    // are overwritten.
    fn sync_remaining_time(&mut self) {
        if let Some(remaining) = self.app_state.timer.remaining_seconds() {
            self.ui_state.duration_text = format_remaining(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use eggtimer_core::{Progress, ProgressIncrement, TimerPhase};

    use super::{handle, handle_all};
    use crate::{
        action::{Action, ActionRequestQueue, TimerAction, UiAction},
        config::AppConfig,
        state::{AppState, UiState},
    };

    fn states(duration: &str) -> (AppState, UiState) {
        let app_state = AppState::new(AppConfig::default());
        let mut ui_state = UiState::new(&app_state.config);
        ui_state.duration_text = duration.to_owned();
        (app_state, ui_state)
    }

    fn tick(value: f32) -> Action {
        TimerAction::Tick(ProgressIncrement::new(value).unwrap()).into()
    }

    #[test]
    fn start_then_half_the_ticks_shows_half_the_time() {
        let (mut app_state, mut ui_state) = states("10");
        assert!(handle(
            &mut app_state,
            &mut ui_state,
            TimerAction::ToggleBoiling.into()
        ));
        assert_eq!(app_state.timer.phase(), TimerPhase::Running);
        assert_eq!(ui_state.duration_text, "10.0");

        for _ in 0..125 {
            handle(&mut app_state, &mut ui_state, tick(0.004));
        }
        assert_eq!(ui_state.duration_text, "5.0");
    }

    #[test]
    fn finished_timer_ignores_ticks() {
        let (mut app_state, mut ui_state) = states("2");
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        handle(&mut app_state, &mut ui_state, tick(1.0));
        assert_eq!(app_state.timer.phase(), TimerPhase::Complete);

        assert!(!handle(&mut app_state, &mut ui_state, tick(0.5)));
        assert_eq!(app_state.timer.progress(), Progress::COMPLETE);

        // "Finished" still stops the timer
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        assert_eq!(app_state.timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn malformed_duration_is_rejected_and_left_in_place() {
        let (mut app_state, mut ui_state) = states("abc");
        assert!(!handle(
            &mut app_state,
            &mut ui_state,
            TimerAction::ToggleBoiling.into()
        ));
        assert_eq!(app_state.timer.phase(), TimerPhase::Idle);
        assert_eq!(ui_state.duration_text, "abc");

        assert!(!handle(&mut app_state, &mut ui_state, tick(0.5)));
        assert_eq!(app_state.timer.progress(), Progress::ZERO);
    }

    #[test]
    fn stop_and_restart_carries_progress_over() {
        let (mut app_state, mut ui_state) = states("10");
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        handle(&mut app_state, &mut ui_state, tick(0.25));
        assert_eq!(ui_state.duration_text, "7.5");

        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        assert_eq!(app_state.timer.phase(), TimerPhase::Idle);
        assert_eq!(app_state.timer.progress().get(), 0.25);

        // restart with the text left in the field
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        assert_eq!(app_state.timer.phase(), TimerPhase::Running);
        assert_eq!(app_state.timer.progress().get(), 0.25);
        assert_eq!(app_state.timer.target_duration_secs(), 10.0);
        assert_eq!(app_state.timer.remaining_seconds(), Some(7.5));
    }

    #[test]
    fn reset_restores_the_full_duration() {
        let (mut app_state, mut ui_state) = states("10");
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        handle(&mut app_state, &mut ui_state, tick(0.5));
        handle(&mut app_state, &mut ui_state, TimerAction::Reset.into());

        assert_eq!(app_state.timer.phase(), TimerPhase::Idle);
        assert_eq!(app_state.timer.progress(), Progress::ZERO);
        assert_eq!(ui_state.duration_text, "10.0");

        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        assert_eq!(app_state.timer.target_duration_secs(), 10.0);
        assert_eq!(app_state.timer.remaining_seconds(), Some(10.0));
    }

    #[test]
    fn reset_after_stop_restores_the_full_duration() {
        let (mut app_state, mut ui_state) = states("8");
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        handle(&mut app_state, &mut ui_state, tick(0.25));
        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        assert_eq!(ui_state.duration_text, "6.0");

        handle(&mut app_state, &mut ui_state, TimerAction::Reset.into());
        assert_eq!(ui_state.duration_text, "8.0");
    }

    #[test]
    fn reset_without_progress_leaves_field_alone() {
        let (mut app_state, mut ui_state) = states("abc");
        handle(&mut app_state, &mut ui_state, TimerAction::Reset.into());
        assert_eq!(ui_state.duration_text, "abc");
    }

    #[test]
    fn edits_are_overwritten_while_running() {
        let (mut app_state, mut ui_state) = states("10");
        handle(&mut app_state, &mut ui_state, UiAction::EditDuration("4".to_owned()).into());
        assert_eq!(ui_state.duration_text, "4");

        handle(&mut app_state, &mut ui_state, TimerAction::ToggleBoiling.into());
        handle(&mut app_state, &mut ui_state, UiAction::EditDuration("99".to_owned()).into());
        assert_eq!(ui_state.duration_text, "4.0");
    }

    #[test]
    fn ticks_queued_before_a_start_click_are_discarded() {
        let (mut app_state, mut ui_state) = states("10");
        let mut queue = ActionRequestQueue::default();
        queue.request(tick(0.5));
        queue.request(TimerAction::ToggleBoiling.into());
        assert!(handle_all(&mut app_state, &mut ui_state, &mut queue));
        assert_eq!(app_state.timer.progress(), Progress::ZERO);

        queue.request(tick(0.5));
        queue.request(TimerAction::ToggleBoiling.into());
        handle_all(&mut app_state, &mut ui_state, &mut queue);
        assert_eq!(app_state.timer.progress().get(), 0.5);
        assert_eq!(app_state.timer.phase(), TimerPhase::Idle);
    }
}
