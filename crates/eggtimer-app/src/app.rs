//! Egg timer desktop application UI.
//!
//! # Design Notes
//! - All timer mutation happens in [`EggTimerApp::update`] through the action
//!   handler; the ticker thread only writes to its channel.
//! - Each frame queues pending ticks first, then keyboard shortcuts, then the
//!   widget actions produced while drawing. Ticks that arrived before a click
//!   are therefore applied against the state before the click.
//! - While the timer runs, a repaint is scheduled one tick period ahead so
//!   the loop wakes up to consume the next ticks. When idle, egui sleeps
//!   until the next input event.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    config::AppConfig,
    state::{AppState, UiState},
    ticker::Ticker,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct EggTimerApp {
    app_state: AppState,
    ui_state: UiState,
    ticker: Option<Ticker>,
}

impl EggTimerApp {
    pub fn new(_cc: &CreationContext<'_>, config: AppConfig) -> Self {
        let ticker = match Ticker::spawn(config.ticker) {
            Ok(ticker) => Some(ticker),
            Err(err) => {
                log::error!("{err}; the timer will not advance");
                None
            }
        };
        let app_state = AppState::new(config);
        let ui_state = UiState::new(&app_state.config);
        Self {
            app_state,
            ui_state,
            ticker,
        }
    }

    fn schedule_repaint(&self, ctx: &Context, changed: bool) {
        if changed {
            ctx.request_repaint();
        }
        if self.app_state.timer.phase().is_running() {
            ctx.request_repaint_after(self.app_state.config.ticker.interval);
        }
    }
}

impl App for EggTimerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if let Some(ticker) = &mut self.ticker {
            ticker.poll(&mut action_queue);
        }
        ctx.input_mut(|i| ui::input::handle_input(i, &mut action_queue));
        let mut changed =
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let timer_screen_vm =
            view_model_builder::build_timer_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::timer_screen::show(ui, &timer_screen_vm, &mut action_queue);
        });

        changed |=
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.schedule_repaint(ctx, changed);
    }
}
