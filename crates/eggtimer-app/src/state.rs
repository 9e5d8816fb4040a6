use eggtimer_core::EggTimer;

use crate::config::AppConfig;

// AppState holds the timer and the configuration it runs with. Nothing here
// outlives the process.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) timer: EggTimer,
    pub(crate) config: AppConfig,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(config: AppConfig) -> Self {
        Self {
            timer: EggTimer::new(),
            config,
        }
    }
}

// UiState holds widget contents that are not part of the timer itself.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) duration_text: String,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            duration_text: config.initial_duration.clone(),
        }
    }
}
