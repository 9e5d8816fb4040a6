pub(crate) mod controls;
pub(crate) mod duration_input;
pub(crate) mod egg;
pub(crate) mod input;
pub(crate) mod theme;
pub(crate) mod timer_screen;
