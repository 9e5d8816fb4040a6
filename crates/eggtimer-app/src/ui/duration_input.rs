use eframe::egui::{Align, Frame, Margin, Stroke, TextEdit, Ui};

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::theme::TimerPalette,
};

const BORDER_WIDTH: f32 = 2.0;
const CORNER_RADIUS: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DurationInputViewModel {
    pub(crate) text: String,
}

impl DurationInputViewModel {
    #[must_use]
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &DurationInputViewModel,
    palette: &TimerPalette,
    action_queue: &mut ActionRequestQueue,
) {
    let mut text = vm.text.clone();
    let response = Frame::new()
        .stroke(Stroke::new(BORDER_WIDTH, palette.input_border))
        .corner_radius(CORNER_RADIUS)
        .inner_margin(Margin::symmetric(4, 2))
        .show(ui, |ui| {
            ui.add(
                TextEdit::singleline(&mut text)
                    .hint_text("sec")
                    .horizontal_align(Align::Center)
                    .frame(false)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;
    if response.changed() {
        action_queue.request(UiAction::EditDuration(text).into());
    }
}
