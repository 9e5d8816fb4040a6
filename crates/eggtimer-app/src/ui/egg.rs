use eframe::egui::{Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use eggtimer_core::{CurvePoint, Tint};

use crate::ui::theme::{TimerPalette, tint_color};

const OUTLINE_WIDTH: f32 = 1.5;
const CLOSING_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EggViewModel {
    pub(crate) outline: Vec<CurvePoint>,
    pub(crate) fill: Tint,
}

impl EggViewModel {
    #[must_use]
    pub(crate) fn new(outline: Vec<CurvePoint>, fill: Tint) -> Self {
        Self { outline, fill }
    }
}

/// Maps outline coordinates into `rect`, centred and scaled down if the rect
/// is too small for the egg.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EggPlacement {
    origin: Pos2,
    scale: f32,
}

impl EggPlacement {
    fn fit(rect: Rect, outline: &[CurvePoint]) -> Option<Self> {
        let (first, rest) = outline.split_first()?;
        let start = Rect::from_min_max(Pos2::new(first.x, first.y), Pos2::new(first.x, first.y));
        let bounds = rest
            .iter()
            .fold(start, |bounds, p| bounds.union(Rect::from_pos(Pos2::new(p.x, p.y))));
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return None;
        }
        let scale = (rect.width() / bounds.width())
            .min(rect.height() / bounds.height())
            .min(1.0);
        let origin = rect.center() - bounds.center().to_vec2() * scale;
        Some(Self { origin, scale })
    }

    fn place(self, point: CurvePoint) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y) * self.scale
    }
}

/// Places the outline on screen, leaving out a final point that repeats the
/// first. The painted polygon closes itself.
fn polygon_points(placement: EggPlacement, outline: &[CurvePoint]) -> Vec<Pos2> {
    let mut points: Vec<Pos2> = outline.iter().map(|&point| placement.place(point)).collect();
    let closed = matches!(
        points.as_slice(),
        [first, _, .., last] if first.distance(*last) < CLOSING_TOLERANCE
    );
    if closed {
        points.pop();
    }
    points
}

pub(crate) fn show(ui: &mut Ui, vm: &EggViewModel, palette: &TimerPalette) {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let Some(placement) = EggPlacement::fit(rect, &vm.outline) else {
        return;
    };
    ui.painter().add(Shape::convex_polygon(
        polygon_points(placement, &vm.outline),
        tint_color(vm.fill),
        Stroke::new(OUTLINE_WIDTH, palette.egg_outline),
    ));
}
