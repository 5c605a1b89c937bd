// src/ui/color_bar.rs
use eframe::egui::{self, Align2, FontId, Rect, Sense, Stroke, pos2, vec2};
use crate::plot::Visual;

const BAR_HEIGHT: f32 = 16.0;
const TICK_LENGTH: f32 = 4.0;
const LABEL_HEIGHT: f32 = 14.0;

pub fn show_color_bar(ui: &mut egui::Ui, visual: &Visual) {
    let bar = &visual.color_bar;
    let scale = &visual.scale;

    let size = vec2(bar.width, BAR_HEIGHT + bar.label_standoff + LABEL_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let strip = Rect::from_min_size(rect.min, vec2(bar.width, BAR_HEIGHT));

    // One block per palette entry, low values on the left.
    let step = bar.width / scale.palette.len().max(1) as f32;
    for (i, color) in scale.palette.iter().enumerate() {
        let left = strip.left() + step * i as f32;
        let block = Rect::from_min_max(pos2(left, strip.top()), pos2(left + step, strip.bottom()));
        painter.rect_filled(block, 0.0, *color);
    }
    if let Some(border) = bar.border_color {
        painter.rect_stroke(strip, 0.0, Stroke::new(1.0, border));
    }

    let text_color = ui.visuals().text_color();
    let span = scale.high - scale.low;
    for tick in &bar.ticks {
        let x = strip.left() + ((tick.value - scale.low) / span) as f32 * bar.width;
        painter.line_segment(
            [pos2(x, strip.bottom()), pos2(x, strip.bottom() + TICK_LENGTH)],
            Stroke::new(1.0, text_color),
        );
        painter.text(
            pos2(x, strip.bottom() + bar.label_standoff),
            Align2::CENTER_TOP,
            &tick.label,
            FontId::proportional(12.0),
            text_color,
        );
    }
}
