// src/ui/map.rs
use eframe::egui::{self, Pos2, Shape, Stroke};
use eframe::egui::epaint::Mesh;
use egui_plot::{Plot, PlotPoint, PlotTransform};

use crate::geo::GeoPatch;
use crate::plot::builder::{PatchLayer, PLOT_HEIGHT, PLOT_WIDTH};
use crate::state::Session;

// Whole-world frame when the source has no outlines.
const WORLD: [[f64; 2]; 2] = [[-180.0, -90.0], [180.0, 90.0]];

pub fn show_map(ui: &mut egui::Ui, session: &Session) {
    let source = session.source();
    let visual = &session.display().visual;
    let [[min_x, min_y], [max_x, max_y]] = source.bounds().unwrap_or(WORLD);

    let plot = Plot::new("choropleth")
        .width(PLOT_WIDTH)
        .height(PLOT_HEIGHT)
        .data_aspect(1.0)
        .show_axes([false, false])
        .x_grid_spacer(|_| Vec::new())
        .y_grid_spacer(|_| Vec::new())
        .show_x(false)
        .show_y(false)
        .include_x(min_x)
        .include_x(max_x)
        .include_y(min_y)
        .include_y(max_y);

    let response = plot.show(ui, |plot_ui| {
        plot_ui.pointer_coordinate()
            .and_then(|p| source.hit_test([p.x, p.y]))
    });

    let painter = ui.painter_at(response.response.rect);
    for (patch, fill) in source.patches().iter().zip(&visual.layer.fills) {
        for shape in patch_shapes(patch, *fill, &visual.layer, &response.transform) {
            painter.add(shape);
        }
    }

    if let Some(index) = response.inner {
        let patch = &source.patches()[index];
        response.response.on_hover_ui_at_pointer(|ui| {
            egui::Grid::new("map_tooltip")
                .num_columns(2)
                .spacing([8.0, 2.0])
                .show(ui, |ui| {
                    for (label, value) in visual.tooltip.lines(patch) {
                        ui.strong(format!("{}:", label));
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
    }
}

/// Filled meshes plus every ring's outline for one country, in screen space.
fn patch_shapes(patch: &GeoPatch, fill: egui::Color32, layer: &PatchLayer, transform: &PlotTransform) -> Vec<Shape> {
    let fill = fill.gamma_multiply(layer.fill_alpha);
    let outline = Stroke::new(layer.line_width, layer.line_color);
    let to_screen = |x: f64, y: f64| transform.position_from_point(&PlotPoint::new(x, y));

    let fills = patch.meshes.iter().map(|fill_mesh| {
        let mut mesh = Mesh::default();
        for &[x, y] in &fill_mesh.points {
            mesh.colored_vertex(to_screen(x, y), fill);
        }
        for &[a, b, c] in &fill_mesh.triangles {
            mesh.add_triangle(a, b, c);
        }
        Shape::mesh(mesh)
    });

    let outlines = patch.shape.0.iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
        .map(|ring| {
            let screen: Vec<Pos2> = ring.coords().map(|c| to_screen(c.x, c.y)).collect();
            Shape::closed_line(screen, outline)
        });

    fills.chain(outlines).collect()
}
