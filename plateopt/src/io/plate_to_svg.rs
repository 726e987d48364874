use plate_rs::entities::{Instance, Plate};
use plate_rs::util::PlateConfig;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

const PART_FILL: &str = "#8FBC8F";
const PLATE_FILL: &str = "#D3D3D3";

/// Draws a single plate and all parts on it. The clearance zones around the parts are
/// not drawn.
pub fn plate_to_svg(
    plate: &Plate,
    instance: &Instance,
    config: &PlateConfig,
    title: &str,
) -> Document {
    let size = config.plate_size as f32;
    let margin = size * 0.05;
    let stroke_width = size * 0.002;
    let font_size = size * 0.02;

    let label = {
        let bucket = plate
            .bucket()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "empty".to_string());
        let area_pct = 100.0 * plate.placed_area() as f32 / config.plate_area() as f32;
        Text::new(format!(
            "{title} | parts: {} | {bucket} | area: {area_pct:.2}%",
            plate.len()
        ))
        .set("x", 0.0)
        .set("y", -0.5 * margin)
        .set("font-size", font_size)
        .set("font-family", "monospace")
    };

    let plate_rect = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", config.plate_size)
        .set("height", config.plate_size)
        .set("fill", PLATE_FILL)
        .set("stroke", "black")
        .set("stroke-width", 2.0 * stroke_width);

    let parts_group = plate.parts.iter().fold(
        Group::new().set("id", "parts"),
        |group, part| {
            let item = instance.item(part.item_id);
            let fp = &part.footprint;
            let rect = Rectangle::new()
                .set("x", fp.x_min)
                .set("y", fp.y_min)
                .set("width", fp.width())
                .set("height", fp.height())
                .set("fill", PART_FILL)
                .set("stroke", "black")
                .set("stroke-width", stroke_width)
                .add(Title::new(format!(
                    "{} ({}x{}x{}) @ ({}, {})",
                    item.name, item.width, item.height, item.depth, fp.x_min, fp.y_min
                )));
            group.add(rect)
        },
    );

    Document::new()
        .set(
            "viewBox",
            (-margin, -margin, size + 2.0 * margin, size + 2.0 * margin),
        )
        .add(label)
        .add(plate_rect)
        .add(parts_group)
}
