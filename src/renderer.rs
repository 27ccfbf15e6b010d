//! SVG document construction for swatch layouts
//!
//! Pure sink for the layout stage: consumes cells and canvas dimensions,
//! produces an [`svg::Document`] with two rounded background bands and one
//! identified group per swatch instance. No I/O happens here.

use crate::layout::{Layout, LayoutCell, LayoutOptions};
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

const LIGHT_FILL: &str = "white";
const DARK_FILL: &str = "black";
const FONT_FAMILY: &str = "Arial";

/// Build the SVG document for a computed layout.
///
/// Structure mirrors the band model: a `Backgrounds` group with the light
/// and dark band rects, then `LightModeSwatches` and `DarkModeSwatches`
/// groups holding one `<g>` per cell (color rect, label text, hex text).
/// Text is black on the light band and white on the dark band.
pub fn render(layout: &Layout, options: &LayoutOptions) -> Document {
    let canvas = &layout.canvas;

    let backgrounds = Group::new()
        .set("id", "Backgrounds")
        .add(band_rect(
            canvas.light_origin,
            canvas.width,
            canvas.band_height,
            LIGHT_FILL,
            "LightBackground",
            options,
        ))
        .add(band_rect(
            canvas.dark_origin,
            canvas.width,
            canvas.band_height,
            DARK_FILL,
            "DarkBackground",
            options,
        ));

    let mut light_swatches = Group::new().set("id", "LightModeSwatches");
    let mut dark_swatches = Group::new().set("id", "DarkModeSwatches");
    for cell in &layout.cells {
        light_swatches = light_swatches.add(swatch(cell, cell.y_light, "Light", "black", options));
        dark_swatches = dark_swatches.add(swatch(cell, cell.y_dark, "Dark", "white", options));
    }

    Document::new()
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("viewBox", (0u32, 0u32, canvas.width, canvas.height))
        .add(backgrounds)
        .add(light_swatches)
        .add(dark_swatches)
}

fn band_rect(
    y: u32,
    width: u32,
    height: u32,
    fill: &str,
    id: &str,
    options: &LayoutOptions,
) -> Rectangle {
    Rectangle::new()
        .set("id", id)
        .set("x", 0u32)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", fill)
        .set("rx", options.corner_radius)
        .set("ry", options.corner_radius)
}

/// One swatch: rounded color rect plus label and hex text.
fn swatch(
    cell: &LayoutCell,
    y: u32,
    band_suffix: &str,
    text_fill: &str,
    options: &LayoutOptions,
) -> Group {
    let rect = Rectangle::new()
        .set("x", cell.x)
        .set("y", y)
        .set("width", options.swatch_width)
        .set("height", options.swatch_height)
        .set("fill", cell.entry.color.as_str())
        .set("rx", options.corner_radius)
        .set("ry", options.corner_radius);

    let (label_x, label_y) = cell.label_anchor(y);
    let label = Text::new(cell.entry.label.as_str())
        .set("x", label_x)
        .set("y", label_y)
        .set("fill", text_fill)
        .set("font-size", format!("{}px", options.label_font_size))
        .set("font-family", FONT_FAMILY);

    let (hex_x, hex_y) = cell.hex_anchor(y, options);
    let hex = Text::new(cell.entry.color.as_str())
        .set("x", hex_x)
        .set("y", hex_y)
        .set("fill", text_fill)
        .set("font-size", format!("{}px", options.hex_font_size))
        .set("font-family", FONT_FAMILY);

    Group::new()
        .set("id", format!("{}_{}", cell.id, band_suffix))
        .add(rect)
        .add(label)
        .add(hex)
}
