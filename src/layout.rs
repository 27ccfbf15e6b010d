//! Swatch grid layout
//!
//! Turns an ordered palette into absolute positions for every swatch, once
//! for the light band and once for the dark band, plus the overall canvas
//! dimensions. All geometry is integer arithmetic over [`LayoutOptions`],
//! so identical input always produces an identical [`Layout`].
//!
//! The grid wraps each group independently at `per_row` swatches, but all
//! rows share one left-aligned content width driven by the single widest
//! row across every group.

use crate::ident::sanitize_id;
use crate::models::{ColorEntry, Palette};

/// Horizontal inset of both text lines from the swatch's left edge.
pub const TEXT_INSET: u32 = 10;
/// Label baseline distance above the swatch's top edge.
pub const LABEL_RAISE: u32 = 5;
/// Hex-code baseline distance below the swatch's bottom edge.
pub const HEX_DROP: u32 = 15;

/// Geometry constants for the swatch grid, in SVG user units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub swatch_width: u32,
    pub swatch_height: u32,
    pub horizontal_padding: u32,
    pub vertical_padding: u32,
    /// Outer margin around the content inside each band, and the gap
    /// between the two bands.
    pub margin: u32,
    /// Vertical spacing between consecutive groups.
    pub group_spacing: u32,
    /// Maximum swatches per row before a group wraps.
    pub per_row: usize,
    /// Height reserved above (label) and below (hex code) each swatch row.
    pub text_band_height: u32,
    pub corner_radius: u32,
    pub label_font_size: u32,
    pub hex_font_size: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            swatch_width: 120,
            swatch_height: 120,
            horizontal_padding: 20,
            vertical_padding: 20,
            margin: 40,
            group_spacing: 40,
            per_row: 7,
            text_band_height: 20,
            corner_radius: 10,
            label_font_size: 16,
            hex_font_size: 14,
        }
    }
}

impl LayoutOptions {
    /// Height of one swatch row including its two text bands.
    pub fn row_height(&self) -> u32 {
        self.swatch_height + 2 * self.text_band_height
    }
}

/// Computed canvas dimensions for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Total document width.
    pub width: u32,
    /// Total document height (both bands plus the gap).
    pub height: u32,
    /// Width of the swatch grid without margins.
    pub content_width: u32,
    /// Height of the swatch grid without margins.
    pub content_height: u32,
    /// Height of one band (content plus margins).
    pub band_height: u32,
    /// Top edge of the light band.
    pub light_origin: u32,
    /// Top edge of the dark band.
    pub dark_origin: u32,
}

/// One positioned swatch instance.
///
/// `y_light` and `y_dark` are the swatch's top edge in the light and dark
/// band respectively; the x coordinate is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell<'a> {
    pub entry: &'a ColorEntry,
    /// Document-unique identifier: sanitized label plus coordinates.
    pub id: String,
    pub x: u32,
    pub y_light: u32,
    pub y_dark: u32,
}

impl LayoutCell<'_> {
    /// Baseline anchor of the label text for a swatch drawn at `y`.
    pub fn label_anchor(&self, y: u32) -> (u32, u32) {
        (self.x + TEXT_INSET, y.saturating_sub(LABEL_RAISE))
    }

    /// Baseline anchor of the hex-code text for a swatch drawn at `y`.
    pub fn hex_anchor(&self, y: u32, options: &LayoutOptions) -> (u32, u32) {
        (self.x + TEXT_INSET, y + options.swatch_height + HEX_DROP)
    }
}

/// A complete computed layout: every cell plus the canvas it fits in.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<'a> {
    pub cells: Vec<LayoutCell<'a>>,
    pub canvas: CanvasSpec,
}

/// Compute positions for every swatch and the enclosing canvas.
///
/// Deterministic: the same palette and options always yield the same
/// result. An empty palette yields a margins-only canvas with zero cells;
/// dimensions never go negative.
///
/// # Examples
///
/// ```
/// use swatchgrid::layout::{layout, LayoutOptions};
/// use swatchgrid::parser::parse_str;
///
/// let palette = parse_str("Primary 1: #FF5733\nSecondary 1: #33FF57\nPrimary 2: #F2F2F2\n").palette;
/// let result = layout(&palette, &LayoutOptions::default());
///
/// assert_eq!(result.cells.len(), 3);
/// assert_eq!(result.canvas.content_width, 260);
/// ```
pub fn layout<'a>(palette: &'a Palette, options: &LayoutOptions) -> Layout<'a> {
    let per_row = options.per_row.max(1);
    let canvas = compute_canvas(palette, per_row, options);

    let mut cells = Vec::with_capacity(palette.len());
    // Top edge of the first swatch row: outer margin plus the label band.
    let mut y = options.margin + options.text_band_height;

    for (group_index, (_, entries)) in palette.groups().enumerate() {
        if group_index > 0 {
            // The previous group already advanced by a full row pitch;
            // widen the seam from row padding to group spacing.
            y += options.group_spacing.saturating_sub(options.vertical_padding);
        }
        for (index, entry) in entries.iter().enumerate() {
            let col = index % per_row;
            if index > 0 && col == 0 {
                y += options.row_height() + options.vertical_padding;
            }
            let x = options.margin + col as u32 * (options.swatch_width + options.horizontal_padding);
            let y_dark = y + canvas.band_height + options.margin;
            cells.push(LayoutCell {
                entry,
                id: format!("{}_{}_{}", sanitize_id(&entry.label), x, y),
                x,
                y_light: y,
                y_dark,
            });
        }
        // Step past the group's last row.
        y += options.row_height() + options.vertical_padding;
    }

    Layout { cells, canvas }
}

fn compute_canvas(palette: &Palette, per_row: usize, options: &LayoutOptions) -> CanvasSpec {
    // The single widest row across all groups drives the shared width;
    // every other row is left-aligned to it.
    let max_row_swatches = palette
        .groups()
        .map(|(_, entries)| entries.len().min(per_row))
        .max()
        .unwrap_or(0) as u32;

    let content_width = if max_row_swatches == 0 {
        0
    } else {
        max_row_swatches * options.swatch_width
            + (max_row_swatches - 1) * options.horizontal_padding
    };

    let group_count = palette.group_count() as u32;
    let mut total_rows = 0u32;
    let mut inner_pads = 0u32;
    for (_, entries) in palette.groups() {
        let rows = entries.len().div_ceil(per_row) as u32;
        total_rows += rows;
        inner_pads += rows.saturating_sub(1);
    }

    let content_height = if group_count == 0 {
        0
    } else {
        total_rows * options.row_height()
            + inner_pads * options.vertical_padding
            + (group_count - 1) * options.group_spacing
    };

    let width = content_width + 2 * options.margin;
    let band_height = content_height + 2 * options.margin;
    // Two bands stacked with a margin-sized gap between them.
    let height = 2 * band_height + options.margin;

    CanvasSpec {
        width,
        height,
        content_width,
        content_height,
        band_height,
        light_origin: 0,
        dark_origin: band_height + options.margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorEntry, Palette};

    fn entry(label: &str, group: &str, color: &str) -> ColorEntry {
        ColorEntry::new(label, group, color).unwrap()
    }

    fn palette(entries: &[(&str, &str, &str)]) -> Palette {
        Palette::from_entries(entries.iter().map(|(l, g, c)| entry(l, g, c)))
    }

    fn worked_example() -> Palette {
        palette(&[
            ("Primary 1", "Primary", "#FF5733"),
            ("Secondary 1", "Secondary", "#33FF57"),
            ("Primary 2", "Primary", "#F2F2F2"),
        ])
    }

    // ========== Canvas dimension tests ==========

    #[test]
    fn test_worked_example_dimensions() {
        let palette = worked_example();
        let result = layout(&palette, &LayoutOptions::default());

        // max_row_swatches = 2 -> content_width = 2*120 + 1*20
        assert_eq!(result.canvas.content_width, 260);
        assert_eq!(result.canvas.width, 260 + 2 * 40);
        // two groups, one row each: 2*160 + 0 inner pads + 1*40 spacing
        assert_eq!(result.canvas.content_height, 360);
        assert_eq!(result.canvas.band_height, 360 + 2 * 40);
        assert_eq!(result.canvas.height, 2 * 440 + 40);
        assert_eq!(result.canvas.light_origin, 0);
        assert_eq!(result.canvas.dark_origin, 440 + 40);
    }

    #[test]
    fn test_content_width_depends_only_on_max_row_swatches() {
        // One group of two swatches...
        let single = palette(&[
            ("Primary 1", "Primary", "#111111"),
            ("Primary 2", "Primary", "#222222"),
        ]);
        // ...versus three groups whose widest row is still two swatches.
        let many = palette(&[
            ("Primary 1", "Primary", "#111111"),
            ("Primary 2", "Primary", "#222222"),
            ("Secondary 1", "Secondary", "#333333"),
            ("Tertiary 1", "Tertiary", "#444444"),
            ("Tertiary 2", "Tertiary", "#555555"),
        ]);

        let opts = LayoutOptions::default();
        assert_eq!(
            layout(&single, &opts).canvas.content_width,
            layout(&many, &opts).canvas.content_width
        );
    }

    #[test]
    fn test_row_wrapping_increases_rows_not_width() {
        let entries: Vec<(String, &str, String)> = (1..=10)
            .map(|i| (format!("Primary {i}"), "Primary", format!("#{i:06X}")))
            .collect();
        let refs: Vec<(&str, &str, &str)> = entries
            .iter()
            .map(|(l, g, c)| (l.as_str(), *g, c.as_str()))
            .collect();
        let p = palette(&refs);

        let opts = LayoutOptions::default();
        let result = layout(&p, &opts);

        // 10 swatches at 7 per row: widest row has 7 swatches.
        assert_eq!(result.canvas.content_width, 7 * 120 + 6 * 20);
        // two rows: 2*160 + 1*20 inner padding, single group
        assert_eq!(result.canvas.content_height, 2 * 160 + 20);
    }

    #[test]
    fn test_empty_palette_minimal_canvas() {
        let palette = Palette::new();
        let result = layout(&palette, &LayoutOptions::default());

        assert!(result.cells.is_empty());
        assert_eq!(result.canvas.content_width, 0);
        assert_eq!(result.canvas.content_height, 0);
        assert_eq!(result.canvas.width, 80);
        assert_eq!(result.canvas.band_height, 80);
        assert_eq!(result.canvas.height, 200);
    }

    // ========== Cell position tests ==========

    #[test]
    fn test_worked_example_cell_positions() {
        let p = worked_example();
        let result = layout(&p, &LayoutOptions::default());
        assert_eq!(result.cells.len(), 3);

        // Primary row: two cells side by side.
        assert_eq!(result.cells[0].entry.label, "Primary 1");
        assert_eq!((result.cells[0].x, result.cells[0].y_light), (40, 60));
        assert_eq!(result.cells[1].entry.label, "Primary 2");
        assert_eq!((result.cells[1].x, result.cells[1].y_light), (180, 60));

        // Secondary starts a new group: previous row pitch (180) plus the
        // group-spacing widening (20).
        assert_eq!(result.cells[2].entry.label, "Secondary 1");
        assert_eq!((result.cells[2].x, result.cells[2].y_light), (40, 260));
    }

    #[test]
    fn test_dark_band_is_translated_copy() {
        let palette = worked_example();
        let result = layout(&palette, &LayoutOptions::default());
        let offset = result.canvas.band_height + 40;
        for cell in &result.cells {
            assert_eq!(cell.y_dark, cell.y_light + offset);
        }
    }

    #[test]
    fn test_x_resets_each_row() {
        let entries: Vec<(String, &str, String)> = (1..=9)
            .map(|i| (format!("Primary {i}"), "Primary", format!("#{i:06X}")))
            .collect();
        let refs: Vec<(&str, &str, &str)> = entries
            .iter()
            .map(|(l, g, c)| (l.as_str(), *g, c.as_str()))
            .collect();
        let p = palette(&refs);

        let result = layout(&p, &LayoutOptions::default());
        // Eighth swatch wraps to a fresh row at the left margin.
        assert_eq!(result.cells[7].x, 40);
        assert_eq!(result.cells[7].y_light, 60 + 180);
        // Seventh swatch ends the first row.
        assert_eq!(result.cells[6].x, 40 + 6 * 140);
    }

    #[test]
    fn test_per_row_option_controls_wrapping() {
        let p = palette(&[
            ("Primary 1", "Primary", "#111111"),
            ("Primary 2", "Primary", "#222222"),
            ("Primary 3", "Primary", "#333333"),
        ]);
        let opts = LayoutOptions {
            per_row: 2,
            ..LayoutOptions::default()
        };
        let result = layout(&p, &opts);

        assert_eq!(result.cells[0].y_light, result.cells[1].y_light);
        assert!(result.cells[2].y_light > result.cells[1].y_light);
        assert_eq!(result.canvas.content_width, 2 * 120 + 20);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let p = worked_example();
        let opts = LayoutOptions::default();
        assert_eq!(layout(&p, &opts), layout(&p, &opts));
    }

    // ========== Identifier tests ==========

    #[test]
    fn test_duplicate_labels_get_distinct_ids() {
        let p = palette(&[
            ("Accent", "Warm", "#FF0000"),
            ("Accent", "Cool", "#0000FF"),
        ]);
        let result = layout(&p, &LayoutOptions::default());

        assert_eq!(result.cells.len(), 2);
        assert_ne!(result.cells[0].id, result.cells[1].id);
        assert!(result.cells[0].id.starts_with("Accent_"));
    }

    #[test]
    fn test_cell_id_combines_slug_and_coordinates() {
        let palette = worked_example();
        let result = layout(&palette, &LayoutOptions::default());
        assert_eq!(result.cells[0].id, "Primary_1_40_60");
    }

    // ========== Text anchor tests ==========

    #[test]
    fn test_text_anchors() {
        let palette = worked_example();
        let result = layout(&palette, &LayoutOptions::default());
        let opts = LayoutOptions::default();
        let cell = &result.cells[0];

        assert_eq!(cell.label_anchor(cell.y_light), (50, 55));
        assert_eq!(cell.hex_anchor(cell.y_light, &opts), (50, 60 + 120 + 15));
    }
}
