//! Rendering geometry for the spin wheel.
//!
//! Painting is the frontend's job; this module only computes the data that
//! drives it: SVG slice paths, label placement along each segment's
//! bisector, sizing tiers, and the color cycle.

use serde::Serialize;

use super::geometry::{self, FULL_TURN};

/// Fraction of the radius at which labels sit
const LABEL_RADIUS_RATIO: f64 = 0.55;

/// Fill palette cycled across segments by index
const SEGMENT_FILLS: [&str; 8] = [
    "#e63946", "#f4a261", "#e9c46a", "#2a9d8f", "#264653", "#8ecae6", "#9d4edd", "#ffb4a2",
];

/// Text colors paired entry-for-entry with [`SEGMENT_FILLS`] for contrast
const SEGMENT_TEXT_COLORS: [&str; 8] = [
    "#ffffff", "#1d3557", "#1d3557", "#ffffff", "#ffffff", "#1d3557", "#ffffff", "#1d3557",
];

/// Label sizing tier; tightens as the wheel fills up
fn label_tier(item_count: usize) -> (f64, usize) {
    if item_count <= 20 {
        (16.0, 18)
    } else if item_count <= 50 {
        (12.0, 12)
    } else {
        (9.0, 8)
    }
}

/// Complete paint-ready description of one wheel
#[derive(Debug, Clone, Serialize)]
pub struct WheelLayout {
    pub size: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub font_size: f64,
    pub slices: Vec<SliceLayout>,
}

/// One pie slice plus its label placement
#[derive(Debug, Clone, Serialize)]
pub struct SliceLayout {
    pub label: String,
    /// SVG path data for the slice
    pub path: String,
    pub fill: &'static str,
    pub text_color: &'static str,
    pub label_x: f64,
    pub label_y: f64,
    /// Rotation applied to the label so it reads along the slice
    pub label_rotation: f64,
}

/// Converts a wheel angle to screen coordinates
///
/// Wheel angle 0 is the top of the circle, so the angle is shifted by -90
/// before the standard screen-coordinate conversion.
fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let radians = (angle_deg - 90.0).to_radians();
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// SVG path for the slice spanning `[start, end)` degrees
fn slice_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    if end - start >= FULL_TURN {
        // A single-item wheel has no chord to anchor an arc on; draw the
        // full disc as two half-circle arcs instead.
        let top = cy - radius;
        let bottom = cy + radius;
        return format!(
            "M {:.3} {:.3} A {:.3} {:.3} 0 1 1 {:.3} {:.3} A {:.3} {:.3} 0 1 1 {:.3} {:.3} Z",
            cx, top, radius, radius, cx, bottom, radius, radius, cx, top
        );
    }

    let (start_x, start_y) = polar(cx, cy, radius, start);
    let (end_x, end_y) = polar(cx, cy, radius, end);
    let large_arc = if end - start > 180.0 { 1 } else { 0 };

    format!(
        "M {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} Z",
        cx, cy, start_x, start_y, radius, radius, large_arc, end_x, end_y
    )
}

/// Shortens a label to the tier's budget, marking the cut with an ellipsis
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut shortened: String = label.chars().take(max_chars).collect();
    shortened.push('…');
    shortened
}

/// Computes the full layout for `items` on a wheel of `size` pixels
pub fn wheel_layout(items: &[String], size: f64) -> WheelLayout {
    let radius = size / 2.0;
    let cx = size / 2.0;
    let cy = size / 2.0;
    let (font_size, max_chars) = label_tier(items.len());
    let seg = geometry::segment_angle(items.len().max(1));

    let slices = items
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let start = i as f64 * seg;
            let end = start + seg;
            let bisector = start + seg / 2.0;
            let (label_x, label_y) = polar(cx, cy, radius * LABEL_RADIUS_RATIO, bisector);

            SliceLayout {
                label: truncate_label(label, max_chars),
                path: slice_path(cx, cy, radius, start, end),
                fill: SEGMENT_FILLS[i % SEGMENT_FILLS.len()],
                text_color: SEGMENT_TEXT_COLORS[i % SEGMENT_TEXT_COLORS.len()],
                label_x,
                label_y,
                // Tangent to the circle: the label reads along the slice
                label_rotation: bisector + 90.0,
            }
        })
        .collect();

    WheelLayout {
        size,
        center_x: cx,
        center_y: cy,
        radius,
        font_size,
        slices,
    }
}
