//! Canvas sizing for the trace strip.
//!
//! All canvases in a row share one computed square edge so the strip looks
//! uniform; when the ideal size falls outside the clamp range the container
//! simply scrolls or underfills.

/// Spacing between adjacent canvases, in CSS pixels.
pub const CANVAS_GAP: f64 = 10.0;
/// Smallest allowed canvas edge.
pub const MIN_EDGE: f64 = 190.0;
/// Largest allowed canvas edge.
pub const MAX_EDGE: f64 = 200.0;

/// Guide glyph font size as a fraction of the canvas edge.
pub const GUIDE_FONT_SCALE: f64 = 0.8;

/// Edge length for every canvas in a row of `glyph_count` characters laid out
/// in `container_width` pixels: ideal evenly-divided size, clamped into
/// [`MIN_EDGE`, `MAX_EDGE`].
pub fn canvas_edge(container_width: f64, glyph_count: usize) -> f64 {
    let n = glyph_count as f64;
    let ideal = (container_width - (n - 1.0) * CANVAS_GAP) / n;
    ideal.clamp(MIN_EDGE, MAX_EDGE)
}
