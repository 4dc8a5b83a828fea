//! Pointer/touch drawing state machine for a single trace canvas.
//!
//! One session exists at a time: pointer-down begins it (a new down silently
//! replaces any prior session), moves stroke short segments onto the surface,
//! and the global pointer-up ends it. A release with no movement at all is a
//! tap, which the caller answers with pronunciation instead of ink; the
//! threshold is binary, not distance-based.
//!
//! The drawing surface is behind a trait so the tap-vs-drag logic runs in
//! native tests against a recording stub instead of a real canvas context.

/// Canvas-local coordinates.
pub type Point = (f64, f64);

/// Where trace ink lands. The web glue implements this over a 2D canvas
/// context; tests implement it with a Vec of segments.
pub trait TraceSurface {
    fn stroke_segment(&mut self, from: Point, to: Point);
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Down and up with no movement in between.
    Tap,
    /// At least one move event was drawn.
    Stroke,
}

/// State for the one active pointer interaction.
#[derive(Clone, Copy, Debug)]
pub struct TraceSession {
    last: Point,
    moved: bool,
}

impl TraceSession {
    /// Begin a session at the initial contact point.
    pub fn begin(at: Point) -> TraceSession {
        TraceSession { last: at, moved: false }
    }

    /// Process a pointer move: draw a segment from the last recorded point to
    /// `to` and advance. Any move at all makes the release a stroke, not a tap.
    pub fn drag<S: TraceSurface>(&mut self, surface: &mut S, to: Point) {
        self.moved = true;
        surface.stroke_segment(self.last, to);
        self.last = to;
    }

    /// End the session on pointer-up.
    pub fn finish(self) -> TraceOutcome {
        if self.moved { TraceOutcome::Stroke } else { TraceOutcome::Tap }
    }
}

/// Trace stroke width for a canvas of the given edge length: proportional to
/// the canvas, never thinner than 4px.
pub fn stroke_width(edge: f64) -> f64 {
    (edge / 25.0).max(4.0)
}
