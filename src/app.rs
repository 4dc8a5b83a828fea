//! Web glue: DOM wiring, canvas strip rendering, pointer/touch listeners, and
//! the `speechSynthesis`-backed narrator.
//!
//! The host page supplies the container, the five control buttons and the row
//! info line by id; everything else (canvases, guide glyphs, listeners) is
//! built here on every render. Pointer-up and pointer-move are window-level so
//! a stroke keeps tracking even when the pointer leaves the canvas it started
//! on.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent,
    SpeechSynthesisUtterance, TouchEvent, window,
};

use crate::drill::{self, DrillAction, DrillState};
use crate::layout;
use crate::speech::{self, SPEECH_LANG, SPEECH_RATE, SpeechBackend, UNAVAILABLE_MESSAGE};
use crate::trace::{self, Point, TraceOutcome, TraceSession, TraceSurface};

// --- Host page contract ------------------------------------------------------

const CANVAS_CONTAINER_ID: &str = "canvas-container";
const DRILL_CONTAINER_ID: &str = "drill-container";
const SWITCH_BTN_ID: &str = "switch-btn";
const PREV_BTN_ID: &str = "prev-btn";
const NEXT_BTN_ID: &str = "next-btn";
const CLEAR_BTN_ID: &str = "clear-btn";
const SPEAK_BTN_ID: &str = "speak-btn";
const CHAR_INFO_ID: &str = "char-info";

// Theme custom properties, with fixed fallbacks when the theme does not
// resolve them.
const GUIDE_COLOR_PROP: &str = "--guide-char-color";
const GUIDE_COLOR_FALLBACK: &str = "#e0e0e0";
const DRAW_COLOR_PROP: &str = "--draw-color";
const DRAW_COLOR_FALLBACK: &str = "#000000";

// --- Module state ------------------------------------------------------------

/// The one in-flight pointer interaction, if any.
struct ActiveTrace {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    glyph: String,
    session: TraceSession,
}

thread_local! {
    static DRILL_STATE: RefCell<DrillState> = RefCell::new(DrillState::default());
    static ACTIVE_TRACE: RefCell<Option<ActiveTrace>> = const { RefCell::new(None) };
}

// --- Entry -------------------------------------------------------------------

pub fn start_drill() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    wire_button(&doc, SWITCH_BTN_ID, DrillAction::SwitchSet)?;
    wire_button(&doc, PREV_BTN_ID, DrillAction::PrevRow)?;
    wire_button(&doc, NEXT_BTN_ID, DrillAction::NextRow)?;
    wire_button(&doc, CLEAR_BTN_ID, DrillAction::Clear)?;
    wire_button(&doc, SPEAK_BTN_ID, DrillAction::SpeakRow)?;

    // Window-level move/up so strokes continue and sessions always end, even
    // off-canvas.
    {
        let closure = Closure::wrap(Box::new(trace_move_mouse) as Box<dyn FnMut(MouseEvent)>);
        win.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        // Non-passive so preventDefault can keep the page from scrolling
        // while a trace is in progress.
        let closure = Closure::wrap(Box::new(trace_move_touch) as Box<dyn FnMut(TouchEvent)>);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(false);
        win.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        closure.forget();
    }
    {
        let closure =
            Closure::wrap(Box::new(move |_evt: MouseEvent| trace_end()) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure =
            Closure::wrap(Box::new(move |_evt: TouchEvent| trace_end()) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(
            Box::new(move |_evt: web_sys::Event| dispatch(DrillAction::Resize))
                as Box<dyn FnMut(_)>,
        );
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    DRILL_STATE.with(|cell| render(&cell.borrow()))
}

// --- Controller dispatch ------------------------------------------------------

/// Apply one drill action and run its effects: rebuild the canvas strip
/// and/or issue a single speech request.
fn dispatch(action: DrillAction) {
    let (effect, state) = DRILL_STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        let effect = drill::apply(&mut state, action);
        (effect, *state)
    });
    if effect.rerender {
        render(&state).ok();
    }
    if let Some(text) = effect.speak {
        speech::speak(&mut WebSpeech, text);
    }
}

fn wire_button(doc: &Document, id: &str, action: DrillAction) -> Result<(), JsValue> {
    let btn = element(doc, id)?;
    let closure =
        Closure::wrap(Box::new(move |_evt: MouseEvent| dispatch(action)) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// --- Rendering ----------------------------------------------------------------

/// Rebuild the whole canvas strip for the active row. Destructive and total:
/// existing canvases (and any trace on them) are discarded, so clearing,
/// resizing and row changes all land here.
fn render(state: &DrillState) -> Result<(), JsValue> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = element(&doc, CANVAS_CONTAINER_ID)?;
    container.set_inner_html("");
    // The canvases a live session pointed at are gone now; drop it with them.
    ACTIVE_TRACE.with(|cell| cell.borrow_mut().take());

    let row = state.current_row();
    let width = element(&doc, DRILL_CONTAINER_ID)?.client_width() as f64;
    let edge = layout::canvas_edge(width, row.glyphs.len());

    for glyph in row.glyphs {
        let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        canvas.set_class_name("trace-canvas");
        canvas.set_width(edge as u32);
        canvas.set_height(edge as u32);
        canvas.set_attribute("data-glyph", glyph)?;
        container.append_child(&canvas)?;

        let ctx = context_2d(&canvas)?;
        draw_guide(&ctx, glyph, edge);
        attach_down_listeners(&canvas)?;
    }

    element(&doc, CHAR_INFO_ID)?
        .set_text_content(Some(&format!("{} - {}", state.set.label(), row.name)));
    element(&doc, SWITCH_BTN_ID)?.set_text_content(Some(state.set.switch_label()));
    Ok(())
}

/// Paint the faint reference glyph, centered, at 80% of the edge as font size.
fn draw_guide(ctx: &CanvasRenderingContext2d, glyph: &str, edge: f64) {
    ctx.set_fill_style_str(&theme_color(GUIDE_COLOR_PROP, GUIDE_COLOR_FALLBACK));
    ctx.set_font(&format!("{}px sans-serif", edge * layout::GUIDE_FONT_SCALE));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(glyph, edge / 2.0, edge / 2.0).ok();
}

/// Resolve a CSS custom property from the document root, trimmed; fall back
/// when the theme does not define it.
fn theme_color(prop: &str, fallback: &str) -> String {
    let resolved = window()
        .and_then(|win| {
            let root = win.document()?.document_element()?;
            win.get_computed_style(&root).ok().flatten()
        })
        .and_then(|style| style.get_property_value(prop).ok());
    match resolved {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}

// --- Pointer / touch input ------------------------------------------------------

/// Canvas ink surface for the trace state machine: themed stroke, round
/// caps/joins, width scaled to the canvas.
struct CanvasInk<'a> {
    ctx: &'a CanvasRenderingContext2d,
    edge: f64,
}

impl TraceSurface for CanvasInk<'_> {
    fn stroke_segment(&mut self, from: Point, to: Point) {
        self.ctx
            .set_stroke_style_str(&theme_color(DRAW_COLOR_PROP, DRAW_COLOR_FALLBACK));
        self.ctx.set_line_width(trace::stroke_width(self.edge));
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}

fn attach_down_listeners(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    {
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            evt.prevent_default();
            let at = mouse_point(&evt, &canvas_down);
            begin_trace(&canvas_down, at);
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            evt.prevent_default();
            if let Some(at) = touch_point(&evt, &canvas_down) {
                begin_trace(&canvas_down, at);
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Begin a session on this canvas. A down while another session is live
/// silently replaces it (single-pointer model, last down wins).
fn begin_trace(canvas: &HtmlCanvasElement, at: Point) {
    let glyph = canvas.get_attribute("data-glyph").unwrap_or_default();
    let Ok(ctx) = context_2d(canvas) else {
        return;
    };
    ACTIVE_TRACE.with(|cell| {
        cell.borrow_mut().replace(ActiveTrace {
            canvas: canvas.clone(),
            ctx,
            glyph,
            session: TraceSession::begin(at),
        });
    });
}

fn trace_move_mouse(evt: MouseEvent) {
    ACTIVE_TRACE.with(|cell| {
        if let Some(active) = cell.borrow_mut().as_mut() {
            evt.prevent_default();
            let to = mouse_point(&evt, &active.canvas);
            let mut ink = CanvasInk { ctx: &active.ctx, edge: active.canvas.width() as f64 };
            active.session.drag(&mut ink, to);
        }
    });
}

fn trace_move_touch(evt: TouchEvent) {
    ACTIVE_TRACE.with(|cell| {
        if let Some(active) = cell.borrow_mut().as_mut() {
            evt.prevent_default();
            if let Some(to) = touch_point(&evt, &active.canvas) {
                let mut ink = CanvasInk { ctx: &active.ctx, edge: active.canvas.width() as f64 };
                active.session.drag(&mut ink, to);
            }
        }
    });
}

/// Global pointer-up: a session that never moved was a tap, so pronounce the
/// canvas's glyph; either way the session ends here.
fn trace_end() {
    let tapped = ACTIVE_TRACE.with(|cell| {
        cell.borrow_mut()
            .take()
            .and_then(|active| match active.session.finish() {
                TraceOutcome::Tap => Some(active.glyph),
                TraceOutcome::Stroke => None,
            })
    });
    if let Some(glyph) = tapped {
        if !glyph.is_empty() {
            speech::speak(&mut WebSpeech, &glyph);
        }
    }
}

/// Screen coordinates to canvas-local via the canvas's bounding rectangle.
fn mouse_point(evt: &MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    (
        evt.client_x() as f64 - rect.left(),
        evt.client_y() as f64 - rect.top(),
    )
}

/// First touch point, normalized to the same canvas-local coordinates as
/// mouse input.
fn touch_point(evt: &TouchEvent, canvas: &HtmlCanvasElement) -> Option<Point> {
    let touch = evt.touches().item(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some((
        touch.client_x() as f64 - rect.left(),
        touch.client_y() as f64 - rect.top(),
    ))
}

// --- Small DOM helpers ----------------------------------------------------------

fn element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    Ok(ctx)
}

// --- Web speech backend ----------------------------------------------------------

/// `window.speechSynthesis`-backed narrator. Availability is re-checked per
/// call since the capability is a property of the runtime, not of us.
struct WebSpeech;

impl SpeechBackend for WebSpeech {
    fn is_available(&self) -> bool {
        window().map(|w| w.speech_synthesis().is_ok()).unwrap_or(false)
    }

    fn cancel(&mut self) {
        if let Some(synth) = window().and_then(|w| w.speech_synthesis().ok()) {
            synth.cancel();
        }
    }

    fn utter(&mut self, text: &str) {
        let Some(synth) = window().and_then(|w| w.speech_synthesis().ok()) else {
            return;
        };
        let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
            return;
        };
        utterance.set_lang(SPEECH_LANG);
        utterance.set_rate(SPEECH_RATE);
        synth.speak(&utterance);
    }

    fn warn_unavailable(&mut self) {
        if let Some(win) = window() {
            win.alert_with_message(UNAVAILABLE_MESSAGE).ok();
        }
    }
}
