//! Drill controller: which syllabary and which row are active.
//!
//! Modeled as (state, action) -> effect so navigation is plain arithmetic the
//! native tests can exercise without a DOM. The web glue dispatches a
//! `DrillAction` from each button click and carries out the returned effect
//! (re-render the canvas strip and/or issue one speech request).

use crate::catalog::{self, CharacterSet, KanaRow};

/// Current drill position. `row_index` is always valid for `set`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrillState {
    pub set: CharacterSet,
    pub row_index: usize,
}

impl Default for DrillState {
    fn default() -> Self {
        DrillState { set: CharacterSet::Hiragana, row_index: 0 }
    }
}

impl DrillState {
    /// The active row's glyphs and labels.
    pub fn current_row(&self) -> &'static KanaRow {
        &catalog::rows(self.set)[self.row_index]
    }
}

/// Commands the UI can dispatch to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillAction {
    /// Toggle hiragana/katakana; resets to row 0.
    SwitchSet,
    /// Advance one row, wrapping past the last row back to the first.
    NextRow,
    /// Retreat one row, wrapping past the first row back to the last.
    PrevRow,
    /// Wipe traces. Re-render is destructive and total, so clearing is just a rebuild.
    Clear,
    /// Container size changed; rebuild so the canvas edge stays correct.
    Resize,
    /// Pronounce the current row name without changing anything.
    SpeakRow,
}

/// What the dispatcher must do after an action is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrillEffect {
    pub rerender: bool,
    pub speak: Option<&'static str>,
}

/// Apply one action to the drill state, returning the side effects to run.
pub fn apply(state: &mut DrillState, action: DrillAction) -> DrillEffect {
    match action {
        DrillAction::SwitchSet => {
            state.set = state.set.other();
            state.row_index = 0;
            DrillEffect { rerender: true, speak: Some(state.current_row().spoken) }
        }
        DrillAction::NextRow => {
            let count = catalog::rows(state.set).len();
            state.row_index = (state.row_index + 1) % count;
            DrillEffect { rerender: true, speak: Some(state.current_row().spoken) }
        }
        DrillAction::PrevRow => {
            let count = catalog::rows(state.set).len();
            state.row_index = (state.row_index + count - 1) % count;
            DrillEffect { rerender: true, speak: Some(state.current_row().spoken) }
        }
        DrillAction::Clear | DrillAction::Resize => {
            DrillEffect { rerender: true, speak: None }
        }
        DrillAction::SpeakRow => {
            DrillEffect { rerender: false, speak: Some(state.current_row().spoken) }
        }
    }
}
