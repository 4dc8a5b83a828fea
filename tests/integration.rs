// Integration tests (native) for the `kana-trace` crate.
// These tests avoid wasm-specific functionality and exercise the pure drill
// controller so they can run under `cargo test` on the host.

use kana_trace::catalog::{self, CharacterSet};
use kana_trace::drill::{DrillAction, DrillEffect, DrillState, apply};

#[test]
fn next_then_prev_returns_to_start_for_every_row() {
    for set in [CharacterSet::Hiragana, CharacterSet::Katakana] {
        for start in 0..catalog::rows(set).len() {
            let mut state = DrillState { set, row_index: start };
            apply(&mut state, DrillAction::NextRow);
            apply(&mut state, DrillAction::PrevRow);
            assert_eq!(state.row_index, start, "next/prev not inverse from row {start}");

            apply(&mut state, DrillAction::PrevRow);
            apply(&mut state, DrillAction::NextRow);
            assert_eq!(state.row_index, start, "prev/next not inverse from row {start}");
        }
    }
}

#[test]
fn navigation_wraps_at_both_ends() {
    let last = catalog::rows(CharacterSet::Hiragana).len() - 1;

    let mut state = DrillState { set: CharacterSet::Hiragana, row_index: last };
    apply(&mut state, DrillAction::NextRow);
    assert_eq!(state.row_index, 0, "next from last row should wrap to 0");

    let mut state = DrillState { set: CharacterSet::Hiragana, row_index: 0 };
    apply(&mut state, DrillAction::PrevRow);
    assert_eq!(state.row_index, last, "prev from row 0 should wrap to last");
}

#[test]
fn switch_set_toggles_and_resets_row_index() {
    let mut state = DrillState { set: CharacterSet::Hiragana, row_index: 4 };
    apply(&mut state, DrillAction::SwitchSet);
    assert_eq!(state.set, CharacterSet::Katakana);
    assert_eq!(state.row_index, 0);

    state.row_index = 7;
    apply(&mut state, DrillAction::SwitchSet);
    assert_eq!(state.set, CharacterSet::Hiragana);
    assert_eq!(state.row_index, 0);
}

#[test]
fn mutating_actions_rerender_and_announce_the_new_row() {
    let mut state = DrillState::default();
    for action in [DrillAction::SwitchSet, DrillAction::NextRow, DrillAction::PrevRow] {
        let effect = apply(&mut state, action);
        assert!(effect.rerender, "{action:?} must rerender");
        assert_eq!(
            effect.speak,
            Some(state.current_row().spoken),
            "{action:?} must announce the row it landed on"
        );
    }
}

#[test]
fn clear_and_resize_rerender_without_moving_or_speaking() {
    let mut state = DrillState { set: CharacterSet::Katakana, row_index: 3 };
    for action in [DrillAction::Clear, DrillAction::Resize] {
        let effect = apply(&mut state, action);
        assert_eq!(effect, DrillEffect { rerender: true, speak: None });
        assert_eq!(state.set, CharacterSet::Katakana);
        assert_eq!(state.row_index, 3);
    }
}

#[test]
fn speak_row_announces_without_rerendering() {
    let mut state = DrillState { set: CharacterSet::Hiragana, row_index: 1 };
    let effect = apply(&mut state, DrillAction::SpeakRow);
    assert!(!effect.rerender);
    assert_eq!(effect.speak, Some("かぎょう"));
    assert_eq!(state.row_index, 1);
}

#[test]
fn current_row_reads_the_active_catalog_row() {
    let state = DrillState { set: CharacterSet::Katakana, row_index: 1 };
    let row = state.current_row();
    assert_eq!(row.name, "カ行");
    assert_eq!(row.glyphs, ["カ", "キ", "ク", "ケ", "コ"]);
}
