// Additional integration tests for catalog invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use kana_trace::catalog::{self, CharacterSet, HIRAGANA_ROWS, KATAKANA_ROWS};

#[test]
fn both_sets_have_ten_parallel_rows() {
    assert_eq!(HIRAGANA_ROWS.len(), 10);
    assert_eq!(KATAKANA_ROWS.len(), 10);
    for (h, k) in HIRAGANA_ROWS.iter().zip(KATAKANA_ROWS.iter()) {
        assert_eq!(
            h.glyphs.len(),
            k.glyphs.len(),
            "row {} / {} should have matching glyph counts",
            h.name,
            k.name
        );
        // Spoken readings are shared across the syllabaries.
        assert_eq!(h.spoken, k.spoken);
    }
}

#[test]
fn rows_hold_three_or_five_single_character_glyphs() {
    for set in [CharacterSet::Hiragana, CharacterSet::Katakana] {
        for row in catalog::rows(set) {
            assert!(
                row.glyphs.len() == 3 || row.glyphs.len() == 5,
                "row {} has {} glyphs",
                row.name,
                row.glyphs.len()
            );
            for glyph in row.glyphs {
                assert_eq!(
                    glyph.chars().count(),
                    1,
                    "glyph '{}' in row {} is not a single character",
                    glyph,
                    row.name
                );
            }
        }
    }
}

#[test]
fn ya_and_wa_rows_are_the_short_ones() {
    for rows in [HIRAGANA_ROWS, KATAKANA_ROWS] {
        let short: Vec<&str> = rows
            .iter()
            .filter(|r| r.glyphs.len() == 3)
            .map(|r| r.name)
            .collect();
        assert_eq!(short.len(), 2, "exactly two three-glyph rows expected");
    }
    assert_eq!(HIRAGANA_ROWS[7].name, "や行");
    assert_eq!(HIRAGANA_ROWS[9].name, "わ行");
    assert_eq!(KATAKANA_ROWS[7].name, "ヤ行");
    assert_eq!(KATAKANA_ROWS[9].name, "ワ行");
}

#[test]
fn glyphs_are_unique_within_each_set() {
    for set in [CharacterSet::Hiragana, CharacterSet::Katakana] {
        let mut seen = HashSet::new();
        for row in catalog::rows(set) {
            for glyph in row.glyphs {
                assert!(seen.insert(*glyph), "duplicate glyph '{}' in {:?}", glyph, set);
            }
        }
    }
}

#[test]
fn row_names_and_spoken_names_are_nonempty_and_distinct() {
    for set in [CharacterSet::Hiragana, CharacterSet::Katakana] {
        let mut names = HashSet::new();
        for row in catalog::rows(set) {
            assert!(!row.name.is_empty());
            assert!(!row.spoken.is_empty());
            // The spoken label is a phonetic reading, not the display label.
            assert_ne!(row.name, row.spoken);
            assert!(names.insert(row.name), "duplicate row name '{}'", row.name);
        }
    }
}

#[test]
fn set_labels_and_switch_captions() {
    assert_eq!(CharacterSet::Hiragana.label(), "ひらがな");
    assert_eq!(CharacterSet::Katakana.label(), "カタカナ");
    // The switch caption names the set a click would move to.
    assert_eq!(CharacterSet::Hiragana.switch_label(), "カタカナにする");
    assert_eq!(CharacterSet::Katakana.switch_label(), "ひらがなにする");
    assert_eq!(CharacterSet::Hiragana.other(), CharacterSet::Katakana);
    assert_eq!(CharacterSet::Katakana.other(), CharacterSet::Hiragana);
}
