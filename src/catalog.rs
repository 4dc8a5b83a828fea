//! Static kana catalog: the two syllabaries, organized into gojūon rows.
//!
//! Everything here is `const` data; the drill controller indexes into it and
//! the renderer reads glyphs out of it. Spoken row names are the phonetic
//! readings (かぎょう etc.) handed to speech synthesis, which are shared by
//! both syllabaries.

/// Which syllabary the drill is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterSet {
    Hiragana,
    Katakana,
}

impl CharacterSet {
    /// The other syllabary (the set count is fixed at two, so switching is a toggle).
    pub fn other(self) -> CharacterSet {
        match self {
            CharacterSet::Hiragana => CharacterSet::Katakana,
            CharacterSet::Katakana => CharacterSet::Hiragana,
        }
    }

    /// Display label shown in the row info line.
    pub fn label(self) -> &'static str {
        match self {
            CharacterSet::Hiragana => "ひらがな",
            CharacterSet::Katakana => "カタカナ",
        }
    }

    /// Switch-button caption: names the set a click would move to.
    pub fn switch_label(self) -> &'static str {
        match self {
            CharacterSet::Hiragana => "カタカナにする",
            CharacterSet::Katakana => "ひらがなにする",
        }
    }
}

/// One gojūon row: its glyphs, display name, and spoken (phonetic) name.
pub struct KanaRow {
    pub glyphs: &'static [&'static str],
    pub name: &'static str,
    pub spoken: &'static str,
}

pub const HIRAGANA_ROWS: &[KanaRow] = &[
    KanaRow { glyphs: &["あ", "い", "う", "え", "お"], name: "あ行", spoken: "あぎょう" },
    KanaRow { glyphs: &["か", "き", "く", "け", "こ"], name: "か行", spoken: "かぎょう" },
    KanaRow { glyphs: &["さ", "し", "す", "せ", "そ"], name: "さ行", spoken: "さぎょう" },
    KanaRow { glyphs: &["た", "ち", "つ", "て", "と"], name: "た行", spoken: "たぎょう" },
    KanaRow { glyphs: &["な", "に", "ぬ", "ね", "の"], name: "な行", spoken: "なぎょう" },
    KanaRow { glyphs: &["は", "ひ", "ふ", "へ", "ほ"], name: "は行", spoken: "はぎょう" },
    KanaRow { glyphs: &["ま", "み", "む", "め", "も"], name: "ま行", spoken: "まぎょう" },
    KanaRow { glyphs: &["や", "ゆ", "よ"], name: "や行", spoken: "やぎょう" },
    KanaRow { glyphs: &["ら", "り", "る", "れ", "ろ"], name: "ら行", spoken: "らぎょう" },
    KanaRow { glyphs: &["わ", "を", "ん"], name: "わ行", spoken: "わぎょう" },
];

pub const KATAKANA_ROWS: &[KanaRow] = &[
    KanaRow { glyphs: &["ア", "イ", "ウ", "エ", "オ"], name: "ア行", spoken: "あぎょう" },
    KanaRow { glyphs: &["カ", "キ", "ク", "ケ", "コ"], name: "カ行", spoken: "かぎょう" },
    KanaRow { glyphs: &["サ", "シ", "ス", "セ", "ソ"], name: "サ行", spoken: "さぎょう" },
    KanaRow { glyphs: &["タ", "チ", "ツ", "テ", "ト"], name: "タ行", spoken: "たぎょう" },
    KanaRow { glyphs: &["ナ", "ニ", "ヌ", "ネ", "ノ"], name: "ナ行", spoken: "なぎょう" },
    KanaRow { glyphs: &["ハ", "ヒ", "フ", "ヘ", "ホ"], name: "ハ行", spoken: "はぎょう" },
    KanaRow { glyphs: &["マ", "ミ", "ム", "メ", "モ"], name: "マ行", spoken: "まぎょう" },
    KanaRow { glyphs: &["ヤ", "ユ", "ヨ"], name: "ヤ行", spoken: "やぎょう" },
    KanaRow { glyphs: &["ラ", "リ", "ル", "レ", "ロ"], name: "ラ行", spoken: "らぎょう" },
    KanaRow { glyphs: &["ワ", "ヲ", "ン"], name: "ワ行", spoken: "わぎょう" },
];

/// Rows of the given syllabary, in gojūon order.
pub fn rows(set: CharacterSet) -> &'static [KanaRow] {
    match set {
        CharacterSet::Hiragana => HIRAGANA_ROWS,
        CharacterSet::Katakana => KATAKANA_ROWS,
    }
}
