//! Turns Product Hunt posts into text Alexa can speak.
//!
//! Every post goes through the same steps in a fixed order: strip emoji, fold
//! to ASCII, escape markup, then drop the snowflake sentinel from the escaped
//! text. Reordering them changes the output.
use crate::hunt::Post;
use deunicode::deunicode_char;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Leftover that some transliterations leave behind: a space followed by a
/// text-presentation snowflake.
pub const SENTINEL: &str = " \u{2744}\u{FE0E}";

lazy_static! {
    static ref EMOJI: Regex = Regex::new(concat!(
        r"[\p{Extended_Pictographic}",
        r"\u{1F1E6}-\u{1F1FF}",
        r"\u{1F3FB}-\u{1F3FF}",
        r"\u{FE0F}\u{200D}\u{20E3}",
        r"\u{E0020}-\u{E007F}]",
    ))
    .expect("static emoji regex");
}

/// Speech safe sentence for one post, ready to drop inside `<speak>`.
pub fn speech(post: &Post) -> String {
    let plain = asciify(&strip_emoji(&sentence(post)));
    strip_sentinel(&escape(&plain))
}

/// Plain text line for the companion card. Cards aren't markup, so nothing
/// is escaped.
pub fn card_line(post: &Post) -> String {
    let plain = asciify(&strip_emoji(&sentence(post)));
    plain.trim_end().to_owned()
}

fn sentence(post: &Post) -> String {
    let tagline = post.tagline.as_deref().unwrap_or_default();
    format!("{} posted {}, {}. ", post.user.name, post.name, tagline)
}

pub fn strip_emoji(text: &str) -> Cow<str> {
    EMOJI.replace_all(text, "")
}

/// Folds text down to ASCII. Accents are decomposed and dropped, a handful of
/// letters and punctuation are spelled out by hand, other scripts go through
/// `deunicode`. Characters neither knows disappear.
pub fn asciify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkd() {
        if c.is_ascii() {
            out.push(c);
        } else if is_combining_mark(c) {
            continue;
        } else if let Some(folded) = fold(c).or_else(|| deunicode_char(c)) {
            out.push_str(folded);
        }
    }
    out
}

fn fold(c: char) -> Option<&'static str> {
    let folded = match c {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "Th",
        'ı' => "i",
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' | '«' | '»' => "\"",
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{2022}' | '·' => "-",
        '×' => "x",
        _ => return None,
    };
    Some(folded)
}

/// Escapes the five XML reserved characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

pub fn strip_sentinel(text: &str) -> String {
    text.replace(SENTINEL, "")
}
