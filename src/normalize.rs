//! # Text Normalizer
//! Cleans raw platform text (captions, transcripts, comments) before it
//! reaches the statistical analyzers. Emoji are deliberately preserved:
//! downstream scoring keys on the exact glyphs.

use once_cell::sync::OnceCell;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalize raw text: entity decode, Arabic refold, URL/hashtag/mention
/// cleanup, whitespace collapse. Always returns a string; degenerate
/// input (whitespace or punctuation only) yields the empty string.
pub fn normalize(text: &str) -> String {
    // 1) HTML entity decode (platform APIs ship `&amp;`-style escapes)
    let mut out = html_escape::decode_html_entities(text).to_string();

    // 2) Fold Arabic presentation forms back to logically-ordered base
    //    letters so substring search matches lexicon entries. Pure-Latin
    //    text skips the pass entirely.
    if out.chars().any(is_arabic) {
        out = out.nfkc().collect();
    }

    // 3) Strip URL-like substrings (generic scheme://...)
    static RE_URL: OnceCell<Regex> = OnceCell::new();
    let re_url = RE_URL.get_or_init(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").unwrap());
    out = re_url.replace_all(&out, "").to_string();

    // 4) Unwrap hashtags, keep the token text
    static RE_HASHTAG: OnceCell<Regex> = OnceCell::new();
    let re_hashtag = RE_HASHTAG.get_or_init(|| Regex::new(r"#(\w+)").unwrap());
    out = re_hashtag.replace_all(&out, "$1").to_string();

    // 5) Drop @mentions entirely
    static RE_MENTION: OnceCell<Regex> = OnceCell::new();
    let re_mention = RE_MENTION.get_or_init(|| Regex::new(r"@\w+").unwrap());
    out = re_mention.replace_all(&out, "").to_string();

    // 6) Collapse whitespace
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").trim().to_string();

    // 7) Nothing left but punctuation → empty. Emoji are not punctuation
    //    and survive this check.
    if out.chars().all(is_strippable) {
        return String::new();
    }

    out
}

/// Arabic script ranges, including the presentation-form blocks that
/// NFKC folds back to base letters.
fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}')
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        // Common non-ASCII punctuation seen in captions.
        || matches!(
            c,
            '،' | '؛' | '؟' | '…' | '«' | '»' | '“' | '”' | '‘' | '’' | '¡' | '¿'
        )
}
