//! Identifier derivation from image file names.
//!
//! Each image becomes one exported binding, so its file stem is turned into a
//! camel-case token:
//!
//! - `my-icon.png` → `myIcon`
//! - `Hero_Banner.jpg` → `heroBanner`
//! - `XMLHttpSpinner.gif` → `xmlHttpSpinner`
//! - `arrow 2x.svg` → `arrow2X`
//!
//! ## Word Splitting
//!
//! A stem is broken into words at every character that is not alphanumeric,
//! at lower→upper case transitions, before the last capital of an acronym that
//! runs into a capitalized word (`XMLHttp` → `XML`, `Http`), and between
//! letters and digits. Apostrophes are dropped before splitting, so `don't`
//! stays a single word.
//!
//! Before any of that, Latin-1 and Latin Extended-A letters are folded to
//! plain ASCII (`café` → `cafe`, `Straße` → `Strasse`) and combining marks are
//! removed, so identifiers stay ASCII for the common European file names.
//!
//! No uniqueness is enforced here: `my-icon.png` and `my_icon.svg` both become
//! `myIcon`.

use std::path::Path;

/// Derive the export identifier for a directory entry name.
///
/// The extension (text after the last dot, as `Path::file_stem` sees it) is
/// stripped before camel-casing.
pub fn derive_identifier(entry_name: &str) -> String {
    let stem = Path::new(entry_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    camel_case(&stem)
}

/// Camel-case an arbitrary string.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(&deburr(input)).iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

/// Fold accented Latin letters to ASCII and drop combining diacritical marks.
pub fn deburr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if is_combining_mark(c) {
            continue;
        }
        match fold_latin(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{300}'..='\u{36f}' | '\u{fe20}'..='\u{fe2f}' | '\u{20d0}'..='\u{20ff}')
}

fn fold_latin(c: char) -> Option<&'static str> {
    let folded = match c {
        // Latin-1 Supplement
        'À'..='Å' => "A",
        'à'..='å' => "a",
        'Ç' => "C",
        'ç' => "c",
        'Ð' => "D",
        'ð' => "d",
        'È'..='Ë' => "E",
        'è'..='ë' => "e",
        'Ì'..='Ï' => "I",
        'ì'..='ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò'..='Ö' | 'Ø' => "O",
        'ò'..='ö' | 'ø' => "o",
        'Ù'..='Ü' => "U",
        'ù'..='ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Æ' => "Ae",
        'æ' => "ae",
        'Þ' => "Th",
        'þ' => "th",
        'ß' => "ss",
        // Latin Extended-A
        'Ā' | 'Ă' | 'Ą' => "A",
        'ā' | 'ă' | 'ą' => "a",
        'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ď' | 'Đ' => "D",
        'ď' | 'đ' => "d",
        'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'Ĥ' | 'Ħ' => "H",
        'ĥ' | 'ħ' => "h",
        'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
        'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'Ĵ' => "J",
        'ĵ' => "j",
        'Ķ' => "K",
        'ķ' | 'ĸ' => "k",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'Ń' | 'Ņ' | 'Ň' | 'Ŋ' => "N",
        'ń' | 'ņ' | 'ň' | 'ŋ' => "n",
        'Ō' | 'Ŏ' | 'Ő' => "O",
        'ō' | 'ŏ' | 'ő' => "o",
        'Ŕ' | 'Ŗ' | 'Ř' => "R",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => "s",
        'Ţ' | 'Ť' | 'Ŧ' => "T",
        'ţ' | 'ť' | 'ŧ' => "t",
        'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ŵ' => "W",
        'ŵ' => "w",
        'Ŷ' | 'Ÿ' => "Y",
        'ŷ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        'Ĳ' => "IJ",
        'ĳ' => "ij",
        'Œ' => "Oe",
        'œ' => "oe",
        'ŉ' => "'n",
        _ => return None,
    };
    Some(folded)
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input
        .chars()
        .filter(|&c| c != '\'' && c != '\u{2019}')
        .collect();

    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().next_back() {
            let next = chars.get(i + 1).copied();
            if is_boundary(prev, c, next) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if prev.is_numeric() != c.is_numeric() {
        return true;
    }
    if c.is_uppercase() {
        if prev.is_lowercase() {
            return true;
        }
        // Acronym followed by a capitalized word: split before the capital
        if prev.is_uppercase() && next.is_some_and(|n| n.is_lowercase()) {
            return true;
        }
    }
    false
}
