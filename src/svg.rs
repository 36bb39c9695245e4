//! Text encodings for SVG documents.
//!
//! Two flavours are provided on top of plain percent-encoding:
//!
//! - [`mini_data_uri`] produces the smallest practical `data:image/svg+xml,`
//!   URI. It collapses whitespace, swaps hex colors for shorter CSS names,
//!   turns double quotes into single quotes (so the result can sit inside a
//!   double-quoted attribute), and leaves characters browsers tolerate in a
//!   data URI unescaped.
//! - [`mini_srcset_data_uri`] additionally escapes spaces, which would
//!   otherwise split a `srcset` candidate.
//!
//! The percent-encoding step follows `encodeURIComponent`: everything except
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped as UTF-8 with uppercase hex.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const MINI_PREFIX: &str = "data:image/svg+xml,";

/// CSS color names that are shorter than the URL-encoded hex they replace.
///
/// `(name, six-digit hex, three-digit hex)`. Order matters where two names
/// share a value: the first entry wins.
const SHORTER_COLOR_NAMES: &[(&str, &str, Option<&str>)] = &[
    ("aqua", "00ffff", Some("0ff")),
    ("azure", "f0ffff", None),
    ("beige", "f5f5dc", None),
    ("bisque", "ffe4c4", None),
    ("black", "000000", Some("000")),
    ("blue", "0000ff", Some("00f")),
    ("brown", "a52a2a", None),
    ("coral", "ff7f50", None),
    ("cornsilk", "fff8dc", None),
    ("crimson", "dc143c", None),
    ("cyan", "00ffff", Some("0ff")),
    ("darkblue", "00008b", None),
    ("darkcyan", "008b8b", None),
    ("darkgrey", "a9a9a9", None),
    ("darkred", "8b0000", None),
    ("deeppink", "ff1493", None),
    ("dimgrey", "696969", None),
    ("gold", "ffd700", None),
    ("green", "008000", None),
    ("grey", "808080", None),
    ("honeydew", "f0fff0", None),
    ("hotpink", "ff69b4", None),
    ("indigo", "4b0082", None),
    ("ivory", "fffff0", None),
    ("khaki", "f0e68c", None),
    ("lavender", "e6e6fa", None),
    ("lime", "00ff00", Some("0f0")),
    ("linen", "faf0e6", None),
    ("maroon", "800000", None),
    ("moccasin", "ffe4b5", None),
    ("navy", "000080", None),
    ("oldlace", "fdf5e6", None),
    ("olive", "808000", None),
    ("orange", "ffa500", None),
    ("orchid", "da70d6", None),
    ("peru", "cd853f", None),
    ("pink", "ffc0cb", None),
    ("plum", "dda0dd", None),
    ("purple", "800080", None),
    ("red", "ff0000", Some("f00")),
    ("salmon", "fa8072", None),
    ("seagreen", "2e8b57", None),
    ("seashell", "fff5ee", None),
    ("sienna", "a0522d", None),
    ("silver", "c0c0c0", None),
    ("skyblue", "87ceeb", None),
    ("snow", "fffafa", None),
    ("tan", "d2b48c", None),
    ("teal", "008080", None),
    ("thistle", "d8bfd8", None),
    ("tomato", "ff6347", None),
    ("violet", "ee82ee", None),
    ("wheat", "f5deb3", None),
    ("white", "ffffff", Some("fff")),
];

/// Percent-encode a whole string the way `encodeURIComponent` does.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

pub fn mini_data_uri(svg: &str) -> String {
    let svg = svg.strip_prefix('\u{feff}').unwrap_or(svg);
    let body = shorten_colors(&collapse_whitespace(svg)).replace('"', "'");
    let mut uri = String::with_capacity(MINI_PREFIX.len() + body.len());
    uri.push_str(MINI_PREFIX);
    uri.push_str(&relax_escapes(&encode_uri_component(&body)));
    uri
}

pub fn mini_srcset_data_uri(svg: &str) -> String {
    mini_data_uri(svg).replace(' ', "%20")
}

/// Trim, then replace every whitespace run with a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split(is_markup_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// ECMAScript `\s`: Unicode `White_Space` plus U+FEFF, minus U+0085.
fn is_markup_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Replace `#rrggbb`, `#rgb` (optionally with an opaque `ff`/`f` alpha) by a
/// shorter color name. The hex must not run into further word characters.
fn shorten_colors(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('#') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let token_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let token = &after[..token_len];

        match color_name_for(token) {
            Some(name) => {
                out.push_str(name);
                rest = &after[token_len..];
            }
            None => {
                out.push('#');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn color_name_for(hex: &str) -> Option<&'static str> {
    if hex.is_empty() {
        return None;
    }
    let hex = hex.to_ascii_lowercase();
    SHORTER_COLOR_NAMES
        .iter()
        .find(|(_, long, short)| {
            matches_with_opaque_alpha(&hex, long, "ff")
                || short.is_some_and(|s| matches_with_opaque_alpha(&hex, s, "f"))
        })
        .map(|(name, _, _)| *name)
}

fn matches_with_opaque_alpha(hex: &str, color: &str, alpha: &str) -> bool {
    hex.strip_prefix(color)
        .is_some_and(|tail| tail.is_empty() || tail == alpha)
}

/// Undo escaping for characters that are safe in a data URI and lowercase the
/// remaining escapes, which compress better.
fn relax_escapes(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos..pos + 3).unwrap_or(&rest[pos..]);
        match escape {
            "%20" => out.push(' '),
            "%3D" => out.push('='),
            "%3A" => out.push(':'),
            "%2F" => out.push('/'),
            other => out.push_str(&other.to_ascii_lowercase()),
        }
        rest = &rest[pos + escape.len()..];
    }
    out.push_str(rest);
    out
}
