//! Generic HTML entity decoding.
//!
//! The HTML parser already resolves character references found in source
//! markup; this module provides the second decode pass that runs over
//! converted output, catching escape sequences that survive conversion
//! verbatim (e.g. a literal `&amp;amp;` in the source).

/// Named entities the decoder recognizes, without `&`/`;` delimiters.
const NAMED: [(&str, &str); 16] = [
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("nbsp", "\u{a0}"),
    ("mdash", "\u{2014}"),
    ("ndash", "\u{2013}"),
    ("hellip", "\u{2026}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("copy", "\u{a9}"),
    ("reg", "\u{ae}"),
    ("trade", "\u{2122}"),
];

/// Longest recognized entity body, including the `#` prefix of numeric forms.
const MAX_ENTITY_LEN: usize = 10;

/// Decode HTML entity references in `input`.
///
/// Handles the common named entities plus numeric `&#NNN;` and `&#xHH;`
/// references. Anything unrecognized is passed through unchanged.
pub fn unescape(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match decode_one(candidate) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode a single reference at the start of `s` (which begins with `&`).
///
/// Returns the decoded text and the number of bytes consumed, or `None` if
/// no recognizable entity starts here.
fn decode_one(s: &str) -> Option<(String, usize)> {
    let semi = s.find(';')?;
    if semi < 2 || semi > MAX_ENTITY_LEN + 1 {
        return None;
    }

    let body = &s[1..semi];
    let consumed = semi + 1;

    if let Some(digits) = body.strip_prefix('#') {
        let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            digits.parse::<u32>().ok()?
        };
        return char::from_u32(code).map(|c| (c.to_string(), consumed));
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, replacement)| (replacement.to_string(), consumed))
}
