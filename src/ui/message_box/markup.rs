// SPDX-License-Identifier: MPL-2.0
//! Flattens the small markup subset callers put in dialog bodies.
//!
//! Bodies are written for a browser-style renderer (`<br>`, `<strong>`,
//! `<ul><li>`). Iced renders plain text, so line structure is kept and the
//! remaining tags are dropped.

/// Converts body markup into displayable text.
///
/// - `<br>`, `<br/>` and closing `p`, `div` and `li` tags become line breaks
/// - `<li>` starts a bulleted line
/// - other tags are removed
/// - `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#39;` and `&nbsp;` are decoded
///
/// A `<` not followed by a letter, `/` or `!` is text, as is an
/// unterminated tag.
#[must_use]
pub fn to_plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        out.push_str(&decode_entities(&rest[..start]));
        let after = &rest[start + 1..];
        if !opens_tag(after) {
            out.push('<');
            rest = after;
            continue;
        }
        let Some(end) = after.find('>') else {
            out.push_str(&decode_entities(&rest[start..]));
            return finish(out);
        };
        apply_tag(&after[..end], &mut out);
        rest = &after[end + 1..];
    }
    out.push_str(&decode_entities(rest));
    finish(out)
}

fn opens_tag(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

fn apply_tag(tag: &str, out: &mut String) {
    let tag = tag.trim().trim_end_matches('/').trim();
    let (closing, name) = match tag.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, tag),
    };
    let name = name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match (closing, name.as_str()) {
        (false, "br") => out.push('\n'),
        (false, "li") => {
            break_line(out);
            out.push_str("• ");
        }
        (true, "p" | "div" | "li" | "ul" | "ol") => break_line(out),
        _ => {}
    }
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn finish(out: String) -> String {
    out.trim_end_matches('\n').to_string()
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
