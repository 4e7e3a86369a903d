//! Named placeholder substitution.
//!
//! `{name}` is replaced by the value bound to `name`; `{{` and `}}` are
//! literal braces. A brace group whose content is not an identifier
//! (e.g. `{ "json": true }`) is copied through untouched. Rendering fails
//! instead of leaving a placeholder unsubstituted.

use crate::core::error::DomainError;

/// Render `text`, substituting every `{name}` from `vars`.
///
/// `source` names the template in the error when a key is missing.
pub fn render_text(source: &str, text: &str, vars: &[(&str, &str)]) -> Result<String, DomainError> {
    substitute(text, |key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    })
    .map_err(|key| DomainError::MissingPlaceholder {
        template: source.to_string(),
        key,
    })
}

/// Placeholder names referenced by `text`, in first-appearance order.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for segment in segments(text) {
        if let Segment::Placeholder(key) = segment
            && !found.iter().any(|k| k == key)
        {
            found.push(key.to_string());
        }
    }
    found
}

/// A piece of template text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Copied to the output as is; escapes are already collapsed
    Literal(&'a str),
    Placeholder(&'a str),
}

fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['{', '}']) else {
            let literal = rest;
            rest = "";
            return Some(Segment::Literal(literal));
        };
        if pos > 0 {
            let literal = &rest[..pos];
            rest = &rest[pos..];
            return Some(Segment::Literal(literal));
        }

        if rest.starts_with("{{") || rest.starts_with("}}") {
            let literal = &rest[..1];
            rest = &rest[2..];
            return Some(Segment::Literal(literal));
        }
        if rest.starts_with('{')
            && let Some(end) = rest[1..].find('}')
        {
            let key = &rest[1..1 + end];
            if is_placeholder_name(key) {
                rest = &rest[end + 2..];
                return Some(Segment::Placeholder(key));
            }
        }

        let literal = &rest[..1];
        rest = &rest[1..];
        Some(Segment::Literal(literal))
    })
}

fn substitute<'v>(
    text: &str,
    mut resolve: impl FnMut(&str) -> Option<&'v str>,
) -> Result<String, String> {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Placeholder(key) => {
                out.push_str(resolve(key).ok_or_else(|| key.to_string())?);
            }
        }
    }
    Ok(out)
}

fn is_placeholder_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
