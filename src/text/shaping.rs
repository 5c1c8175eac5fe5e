//! Title/body shaping for generated text.
//!
//! All lengths are counted in `char`s so truncation never lands inside a
//! multi-byte character.

/// Upper bound for `title + "\n" + body`.
pub const MAX_TOTAL_CHARS: usize = 1000;
/// Upper bound for the title line.
pub const MAX_TITLE_CHARS: usize = 60;
/// A period at a character index below this may end the title.
pub const TITLE_PERIOD_WINDOW: usize = 120;
/// Upper bound for the body produced in fallback mode.
pub const MAX_FALLBACK_BODY_CHARS: usize = 940;

const FALLBACK_TITLE_WORDS: usize = 5;
const FALLBACK_BODY_PREFIX: &str = "(Generado localmente - sin clave) ";
const FALLBACK_PLACEHOLDER: &str = "Título de prueba\nTexto de prueba generado sin GROQ_API_KEY.";

/// Returns the first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `char_idx`, or `s.len()` past the end.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(idx, _)| idx)
}

/// Splits text into a title and a body before any length limits apply.
fn split_title_body(text: &str) -> (&str, &str) {
    if let Some(idx) = text.find('\n') {
        return (text[..idx].trim(), text[idx + 1..].trim());
    }

    if let Some(idx) = text.find('.')
        && char_len(&text[..idx]) < TITLE_PERIOD_WINDOW
    {
        return (text[..=idx].trim(), text[idx + 1..].trim());
    }

    if char_len(text) > MAX_TITLE_CHARS {
        let split = byte_offset(text, MAX_TITLE_CHARS);
        return (text[..split].trim(), text[split..].trim());
    }

    (text.trim(), "")
}

/// Shapes upstream text into `title + "\n" + body`, bounded to
/// [`MAX_TOTAL_CHARS`] with a title of at most [`MAX_TITLE_CHARS`]. The
/// result always contains the separating newline, even with an empty body.
pub fn shape_text(raw: &str) -> String {
    let text = truncate_chars(raw, MAX_TOTAL_CHARS);

    let (title, body) = split_title_body(text);
    let mut title = truncate_chars(title, MAX_TITLE_CHARS);

    let body = match MAX_TOTAL_CHARS.checked_sub(char_len(title) + 1) {
        Some(allowed) => truncate_chars(body, allowed),
        None => {
            title = truncate_chars(title, MAX_TITLE_CHARS);
            ""
        }
    };

    format!("{title}\n{body}")
}

/// Deterministic text used when no text API key is configured.
pub fn fallback_text(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return FALLBACK_PLACEHOLDER.to_string();
    }

    let title = trimmed
        .split_whitespace()
        .take(FALLBACK_TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    let title = truncate_chars(&title, MAX_TITLE_CHARS);

    let body = format!("{FALLBACK_BODY_PREFIX}{trimmed}");
    let body = truncate_chars(&body, MAX_FALLBACK_BODY_CHARS);

    format!("{title}\n{body}")
}
