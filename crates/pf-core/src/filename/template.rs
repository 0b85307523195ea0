use super::context::TemplateContext;

/// Returned when the fully expanded, sanitized result is empty.
pub const FALLBACK_NAME: &str = "Untitled";

/// Characters that never reach a filename; each becomes `-`.
const INVALID_CHARS: &[char] = &['/', ':', '\\', '?', '%', '*', '|', '"', '<', '>'];

const FIRST_WORDS_MAX_WORDS: usize = 5;
const FIRST_WORDS_MAX_CHARS: usize = 40;

/// Expand `template` against `ctx`.
///
/// Every token is replaced in a single literal pass regardless of which
/// content kind produced the context: an image expansion still recognizes
/// `{firstWords}`, it just resolves to the empty string unless source text
/// was provided. Always returns a non-empty string.
pub fn expand(template: &str, ctx: &TemplateContext) -> String {
    let date = ctx.timestamp.format("%Y-%m-%d").to_string();
    let time = ctx.timestamp.format("%H.%M.%S").to_string();
    let datetime = format!("{date} {time}");
    let weekday = ctx.timestamp.format("%A").to_string();
    let counter = ctx.counter.to_string();

    let name = ctx
        .source_name
        .as_deref()
        .map(sanitize)
        .unwrap_or_default();
    let first_words = ctx
        .source_text
        .as_deref()
        .map(first_words)
        .unwrap_or_default();

    let replacements: [(&str, &str); 7] = [
        ("{date}", &date),
        ("{time}", &time),
        ("{datetime}", &datetime),
        ("{weekday}", &weekday),
        ("{counter}", &counter),
        ("{name}", &name),
        ("{firstWords}", &first_words),
    ];

    let mut result = template.to_string();
    for (token, value) in replacements {
        result = result.replace(token, value);
    }

    let result = sanitize(&result);
    if result.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        result
    }
}

/// Replace filesystem-hostile characters with `-` and trim surrounding
/// whitespace. Idempotent.
pub fn sanitize(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '-' } else { c })
        .collect();
    replaced.trim().to_string()
}

/// First five whitespace-delimited words of `text`, truncated to 40
/// characters, sanitized. Empty when the text is blank.
fn first_words(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let joined = trimmed
        .split_whitespace()
        .take(FIRST_WORDS_MAX_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    let shortened: String = joined.chars().take(FIRST_WORDS_MAX_CHARS).collect();
    sanitize(&shortened)
}
