use crate::foundation::error::TokenResult;
use crate::text::measure::MeasureText;

/// Greedily pack the whitespace-separated words of `text` into lines no wider than
/// `max_width_px`.
///
/// Words are never split: a word that alone is wider than the budget is emitted on its
/// own line. Empty or all-whitespace input yields no lines.
pub fn wrap_text<M>(text: &str, measure: &mut M, max_width_px: f32) -> TokenResult<Vec<String>>
where
    M: MeasureText + ?Sized,
{
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let mut candidate = current.join(" ");
        if !candidate.is_empty() {
            candidate.push(' ');
        }
        candidate.push_str(word);

        if measure.text_width(&candidate)? <= max_width_px {
            current.push(word);
        } else if !current.is_empty() {
            lines.push(current.join(" "));
            current = vec![word];
        } else {
            // force-break: the word alone overflows, commit it and start fresh
            lines.push(word.to_string());
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    tracing::trace!(lines = lines.len(), max_width_px, "wrapped text");
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
