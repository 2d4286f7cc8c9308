//! Structured answer extraction.
//!
//! The model is instructed to reply with a JSON object holding exactly one
//! field, `answer`. Decoding is strict: unknown fields, missing fields,
//! non-JSON output, and empty answer text are all contract violations.

use serde::Deserialize;

use crate::error::NavigatorError;

/// Expected shape of the model output.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavigatorAnswer {
    answer: String,
}

/// Decode the raw model output into the answer text.
///
/// Tolerates a Markdown code fence around the object (models add one even
/// when told not to) but nothing else.
///
/// # Errors
/// Returns [`NavigatorError::Contract`] when the output does not conform.
pub fn extract_answer(raw: &str) -> Result<String, NavigatorError> {
    let body = strip_code_fence(raw.trim());

    let parsed: NavigatorAnswer = serde_json::from_str(body)
        .map_err(|e| NavigatorError::Contract(format!("expected {{\"answer\": string}}: {e}")))?;

    let answer = parsed.answer.trim();
    if answer.is_empty() {
        return Err(NavigatorError::Contract("answer text is empty".into()));
    }

    Ok(answer.to_string())
}

/// Strips a single surrounding ``` fence, with or without a language tag.
fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return s;
    };
    // Drop an optional language tag on the opening fence line.
    match rest.split_once('\n') {
        Some((first, tail)) if !first.trim().is_empty() && !first.trim().starts_with('{') => tail,
        _ => rest,
    }
    .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_answer_field() {
        let out = extract_answer(r#"{"answer": "Admissions open in March."}"#).unwrap();
        assert_eq!(out, "Admissions open in March.");
    }

    #[test]
    fn accepts_fenced_object() {
        let raw = "```json\n{\"answer\": \"Yes.\"}\n```";
        assert_eq!(extract_answer(raw).unwrap(), "Yes.");
    }

    #[test]
    fn rejects_extra_fields() {
        let raw = r#"{"answer": "Yes.", "confidence": 0.9}"#;
        assert!(matches!(
            extract_answer(raw),
            Err(NavigatorError::Contract(_))
        ));
    }

    #[test]
    fn rejects_missing_field_and_plain_text() {
        assert!(extract_answer(r#"{"text": "Yes."}"#).is_err());
        assert!(extract_answer("Just a plain sentence.").is_err());
    }

    #[test]
    fn rejects_empty_answer_text() {
        assert!(extract_answer(r#"{"answer": "   "}"#).is_err());
    }
}
