//! Prompt builder: fixed persona + strict output-shape instruction.

/// System instructions for the Campus Navigator persona.
///
/// The output-shape clause matters: the answer is extracted by strict JSON
/// decoding, so the model must reply with a single-field object.
pub const NAVIGATOR_SYSTEM: &str = r#"
You are the AI Campus Navigator, a helpful assistant for prospective students and parents.
Your goal is to provide concise, accurate, and informative answers to questions about
campus life, admissions processes, and general school inquiries.
Respond with a JSON object containing exactly one field, "answer", whose value is your
answer as plain text. Do not include any other fields or any text outside the object.
"#;

/// Build the final user prompt for one question.
///
/// The question arrives pre-trimmed and non-empty; validation happens before
/// prompt construction.
///
/// # Example
/// ```
/// # use campus_navigator::build_user_prompt;
/// let prompt = build_user_prompt("What are the admission requirements?");
/// assert!(prompt.contains("Question:"));
/// ```
pub fn build_user_prompt(question: &str) -> String {
    let mut out = String::new();
    out.push_str("Please answer the following question:\n");
    out.push_str("Question: ");
    out.push_str(question.trim());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_question() {
        let p = build_user_prompt("  Is there a school bus?  ");
        assert!(p.contains("Question: Is there a school bus?\n"));
    }

    #[test]
    fn system_demands_single_answer_field() {
        assert!(NAVIGATOR_SYSTEM.contains("\"answer\""));
        assert!(NAVIGATOR_SYSTEM.contains("exactly one field"));
    }
}
