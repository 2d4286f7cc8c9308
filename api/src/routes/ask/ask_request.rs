use serde::{Deserialize, Serialize};

/// Request payload for /ask_question.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Natural language question from a prospective student or parent.
    pub question: String,
}

/// Response payload for /ask_question (inside the success envelope).
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Final model answer (plain text).
    pub answer: String,
}
