//! Session-scoped conversation transcript.
//!
//! One widget instance owns one [`Transcript`]: an append-only list of turns
//! with an explicit retract step for the optimistic asker turn. At most one
//! request is in flight per transcript; a second submission is refused until
//! the pending one resolves. Nothing here persists across sessions.

use crate::error::NavigatorError;
use crate::model::AnswerModel;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The person typing questions.
    Asker,
    /// The navigator model.
    Assistant,
}

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered, in-memory conversation history with an in-flight guard.
///
/// Lifecycle per submission: [`Transcript::begin`] appends the asker turn and
/// marks the transcript awaiting; [`Transcript::complete`] appends the paired
/// assistant turn; [`Transcript::fail`] retracts the asker turn instead. The
/// transcript therefore only ever shows turns that produced (or are about to
/// produce) a visible answer.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    awaiting: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All turns in display order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True while a submission is awaiting its model response.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Starts a submission: validates the question, refuses overlapping
    /// requests, and appends the asker turn optimistically.
    ///
    /// # Errors
    /// - [`NavigatorError::Busy`] if a request is already in flight
    /// - [`NavigatorError::EmptyQuestion`] if the question trims to nothing
    pub fn begin(&mut self, question: &str) -> Result<(), NavigatorError> {
        if self.awaiting {
            return Err(NavigatorError::Busy);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(NavigatorError::EmptyQuestion);
        }
        self.turns.push(Turn {
            role: Role::Asker,
            content: question.to_string(),
        });
        self.awaiting = true;
        Ok(())
    }

    /// Finalizes the pending submission with the assistant's answer.
    pub fn complete(&mut self, answer: impl Into<String>) {
        if !self.awaiting {
            return;
        }
        self.turns.push(Turn {
            role: Role::Assistant,
            content: answer.into(),
        });
        self.awaiting = false;
    }

    /// Rolls back the pending submission, retracting the optimistic asker turn.
    pub fn fail(&mut self) {
        if !self.awaiting {
            return;
        }
        self.turns.pop();
        self.awaiting = false;
    }
}

/// Drives one transcript against one model capability.
///
/// `submit` runs the whole two-phase cycle: optimistic append, stateless
/// model call, then finalize or roll back. Holding `&mut self` across the
/// await means a session structurally cannot overlap its own requests; the
/// explicit [`NavigatorError::Busy`] guard covers callers that share the
/// transcript through other means.
pub struct ChatSession<M> {
    model: M,
    transcript: Transcript,
}

impl<M: AnswerModel> ChatSession<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            transcript: Transcript::new(),
        }
    }

    /// Submits one question and returns the answer text.
    ///
    /// On success the transcript gains the asker turn followed by the
    /// assistant turn; on any failure the asker turn is retracted and the
    /// caller should surface [`NavigatorError::user_message`].
    pub async fn submit(&mut self, question: &str) -> Result<String, NavigatorError> {
        self.transcript.begin(question)?;

        match crate::ask(&self.model, question).await {
            Ok(answer) => {
                self.transcript.complete(answer.clone());
                Ok(answer)
            }
            Err(e) => {
                self.transcript.fail();
                Err(e)
            }
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_appends_asker_turn() {
        let mut t = Transcript::new();
        t.begin("  Is there a cafeteria?  ").unwrap();
        assert!(t.is_awaiting());
        assert_eq!(t.turns().len(), 1);
        assert_eq!(t.turns()[0].role, Role::Asker);
        assert_eq!(t.turns()[0].content, "Is there a cafeteria?");
    }

    #[test]
    fn complete_pairs_assistant_turn() {
        let mut t = Transcript::new();
        t.begin("Hello").unwrap();
        t.complete("Hi! How can I help?");
        assert!(!t.is_awaiting());
        assert_eq!(t.turns().len(), 2);
        assert_eq!(t.turns()[1].role, Role::Assistant);
    }

    #[test]
    fn fail_retracts_the_asker_turn() {
        let mut t = Transcript::new();
        t.begin("Hello").unwrap();
        t.fail();
        assert!(t.turns().is_empty());
        assert!(!t.is_awaiting());
    }

    #[test]
    fn second_begin_while_awaiting_is_refused() {
        let mut t = Transcript::new();
        t.begin("first").unwrap();
        assert!(matches!(t.begin("second"), Err(NavigatorError::Busy)));
        assert_eq!(t.turns().len(), 1);
    }

    #[test]
    fn empty_question_is_rejected_without_a_turn() {
        let mut t = Transcript::new();
        assert!(matches!(
            t.begin("   "),
            Err(NavigatorError::EmptyQuestion)
        ));
        assert!(t.turns().is_empty());
        assert!(!t.is_awaiting());
    }

    #[test]
    fn retract_then_resubmit_works() {
        let mut t = Transcript::new();
        t.begin("Hello").unwrap();
        t.fail();
        t.begin("Hello").unwrap();
        t.complete("Hi!");
        assert_eq!(t.turns().len(), 2);
    }
}
