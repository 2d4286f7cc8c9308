//! End-to-end ask flow against deterministic model stubs (no network).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ai_chat_service::AiChatError;
use ai_chat_service::error_handler::{Provider, ProviderError, ProviderErrorKind};
use async_trait::async_trait;
use campus_navigator::transcript::{ChatSession, Role};
use campus_navigator::{ANSWER_FAILURE_MESSAGE, AnswerModel, NavigatorError, ask};

/// What the stub should do on each call.
#[derive(Clone)]
enum StubBehavior {
    Answer(&'static str),
    TransportError,
    Malformed(&'static str),
}

struct StubModel {
    behavior: StubBehavior,
    calls: Arc<AtomicUsize>,
}

impl StubModel {
    fn new(behavior: StubBehavior) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                behavior,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl AnswerModel for StubModel {
    async fn generate(
        &self,
        _prompt: &str,
        _system: Option<&str>,
    ) -> Result<String, AiChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Answer(answer) => Ok(format!("{{\"answer\": \"{answer}\"}}")),
            StubBehavior::TransportError => Err(ProviderError::new(
                Provider::OpenAI,
                ProviderErrorKind::Decode("simulated connection reset".into()),
            )
            .into()),
            StubBehavior::Malformed(raw) => Ok((*raw).to_string()),
        }
    }
}

#[tokio::test]
async fn successful_submission_yields_paired_turns() {
    let (model, calls) = StubModel::new(StubBehavior::Answer(
        "Admissions require transcripts, recommendations, and an application form.",
    ));
    let mut session = ChatSession::new(model);

    let answer = session
        .submit("What are the admission requirements?")
        .await
        .unwrap();
    assert_eq!(
        answer,
        "Admissions require transcripts, recommendations, and an application form."
    );

    let turns = session.transcript().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::Asker);
    assert_eq!(turns[0].content, "What are the admission requirements?");
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(
        turns[1].content,
        "Admissions require transcripts, recommendations, and an application form."
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_question_is_rejected_before_any_model_call() {
    let (model, calls) = StubModel::new(StubBehavior::Answer("unused"));
    let mut session = ChatSession::new(model);

    let err = session.submit("").await.unwrap_err();
    assert!(matches!(err, NavigatorError::EmptyQuestion));
    assert_eq!(err.user_message(), ANSWER_FAILURE_MESSAGE);

    let err = session.submit("   \t  ").await.unwrap_err();
    assert!(matches!(err, NavigatorError::EmptyQuestion));

    assert!(session.transcript().turns().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn transport_failure_retracts_the_asker_turn() {
    let (model, calls) = StubModel::new(StubBehavior::TransportError);
    let mut session = ChatSession::new(model);

    let err = session.submit("Hello").await.unwrap_err();
    assert!(matches!(err, NavigatorError::Model(_)));
    // The user-facing text is the fixed generic message, never the
    // underlying technical error.
    assert_eq!(err.user_message(), ANSWER_FAILURE_MESSAGE);
    assert!(!err.user_message().contains("connection reset"));

    assert!(session.transcript().turns().is_empty());
    assert!(!session.transcript().is_awaiting());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_output_is_a_contract_violation_with_generic_message() {
    for raw in [
        "plain text, no JSON at all",
        r#"{"answer": "ok", "extra": 1}"#,
        r#"{"respuesta": "ok"}"#,
        r#"{"answer": ""}"#,
    ] {
        let (model, _) = StubModel::new(StubBehavior::Malformed(raw));
        let mut session = ChatSession::new(model);

        let err = session.submit("Hello").await.unwrap_err();
        assert!(
            matches!(err, NavigatorError::Contract(_)),
            "expected contract violation for {raw:?}"
        );
        assert_eq!(err.user_message(), ANSWER_FAILURE_MESSAGE);
        assert!(session.transcript().turns().is_empty());
    }
}

#[tokio::test]
async fn resubmitting_the_same_question_is_an_independent_call() {
    let (model, calls) = StubModel::new(StubBehavior::Answer("The campus opens at 8am."));
    let mut session = ChatSession::new(model);

    let first = session.submit("When does campus open?").await.unwrap();
    let second = session.submit("When does campus open?").await.unwrap();
    assert_eq!(first, second);

    // Two full request/response pairs, two model calls, no shared state.
    assert_eq!(session.transcript().turns().len(), 4);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn ask_alone_never_touches_transcript_state() {
    let (model, calls) = StubModel::new(StubBehavior::Answer("Yes, twice a week."));
    let answer = ask(&model, "Is there a music club?").await.unwrap();
    assert_eq!(answer, "Yes, twice a week.");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
