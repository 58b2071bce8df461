//! # Messaging Tests
//!
//! Tests for sending questions and rendering answers.

use super::*;
use crate::session::{MessageKind, Speaker};
use shared::Role;

#[tokio::test]
async fn test_blank_message_is_not_sent() {
    // Arrange
    let (controller, api, _store) = setup();

    // Act
    let outcome = controller.send_message("   \n\t").await;

    // Assert
    assert_eq!(outcome, SendOutcome::Rejected);
    assert!(api.calls().is_empty());
    controller.with_state(|s| {
        assert!(s.conversation.is_empty());
        assert!(s.transcript.is_empty());
    });
}

#[tokio::test]
async fn test_answer_appends_user_then_assistant() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Ok(answer("Processing got faster.")));

    // Act
    let outcome = controller.send_message("  What changed?  ").await;

    // Assert
    assert_eq!(outcome, SendOutcome::Answered);
    controller.with_state(|s| {
        assert_eq!(s.conversation.len(), 2);
        assert_eq!(s.conversation[0].role, Role::User);
        assert_eq!(s.conversation[0].content, "What changed?");
        assert_eq!(s.conversation[0].version.as_deref(), Some("RelativityOne"));
        assert_eq!(s.conversation[1].role, Role::Assistant);
        assert_eq!(s.conversation[1].content, "Processing got faster.");
        assert_eq!(s.conversation[1].confidence, Some(0.9));

        assert_eq!(s.transcript.len(), 2);
        assert_eq!(s.transcript[0].speaker, Speaker::User);
        assert_eq!(s.transcript[1].speaker, Speaker::Bot);
        assert_eq!(s.transcript[1].citations.len(), 1);
        assert_eq!(s.last_answer, "Processing got faster.");
        assert!(!s.is_typing());
    });
}

#[tokio::test]
async fn test_request_carries_version_and_mode() {
    // Arrange
    let (controller, api, _store) = setup();
    controller.set_mode(Mode::Guided).await;

    // Act
    controller.send_message("Audit").await;

    // Assert
    let asks = api.inner.asks.borrow();
    assert_eq!(asks.len(), 1);
    assert_eq!(asks[0].message, "Audit");
    assert_eq!(asks[0].version, "RelativityOne");
    assert_eq!(asks[0].mode, Mode::Guided);
}

#[tokio::test]
async fn test_answer_markup_is_sanitized() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Ok(answer("<script>x</script><br/>done\nnext")));

    // Act
    controller.send_message("q").await;

    // Assert
    controller.with_state(|s| {
        assert_eq!(
            s.transcript[1].html,
            "&lt;script&gt;x&lt;/script&gt;<br/>done<br/>next"
        );
        assert_eq!(s.conversation[1].content, "<script>x</script><br/>done\nnext");
    });
}

#[tokio::test]
async fn test_contact_prompt_follows_answer() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Ok(AskResponse {
        should_collect_contact: true,
        ..answer("Low confidence answer")
    }));

    // Act
    controller.send_message("obscure question").await;

    // Assert
    controller.with_state(|s| {
        assert_eq!(s.transcript.len(), 3);
        assert_eq!(s.transcript[1].html, "Low confidence answer");
        assert_eq!(s.transcript[2].html, notices::CONTACT_PROMPT);
        assert_eq!(
            s.transcript.iter().filter(|m| m.html == notices::CONTACT_PROMPT).count(),
            1
        );
        // The prompt is not part of the exported conversation
        assert_eq!(s.conversation.len(), 2);
    });
}

#[tokio::test]
async fn test_server_error_renders_apology() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Ok(AskResponse {
        error: Some("empty message".to_string()),
        ..Default::default()
    }));

    // Act
    let outcome = controller.send_message("hello").await;

    // Assert
    assert_eq!(outcome, SendOutcome::Failed);
    assert_eq!(api.count("history"), 0);
    controller.with_state(|s| {
        assert_eq!(s.conversation.len(), 1);
        assert_eq!(s.transcript.last().unwrap().html, notices::ASK_FAILED);
        assert!(s.last_answer.is_empty());
    });
}

#[tokio::test]
async fn test_empty_error_field_keeps_answer() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Ok(AskResponse {
        error: Some(String::new()),
        ..answer("Uploads are resumable now.")
    }));

    // Act
    let outcome = controller.send_message("what changed?").await;

    // Assert
    assert_eq!(outcome, SendOutcome::Answered);
    controller.with_state(|s| {
        assert_eq!(s.transcript.last().unwrap().html, "Uploads are resumable now.");
        assert_eq!(s.last_answer, "Uploads are resumable now.");
    });
}

#[tokio::test]
async fn test_network_error_renders_apology() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Err(ApiError::Network("offline".to_string())));

    // Act
    let outcome = controller.send_message("hello").await;

    // Assert
    assert_eq!(outcome, SendOutcome::Failed);
    controller.with_state(|s| {
        assert_eq!(s.transcript.len(), 2);
        assert_eq!(s.transcript[1].html, notices::ASK_NETWORK_FAILED);
        assert!(!s.is_typing());
    });
}

#[tokio::test]
async fn test_success_refreshes_history() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_history(Ok(HistoryResponse {
        items: vec![history_item("user", "hello"), history_item("assistant", "hi")],
    }));

    // Act
    controller.send_message("hello").await;

    // Assert
    assert_eq!(api.calls(), vec!["ask", "history"]);
    controller.with_state(|s| assert!(matches!(&s.history, HistoryPanel::Rows(rows) if rows.len() == 2)));
}

#[tokio::test]
async fn test_submit_draft_clears_input() {
    // Arrange
    let (controller, api, _store) = setup();
    controller.set_draft("Summarize the \"Audit\" section.");

    // Act
    controller.submit_draft().await;

    // Assert
    assert_eq!(api.count("ask"), 1);
    controller.with_state(|s| assert!(s.draft.is_empty()));
}

#[tokio::test]
async fn test_overlapping_sends_both_render() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_ask(Ok(answer("same answer")));

    // Act
    let (first, second) = tokio::join!(
        controller.send_message("first"),
        controller.send_message("second")
    );

    // Assert
    assert_eq!(first, SendOutcome::Answered);
    assert_eq!(second, SendOutcome::Answered);
    controller.with_state(|s| {
        assert_eq!(s.conversation.len(), 4);
        assert_eq!(s.pending_asks, 0);
    });
}

#[tokio::test]
async fn test_toast_is_not_a_bubble() {
    let (controller, _api, _store) = setup();

    controller.toast("Text-to-Speech not supported in this browser.");

    controller.with_state(|s| {
        assert_eq!(s.transcript[0].kind, MessageKind::Toast);
        assert!(s.conversation.is_empty());
    });
}
