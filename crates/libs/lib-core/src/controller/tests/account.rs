//! # Account Tests

use super::*;

#[tokio::test]
async fn test_clear_history_resets_chat() {
    // Arrange
    let (controller, api, _store) = setup();
    controller.send_message("hello").await;
    api.on_clear(Ok(AckResponse { ok: true, error: None }));

    // Act
    let cleared = controller.clear_history().await;

    // Assert
    assert!(cleared);
    controller.with_state(|s| {
        assert_eq!(s.history, HistoryPanel::Cleared);
        assert!(s.conversation.is_empty());
        assert_eq!(s.transcript.len(), 1);
        assert_eq!(s.transcript[0].html, notices::CHAT_RESET);
    });
}

#[tokio::test]
async fn test_clear_history_rejected() {
    // Arrange
    let (controller, api, _store) = setup();
    controller.send_message("hello").await;
    api.on_clear(Ok(AckResponse { ok: false, error: Some("Not signed in".to_string()) }));

    // Act
    let cleared = controller.clear_history().await;

    // Assert
    assert!(!cleared);
    controller.with_state(|s| {
        assert_eq!(s.conversation.len(), 2);
        assert_eq!(s.transcript.last().unwrap().html, "Not signed in");
    });
}

#[tokio::test]
async fn test_clear_history_empty_error_uses_fallback() {
    let (controller, api, _store) = setup();
    api.on_clear(Ok(AckResponse { ok: false, error: Some(String::new()) }));

    assert!(!controller.clear_history().await);

    controller.with_state(|s| assert_eq!(s.transcript[0].html, notices::CLEAR_REJECTED));
}

#[tokio::test]
async fn test_clear_history_network_failure() {
    let (controller, api, _store) = setup();
    api.on_clear(Err(ApiError::Network("offline".to_string())));

    assert!(!controller.clear_history().await);

    controller.with_state(|s| assert_eq!(s.transcript[0].html, notices::CLEAR_FAILED));
}

#[tokio::test]
async fn test_delete_account_redirects_to_login() {
    let (controller, api, _store) = setup();
    api.on_delete(Ok(AckResponse { ok: true, error: None }));

    assert_eq!(controller.delete_account().await, Some(LOGIN_PATH));
}

#[tokio::test]
async fn test_delete_account_rejected() {
    // Arrange
    let (controller, api, _store) = setup();
    api.on_delete(Ok(AckResponse::default()));

    // Act
    let target = controller.delete_account().await;

    // Assert
    assert_eq!(target, None);
    controller.with_state(|s| assert_eq!(s.transcript[0].html, notices::CLOSE_REJECTED));
}

#[tokio::test]
async fn test_delete_account_empty_error_uses_fallback() {
    let (controller, api, _store) = setup();
    api.on_delete(Ok(AckResponse { ok: false, error: Some(String::new()) }));

    assert_eq!(controller.delete_account().await, None);

    controller.with_state(|s| assert_eq!(s.transcript[0].html, notices::CLOSE_REJECTED));
}

#[tokio::test]
async fn test_delete_account_network_failure() {
    let (controller, api, _store) = setup();
    api.on_delete(Err(ApiError::Status(502)));

    assert_eq!(controller.delete_account().await, None);

    controller.with_state(|s| assert_eq!(s.transcript[0].html, notices::CLOSE_FAILED));
}
