use threadbox_core::comment::{add_comment, add_reply, get_replies};
use threadbox_utils::errors::AppError;

// Validation failures are reported before any request leaves the client, so
// these paths are exercised without a backend.

#[tokio::test]
async fn test_add_comment_requires_valid_analysis_id() {
    assert_eq!(
        add_comment(0, "body").await,
        Err(AppError::new("Invalid analysis id.")),
    );
    assert_eq!(
        add_comment(-3, "body").await,
        Err(AppError::new("Invalid analysis id.")),
    );
}

#[tokio::test]
async fn test_add_comment_requires_body() {
    assert_eq!(
        add_comment(1, "").await,
        Err(AppError::new("Cannot create an empty comment.")),
    );
}

#[tokio::test]
async fn test_add_reply_requires_valid_comment_id() {
    assert_eq!(
        add_reply(0, "body").await,
        Err(AppError::new("Invalid comment id.")),
    );
}

#[tokio::test]
async fn test_add_reply_requires_body() {
    assert_eq!(
        add_reply(1, "").await,
        Err(AppError::new("Cannot create an empty comment.")),
    );
}

#[tokio::test]
async fn test_get_replies_requires_valid_comment_id() {
    assert_eq!(
        get_replies(0).await,
        Err(AppError::new("Invalid comment id.")),
    );
}
