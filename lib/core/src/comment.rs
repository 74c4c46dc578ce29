use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use threadbox_utils::errors::AppError;
use threadbox_utils::routes::{get_analysis_comments_path, get_comment_replies_path};

use crate::request::{send_request, RequestParams};

/// A comment as serialized by the backend. Replies share the same shape;
/// `replies` carries the ids of a comment's replies, the full objects are
/// fetched on demand through [`get_replies`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub parent: Option<i64>,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub body: String,
    #[serde(default)]
    pub replies: Vec<i64>,
}

impl Comment {
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }
}

/// Creates a comment under the analysis `analysis_id` and returns it.
pub async fn add_comment(analysis_id: i64, body: &str) -> Result<Comment, AppError> {
    if analysis_id < 1 {
        return Err(AppError::new("Invalid analysis id."));
    }
    if body.is_empty() {
        return Err(AppError::new("Cannot create an empty comment."));
    }
    log::trace!("Create comment for analysis {analysis_id}");
    send_request(RequestParams::post(
        get_analysis_comments_path(analysis_id),
        json!({ "body": body }),
    ))
    .await
}

/// Creates a reply under the comment `comment_id` and returns it.
pub async fn add_reply(comment_id: i64, body: &str) -> Result<Comment, AppError> {
    if comment_id < 1 {
        return Err(AppError::new("Invalid comment id."));
    }
    if body.is_empty() {
        return Err(AppError::new("Cannot create an empty comment."));
    }
    log::trace!("Create reply for comment {comment_id}");
    send_request(RequestParams::post(
        get_comment_replies_path(comment_id),
        json!({ "body": body }),
    ))
    .await
}

/// Fetches the replies of the comment `comment_id`, in backend order.
pub async fn get_replies(comment_id: i64) -> Result<Vec<Comment>, AppError> {
    if comment_id < 1 {
        return Err(AppError::new("Invalid comment id."));
    }
    log::trace!("Fetch replies of comment {comment_id}");
    send_request(RequestParams::get(get_comment_replies_path(comment_id))).await
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::comment::Comment;

    #[test]
    fn test_comment_from_backend_json() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": 7,
                "page": 3,
                "parent": null,
                "author": "fly",
                "timestamp": "2017-03-06T22:53:07Z",
                "body": "What brings the future?",
                "replies": [8, 11]
            }"#,
        )
        .expect("Comment should deserialize from backend payload");

        assert_eq!(comment.id, 7);
        assert_eq!(comment.page, Some(3));
        assert_eq!(comment.parent, None);
        assert_eq!(comment.author, "fly");
        assert_eq!(comment.timestamp, Utc.with_ymd_and_hms(2017, 3, 6, 22, 53, 7).unwrap());
        assert_eq!(comment.body, "What brings the future?");
        assert_eq!(comment.replies, vec![8, 11]);
        assert_eq!(comment.reply_count(), 2);
        assert!(comment.has_replies());
    }

    #[test]
    fn test_comment_without_replies() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": 8,
                "page": null,
                "parent": 7,
                "author": "spider",
                "timestamp": "2017-03-07T08:12:00Z",
                "body": "A reply.",
                "replies": []
            }"#,
        )
        .expect("Reply should deserialize from backend payload");

        assert_eq!(comment.parent, Some(7));
        assert_eq!(comment.reply_count(), 0);
        assert!(!comment.has_replies());
    }
}
