use threadbox_core::request::{send_request, RequestParams};
use threadbox_utils::errors::AppError;

#[tokio::test]
async fn test_send_request_without_url() {
    let result = send_request::<serde_json::Value>(RequestParams::default()).await;
    assert_eq!(result, Err(AppError::new("Missing request url.")));

    let result = send_request::<serde_json::Value>(RequestParams::get(String::new())).await;
    assert_eq!(result, Err(AppError::new("Missing request url.")));
}
