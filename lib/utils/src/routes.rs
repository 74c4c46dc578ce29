use const_format::concatcp;
use leptos::prelude::window;
use url::Url;

use crate::errors::AppError;

pub const API_PREFIX: &str = "/api";
pub const ANALYSES_ROUTE_PREFIX: &str = concatcp!(API_PREFIX, "/analyses");
pub const COMMENTS_ROUTE_PREFIX: &str = concatcp!(API_PREFIX, "/comments");
pub const COMMENTS_ROUTE_SUFFIX: &str = "/comments/";
pub const REPLIES_ROUTE_SUFFIX: &str = "/replies/";

/// # Returns the path to the comment collection of the analysis `analysis_id`
///
/// ```
/// use threadbox_utils::routes::get_analysis_comments_path;
///
/// assert_eq!(get_analysis_comments_path(1), "/api/analyses/1/comments/");
/// ```
pub fn get_analysis_comments_path(
    analysis_id: i64,
) -> String {
    format!("{ANALYSES_ROUTE_PREFIX}/{analysis_id}{COMMENTS_ROUTE_SUFFIX}")
}

/// # Returns the path to the reply collection of the comment `comment_id`
///
/// ```
/// use threadbox_utils::routes::get_comment_replies_path;
///
/// assert_eq!(get_comment_replies_path(2), "/api/comments/2/replies/");
/// ```
pub fn get_comment_replies_path(
    comment_id: i64,
) -> String {
    format!("{COMMENTS_ROUTE_PREFIX}/{comment_id}{REPLIES_ROUTE_SUFFIX}")
}

pub fn get_app_origin() -> Result<String, AppError> {
    window()
        .location()
        .origin()
        .map_err(|_| AppError::RequestFailed(String::from("Failed to get page origin")))
}

/// # Returns whether `url` targets the given `origin`
///
/// Relative URLs are same-origin by construction; absolute URLs are compared
/// by origin. Unparsable URLs are treated as foreign.
///
/// ```
/// use threadbox_utils::routes::is_same_origin_as;
///
/// assert!(is_same_origin_as("/api/comments/1/replies/", "http://localhost:3000"));
/// assert!(is_same_origin_as("http://localhost:3000/api/", "http://localhost:3000"));
/// assert!(!is_same_origin_as("http://other.example/api/", "http://localhost:3000"));
/// ```
pub fn is_same_origin_as(url: &str, origin: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.origin().ascii_serialization() == origin,
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Returns whether `url` targets the current page's origin
pub fn is_same_origin(url: &str) -> Result<bool, AppError> {
    Ok(is_same_origin_as(url, &get_app_origin()?))
}
