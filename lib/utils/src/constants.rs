pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";


pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";


pub const GUEST_NOTICE: &str = "Only authenticated users can leave comments.";
pub const COMMENT_PLACEHOLDER: &str = "Enter your comment.";
pub const EMPTY_COMMENT_WARNING: &str = "Please enter your comment first.";
pub const COMMENT_SENT_MESSAGE: &str = "Comment sent.";


pub const MAX_COMMENT_LENGTH: usize = 20000;
