use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use web_sys::RequestCache;

use threadbox_utils::constants::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
use threadbox_utils::cookies::get_cookie;
use threadbox_utils::errors::AppError;
use threadbox_utils::routes::is_same_origin;

/// Configuration for a single API request. Responses are always decoded as
/// JSON and caching is disabled unless overridden.
#[derive(Clone, Debug)]
pub struct RequestParams {
    pub url: String,
    pub method: Method,
    pub cache: RequestCache,
    pub body: Option<serde_json::Value>,
}

impl Default for RequestParams {
    fn default() -> Self {
        RequestParams {
            url: String::new(),
            method: Method::GET,
            cache: RequestCache::NoStore,
            body: None,
        }
    }
}

impl RequestParams {
    pub fn get(url: String) -> Self {
        RequestParams {
            url,
            ..Default::default()
        }
    }

    pub fn post(url: String, body: serde_json::Value) -> Self {
        RequestParams {
            url,
            method: Method::POST,
            body: Some(body),
            ..Default::default()
        }
    }
}

/// # Returns whether the HTTP method needs no CSRF protection
///
/// ```
/// use gloo_net::http::Method;
/// use threadbox_core::request::is_csrf_safe_method;
///
/// assert!(is_csrf_safe_method(&Method::GET));
/// assert!(!is_csrf_safe_method(&Method::POST));
/// ```
pub fn is_csrf_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Sends an API request described by `params` and decodes the JSON response.
///
/// Fails with [`AppError::InvalidRequest`] before any network I/O when the
/// url is missing. Unsafe-method requests to the page's own origin carry the
/// anti-forgery token from the `csrftoken` cookie; cross-origin destinations
/// are exempt, as the issuing server expects.
pub async fn send_request<T: DeserializeOwned>(params: RequestParams) -> Result<T, AppError> {
    if params.url.is_empty() {
        return Err(AppError::new("Missing request url."));
    }

    let mut builder = RequestBuilder::new(&params.url)
        .method(params.method.clone())
        .cache(params.cache);

    if !is_csrf_safe_method(&params.method) && is_same_origin(&params.url)? {
        if let Some(csrftoken) = get_cookie(CSRF_COOKIE_NAME) {
            builder = builder.header(CSRF_HEADER_NAME, &csrftoken);
        }
    }

    let request = match &params.body {
        Some(body) => builder.json(body)?,
        None => builder.build()?,
    };

    log::debug!("Sending {:?} request to {}", params.method, params.url);
    let response = request.send().await?;
    if !response.ok() {
        return Err(AppError::ApiError(response.status()));
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use gloo_net::http::Method;

    use crate::request::is_csrf_safe_method;

    #[test]
    fn test_is_csrf_safe_method() {
        assert!(is_csrf_safe_method(&Method::GET));
        assert!(is_csrf_safe_method(&Method::HEAD));
        assert!(is_csrf_safe_method(&Method::OPTIONS));
        assert!(is_csrf_safe_method(&Method::TRACE));
        assert!(!is_csrf_safe_method(&Method::POST));
        assert!(!is_csrf_safe_method(&Method::PUT));
        assert!(!is_csrf_safe_method(&Method::PATCH));
        assert!(!is_csrf_safe_method(&Method::DELETE));
    }
}
