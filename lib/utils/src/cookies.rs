use leptos::prelude::document;
use leptos::wasm_bindgen::JsCast;
use percent_encoding::percent_decode_str;

/// # Returns the value of the cookie `name` within a `;`-separated cookie string
///
/// Pairs are trimmed before the name prefix is compared; only the value
/// component is percent-decoded. The first matching pair wins.
///
/// ```
/// use threadbox_utils::cookies::find_cookie_value;
///
/// assert_eq!(find_cookie_value("a=1; csrftoken=XYZ; b=2", "csrftoken"), Some(String::from("XYZ")));
/// assert_eq!(find_cookie_value("a=1; b=2", "csrftoken"), None);
/// assert_eq!(find_cookie_value("", "csrftoken"), None);
/// ```
pub fn find_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
    for pair in cookie_str.split(';') {
        let value = pair
            .trim()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = value {
            return percent_decode_str(value)
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned());
        }
    }
    None
}

/// Reads the cookie `name` from the current document
pub fn get_cookie(name: &str) -> Option<String> {
    let cookie_str = document()
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    find_cookie_value(&cookie_str, name)
}

#[cfg(test)]
mod tests {
    use crate::constants::CSRF_COOKIE_NAME;
    use crate::cookies::find_cookie_value;

    #[test]
    fn test_find_cookie_value() {
        assert_eq!(
            find_cookie_value("a=1; csrftoken=XYZ; b=2", CSRF_COOKIE_NAME),
            Some(String::from("XYZ")),
        );
        assert_eq!(find_cookie_value("a=1; b=2", CSRF_COOKIE_NAME), None);
        assert_eq!(find_cookie_value("", CSRF_COOKIE_NAME), None);
    }

    #[test]
    fn test_find_cookie_value_trims_pairs() {
        assert_eq!(
            find_cookie_value("a=1;   csrftoken=XYZ  ; b=2", CSRF_COOKIE_NAME),
            Some(String::from("XYZ")),
        );
    }

    #[test]
    fn test_find_cookie_value_decodes_value_only() {
        assert_eq!(
            find_cookie_value("csrftoken=a%20token%3D1", CSRF_COOKIE_NAME),
            Some(String::from("a token=1")),
        );
    }

    #[test]
    fn test_find_cookie_value_first_match_wins() {
        assert_eq!(
            find_cookie_value("csrftoken=first; csrftoken=second", CSRF_COOKIE_NAME),
            Some(String::from("first")),
        );
    }

    #[test]
    fn test_find_cookie_value_requires_full_name() {
        assert_eq!(find_cookie_value("csrftoken2=XYZ", CSRF_COOKIE_NAME), None);
        assert_eq!(find_cookie_value("token=XYZ", CSRF_COOKIE_NAME), None);
    }
}
