//! Username resolution from a path-like locator.
//!
//! The original surface treated the first path segment of the page address
//! as the username. The CLI accepts the same shapes: a bare username, an
//! absolute path (`/u1i/anything`), or a full URL.

/// Extract the username from a locator string.
///
/// Returns `None` when no non-empty path segment exists.
///
/// ```
/// use reposcope_core::locator::username_from_path;
///
/// assert_eq!(username_from_path("/u1i/repos"), Some("u1i".to_string()));
/// assert_eq!(username_from_path("u1i"), Some("u1i".to_string()));
/// assert_eq!(username_from_path("https://ghb.example.com/u1i"), Some("u1i".to_string()));
/// assert_eq!(username_from_path("/"), None);
/// ```
pub fn username_from_path(input: &str) -> Option<String> {
    let input = input.trim();

    // Strip scheme and host when given a full URL
    let path = match input.split_once("://") {
        Some((_, rest)) => match rest.split_once('/') {
            Some((_, path)) => path,
            None => return None, // URL with no path at all
        },
        None => input,
    };

    path.split('/')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_username() {
        assert_eq!(username_from_path("u1i"), Some("u1i".to_string()));
    }

    #[test]
    fn test_first_segment_of_path() {
        assert_eq!(username_from_path("/u1i"), Some("u1i".to_string()));
        assert_eq!(username_from_path("/u1i/ignored/rest"), Some("u1i".to_string()));
    }

    #[test]
    fn test_full_url() {
        assert_eq!(
            username_from_path("https://ghb.example.com/u1i/whatever"),
            Some("u1i".to_string())
        );
        assert_eq!(username_from_path("https://ghb.example.com"), None);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(username_from_path(""), None);
        assert_eq!(username_from_path("/"), None);
        assert_eq!(username_from_path("   "), None);
        assert_eq!(username_from_path("//"), None);
    }
}
