//! Link target checks for backend-supplied URLs.
//!
//! Retailer URLs and Markdown link/image destinations come from the backend
//! and end up in `href`/`src`. Only web and mail schemes (or scheme-less
//! relative paths) are allowed through; anything else becomes `#`.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

/// Replacement for a rejected link target.
pub const BLOCKED_HREF: &str = "#";

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` is safe to place in an `href` or `src` attribute.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme
/// (`java\tscript:`), so those are skipped before the scheme is read.
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control()).collect();
    match scheme(&cleaned) {
        Some(scheme) => ALLOWED_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed)),
        None => true,
    }
}

/// `url` if it passes [`is_safe_url`], otherwise [`BLOCKED_HREF`].
pub fn safe_href(url: &str) -> &str {
    if is_safe_url(url) { url } else { BLOCKED_HREF }
}

/// The scheme of an absolute URL, or `None` for a relative reference.
fn scheme(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    if !url[end..].starts_with(':') {
        return None;
    }
    Some(&url[..end])
}
