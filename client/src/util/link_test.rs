use super::*;

// =============================================================
// is_safe_url
// =============================================================

#[test]
fn web_and_mail_schemes_are_allowed() {
    assert!(is_safe_url("https://www.amazon.com/dp/B0C"));
    assert!(is_safe_url("http://example.com"));
    assert!(is_safe_url("HTTPS://EXAMPLE.COM"));
    assert!(is_safe_url("mailto:deals@example.com"));
}

#[test]
fn relative_references_are_allowed() {
    assert!(is_safe_url("/products/42"));
    assert!(is_safe_url("reviews?page=2"));
    assert!(is_safe_url("#specs"));
    assert!(is_safe_url("./a:b"));
}

#[test]
fn script_and_data_schemes_are_rejected() {
    assert!(!is_safe_url("javascript:alert(document.cookie)"));
    assert!(!is_safe_url("JavaScript:alert(1)"));
    assert!(!is_safe_url("data:text/html;base64,PHNjcmlwdD4="));
    assert!(!is_safe_url("vbscript:msgbox"));
}

#[test]
fn obfuscated_schemes_are_rejected() {
    assert!(!is_safe_url(" javascript:alert(1)"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url("java\nscript:alert(1)"));
}

// =============================================================
// safe_href
// =============================================================

#[test]
fn safe_href_passes_or_blocks() {
    assert_eq!(safe_href("https://target.example.com/p"), "https://target.example.com/p");
    assert_eq!(safe_href("javascript:void(0)"), BLOCKED_HREF);
}
