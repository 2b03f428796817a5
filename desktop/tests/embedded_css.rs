#![cfg(test)]
//! Ensures the embedded desktop CSS (shared unified theme) remains present & non‑trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css`; a broken path or truncated
//! file would otherwise only show up as an unstyled window at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "body {",
        ".button--primary",
        ".modal-overlay",
        "@keyframes scaleUp",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_css_styles_collapsible_menu() {
    for token in [".hamburger", ".navbar__links--open", "@media (max-width: 720px)"] {
        assert!(
            NAVBAR_CSS.contains(token),
            "Expected token `{token}` missing from navbar CSS"
        );
    }
}
