//! Assertion macros for generated markup.

/// Assert that the generated markup contains specific text.
#[macro_export]
macro_rules! assert_markup_contains {
    ($html:expr, $text:expr) => {
        assert!(
            $html.markup.contains($text),
            "Markup should contain '{}', but it was:\n{}",
            $text,
            $html.markup
        );
    };
}

/// Assert that the generated markup does NOT contain specific text.
#[macro_export]
macro_rules! assert_markup_not_contains {
    ($html:expr, $text:expr) => {
        assert!(
            !$html.markup.contains($text),
            "Markup should NOT contain '{}', but it was found in:\n{}",
            $text,
            $html.markup
        );
    };
}

/// Assert the number of pages in the generated document.
#[macro_export]
macro_rules! assert_page_count {
    ($html:expr, $count:expr) => {
        assert_eq!(
            $html.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $html.page_count()
        );
    };
}
