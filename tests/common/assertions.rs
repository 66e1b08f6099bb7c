/// Assert that a resolution recorded a diagnostic matching a code name or message substring.
#[macro_export]
macro_rules! assert_diagnostic {
    ($resolution:expr, $needle:expr) => {
        assert!(
            $resolution.diagnostics.find($needle),
            "expected a diagnostic matching {:?}, got:\n{}",
            $needle,
            pagedoc::report::format_diagnostics(&$resolution.diagnostics, false)
        );
    };
}

/// Assert that a resolution recorded no diagnostics at all.
#[macro_export]
macro_rules! assert_no_diagnostics {
    ($resolution:expr) => {
        assert!(
            $resolution.diagnostics.is_empty(),
            "expected no diagnostics, got:\n{}",
            pagedoc::report::format_diagnostics(&$resolution.diagnostics, false)
        );
    };
}
