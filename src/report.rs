// src/report.rs
//! Human-readable diagnostic output for the command line.
use itertools::Itertools;
use owo_colors::{OwoColorize, Style};
use pagedoc_diagnostics::{Diagnostic, Diagnostics, Severity};

pub const ERROR_COLOR: Style = Style::new().red().bold();
pub const WARNING_COLOR: Style = Style::new().yellow().bold();
pub const INFO_COLOR: Style = Style::new().blue();
pub const LOCATION_COLOR: Style = Style::new().dimmed();

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => ERROR_COLOR,
        Severity::Warning => WARNING_COLOR,
        Severity::Info => INFO_COLOR,
    }
}

/// Formats one diagnostic as
///
/// ```text
/// error[UnresolvedReference]: 'Abc' has no key 'x'
///   --> SignIn /0/2 (label), key 'text'
/// ```
pub fn format_diagnostic(diagnostic: &Diagnostic, use_colors: bool) -> String {
    let prefix = format!("{}[{}]", diagnostic.severity, diagnostic.code);
    let mut location = format!("  --> {} {}", diagnostic.page, diagnostic.node);
    if let Some(key) = &diagnostic.key {
        location.push_str(&format!(", key '{}'", key));
    }

    if use_colors {
        let style = severity_style(diagnostic.severity);
        format!(
            "{}: {}\n{}",
            prefix.style(style),
            diagnostic.message.bold(),
            location.style(LOCATION_COLOR)
        )
    } else {
        format!("{}: {}\n{}", prefix, diagnostic.message, location)
    }
}

/// All diagnostics in the order they were found, followed by a count line.
pub fn format_diagnostics(diagnostics: &Diagnostics, use_colors: bool) -> String {
    let body = diagnostics
        .iter()
        .rev()
        .map(|d| format_diagnostic(d, use_colors))
        .join("\n");
    let summary = summary_line(diagnostics);
    if body.is_empty() {
        summary
    } else {
        format!("{}\n\n{}", body, summary)
    }
}

/// E.g. `2 errors, 1 warning`.
pub fn summary_line(diagnostics: &Diagnostics) -> String {
    [Severity::Error, Severity::Warning, Severity::Info]
        .into_iter()
        .map(|severity| (severity, diagnostics.count(severity)))
        .filter(|(_, count)| *count > 0)
        .map(|(severity, count)| {
            let plural = if count == 1 { "" } else { "s" };
            format!("{} {}{}", count, severity, plural)
        })
        .pad_using(1, |_| "no diagnostics".to_string())
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedoc_diagnostics::DiagnosticCode;
    use pagedoc_types::NodeLocation;

    fn diagnostics() -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add(
            Diagnostic::new(
                DiagnosticCode::UnresolvedReference,
                Severity::Error,
                "'Abc' has no key 'x'",
                NodeLocation::new(vec![0, 2], "label"),
                "SignIn",
            )
            .with_key("text"),
        );
        diagnostics.add(Diagnostic::new(
            DiagnosticCode::MalformedColorValue,
            Severity::Warning,
            "'0x12' is not 0x followed by 8 hex digits",
            NodeLocation::new(vec![1], "view"),
            "SignIn",
        ));
        diagnostics
    }

    #[test]
    fn test_plain_format() {
        let diagnostics = diagnostics();
        let first = diagnostics.iter().last().unwrap();
        assert_eq!(
            format_diagnostic(first, false),
            "error[UnresolvedReference]: 'Abc' has no key 'x'\n  --> SignIn /0/2 (label), key 'text'"
        );
    }

    #[test]
    fn test_report_lists_in_found_order() {
        let report = format_diagnostics(&diagnostics(), false);
        let error_at = report.find("error[").unwrap();
        let warning_at = report.find("warning[").unwrap();
        assert!(error_at < warning_at);
        assert!(report.ends_with("1 error, 1 warning"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(format_diagnostics(&Diagnostics::new(), false), "no diagnostics");
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let diagnostics = diagnostics();
        let first = diagnostics.iter().next().unwrap();
        assert!(format_diagnostic(first, true).contains('\u{1b}'));
    }
}
