//! Diagnostic and error reporting for Prose.
//!
//! Both front-end phases report problems as [`Diagnostic`] values collected
//! in a [`DiagnosticLog`]; [`emit`] renders one with ariadne.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticLog, Label};

use ariadne::{ColorGenerator, Label as AriadneLabel, Report, ReportKind, Source};
use std::io;

/// Render a diagnostic to stderr.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start.0 as usize)
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    if diagnostic.labels.is_empty() {
        let message = diagnostic
            .code
            .map(|code| code.description())
            .unwrap_or("here");
        report = report.with_label(
            AriadneLabel::new((filename, diagnostic.span.range()))
                .with_message(message)
                .with_color(colors.next()),
        );
    }

    for label in &diagnostic.labels {
        let color = colors.next();
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(color);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .eprint((filename, Source::from(source)))
}
