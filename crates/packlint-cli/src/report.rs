//! Terminal rendering of a validation run.

use std::time::Duration;

use colored::*;
use packlint_core::{Diagnostic, Location, ResourcePack, Severity};

/// One summary line, then diagnostics grouped Info, Warn, Error.
pub fn print_report(pack: &ResourcePack, elapsed: Duration) {
    let errors = pack.sink().count(Severity::Error);
    let warnings = pack.sink().count(Severity::Warn);

    let verdict = if pack.passed() {
        "passed".green().bold()
    } else {
        "failed".red().bold()
    };

    println!(
        "{} {}: {} {}, {} {} ({:.1?})",
        pack.display_name().cyan().bold(),
        verdict,
        errors,
        if errors == 1 { "error" } else { "errors" },
        warnings,
        if warnings == 1 { "warning" } else { "warnings" },
        elapsed
    );

    for severity in [Severity::Info, Severity::Warn, Severity::Error] {
        for diag in pack
            .diagnostics()
            .iter()
            .filter(|d| d.effective_severity() == severity)
        {
            println!("{}", render_line(diag));
        }
    }
}

fn render_line(diag: &Diagnostic) -> String {
    let severity = match diag.effective_severity() {
        Severity::Info => "info".blue().bold(),
        Severity::Warn => "warn".yellow().bold(),
        Severity::Error => "error".red().bold(),
    };

    let prefix = match (&diag.file, diag.location) {
        (Some(file), Some(location)) => format!(
            "{}{} ",
            file.display().to_string().dimmed(),
            render_location(location).dimmed()
        ),
        (Some(file), None) => format!("{} ", file.display().to_string().dimmed()),
        _ => String::new(),
    };

    format!("{prefix}{severity} {}: {}", diag.code, diag.message)
}

fn render_location(location: Location) -> String {
    match (location.line, location.column) {
        (Some(line), Some(column)) => format!("({line},{column})"),
        (Some(line), None) => format!("({line})"),
        _ => String::new(),
    }
}
