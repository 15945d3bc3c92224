//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::descriptor::RuleDescriptor;
use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;

    /// Renders every diagnostic in order, concatenated.
    fn render_all(&self, diags: &[Diagnostic]) -> String {
        diags.iter().map(|d| self.render(d)).collect()
    }
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// info[XIA1002]: 'UIStackView' is only available on iOS 9.0 or newer
///   --> App/ViewController.cs:12:9
///    = note: deployment target is iOS 8.0
///    = help: see https://github.com/xamarin/CodeAnalysis/blob/master/docs/XIA1002.md
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in the header.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let tag = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return tag;
        }
        let ansi = match diag.severity {
            crate::Severity::Error => "31",
            crate::Severity::Warning => "33",
            crate::Severity::Info => "36",
            crate::Severity::Hidden => "2",
        };
        format!("\x1b[1;{ansi}m{tag}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}: {}\n", self.header(diag), diag.message));

        if let Some(location) = &diag.location {
            out.push_str(&format!("  --> {location}\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Renders each diagnostic as one line of JSON.
///
/// Diagnostics carrying one of the availability rule codes also report the
/// rule's name and title; other codes leave both `null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let code = diag.code.to_string();
        let rule = RuleDescriptor::lookup(&code);
        let value = serde_json::json!({
            "severity": diag.severity,
            "code": code,
            "rule": rule.map(|r| r.name),
            "title": rule.map(|r| r.title),
            "message": diag.message,
            "location": diag.location.as_ref().map(|l| serde_json::json!({
                "path": l.path.display().to_string(),
                "line": l.line,
                "column": l.column,
            })),
            "notes": diag.notes,
            "help": diag.help,
        });
        format!("{value}\n")
    }
}
