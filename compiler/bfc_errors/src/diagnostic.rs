// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_token::TokenPos;

use crate::code::ErrCode;
use crate::terminal::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Help,
}

impl Severity {
    fn color(self) -> &'static str {
        match self {
            Severity::Error => ANSI_COLOR_RED,
            Severity::Warning => ANSI_COLOR_YELLOW,
            Severity::Help => ANSI_COLOR_CYAN,
        }
    }
}

/// A single reportable message. `pos` is absent for diagnostics that
/// have no source location (configuration notices, tool failures).
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code:       Option<ErrCode>,
    pub severity:   Severity,
    pub pos:        Option<TokenPos>,
    pub message:    String,
    pub notes:      Vec<String>,
}

impl Diagnostic {
    pub fn notice(code: ErrCode, msg: &str) -> Self {
        Self {
            code: Some(code),
            severity: Severity::Help,
            pos: None,
            message: msg.to_string(),
            notes: vec![],
        }
    }

    pub fn warning(msg: &str) -> Self {
        Self {
            code: None,
            severity: Severity::Warning,
            pos: None,
            message: msg.to_string(),
            notes: vec![],
        }
    }

    /// Render this diagnostic to stderr. `file_name` and `source` give
    /// the context for the caret display; they are ignored when the
    /// diagnostic carries no source position.
    pub fn report(&self, file_name: &str, source: &str) {
        eprintln!(
            "{}{:?}{}: {}",
            self.severity.color(),
            self.severity,
            ANSI_COLOR_RESET,
            self.message
        );

        if let Some(pos) = self.pos {
            eprintln!(" --> {}:{}:{}", file_name, pos.line, pos.column);
            eprintln!("  |");

            let source_line = source.lines().nth(pos.line - 1).unwrap_or("");
            eprintln!("{: >4} | {}", pos.line, source_line);

            // caret under the offending column (1-based)
            let caret_line = " ".repeat(pos.column.saturating_sub(1)) + "^";
            eprintln!("     | {}", caret_line);
        }

        for note in &self.notes {
            eprintln!("     = note: {}", note);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn push(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| matches!(d.severity, Severity::Error))
    }

    pub fn report_all(&self, file_name: &str, source: &str) {
        for diag in &self.diagnostics {
            diag.report(file_name, source);
        }
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
