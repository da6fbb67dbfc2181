// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

use bfc_token::TokenPos;

use crate::code::ErrCode;
use crate::diagnostic::{Diagnostic, Severity};

/// Every way a single file's translation can fail. All variants abort
/// the current file immediately; no recovery is attempted past the
/// first error.
#[derive(Debug)]
pub enum CompileError {
    /// A character outside the symbol set, whitespace, and `#`.
    UnexpectedToken { ch: char, pos: TokenPos },

    /// A `]` with no `[` left on the label stack.
    UnmatchedLoopClose { pos: TokenPos },

    /// End of input with open loops; `pos` is the outermost one.
    UnclosedLoop { pos: TokenPos },

    /// Failure on the source stream or the output sink.
    Io(std::io::Error),

    /// The external assembler or linker did not succeed.
    ToolFailure { tool: &'static str, code: Option<i32> },
}

impl CompileError {
    pub fn code(&self) -> Option<ErrCode> {
        match self {
            CompileError::UnexpectedToken { .. } => Some(ErrCode::LEX1000),
            CompileError::UnmatchedLoopClose { .. } => Some(ErrCode::SYN2000),
            CompileError::UnclosedLoop { .. } => Some(ErrCode::SYN2001),
            CompileError::Io(_) => None,
            CompileError::ToolFailure { .. } => Some(ErrCode::EXT4000),
        }
    }

    pub fn pos(&self) -> Option<TokenPos> {
        match self {
            CompileError::UnexpectedToken { pos, .. }
            | CompileError::UnmatchedLoopClose { pos }
            | CompileError::UnclosedLoop { pos } => Some(*pos),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            code: self.code(),
            severity: Severity::Error,
            pos: self.pos(),
            message: self.to_string(),
            notes: vec![],
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnexpectedToken { ch, .. } => {
                write!(f, "unexpected token: '{}'", ch)
            }
            CompileError::UnmatchedLoopClose { .. } => {
                write!(f, "unmatched ']' without an open loop")
            }
            CompileError::UnclosedLoop { .. } => {
                write!(f, "unclosed bracket")
            }
            CompileError::Io(err) => write!(f, "{}", err),
            CompileError::ToolFailure { tool, code: Some(c) } => {
                write!(f, "{} exited with status {}", tool, c)
            }
            CompileError::ToolFailure { tool, code: None } => {
                write!(f, "{} was terminated by a signal", tool)
            }
        }
    }
}

impl From<std::io::Error> for CompileError {
    fn from(err: std::io::Error) -> Self {
        CompileError::Io(err)
    }
}
