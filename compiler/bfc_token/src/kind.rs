// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// The eight instruction symbols of the source language. The symbol
/// set is closed; everything the scanner accepts beyond these is
/// whitespace or a `#` line comment.
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// '+' increment the current cell
    T_PLUS,

    /// '-' decrement the current cell
    T_MINUS,

    /// '>' move the data pointer right
    T_GTHAN,

    /// '<' move the data pointer left
    T_LTHAN,

    /// ',' read one byte into the current cell
    T_COMMA,

    /// '.' write the current cell as one byte
    T_DOT,

    /// '[' loop entry
    T_LBRACKET,

    /// ']' loop exit
    T_RBRACKET,
}

impl TokenKind {
    pub fn symbol(self) -> char {
        match self {
            TokenKind::T_PLUS => '+',
            TokenKind::T_MINUS => '-',
            TokenKind::T_GTHAN => '>',
            TokenKind::T_LTHAN => '<',
            TokenKind::T_COMMA => ',',
            TokenKind::T_DOT => '.',
            TokenKind::T_LBRACKET => '[',
            TokenKind::T_RBRACKET => ']',
        }
    }
}
