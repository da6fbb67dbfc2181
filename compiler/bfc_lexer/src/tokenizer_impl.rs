// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::collections::HashMap;

use bfc_errors::CompileError;
use bfc_token::{Token, TokenKind, TokenPos};

extern crate lazy_static;
use lazy_static::lazy_static;

lazy_static! {
    static ref SYMBOLS: HashMap<char, TokenKind> = {
        let mut _syms: HashMap<char, TokenKind> = HashMap::new();
        _syms.insert('+', TokenKind::T_PLUS);
        _syms.insert('-', TokenKind::T_MINUS);
        _syms.insert('>', TokenKind::T_GTHAN);
        _syms.insert('<', TokenKind::T_LTHAN);
        _syms.insert(',', TokenKind::T_COMMA);
        _syms.insert('.', TokenKind::T_DOT);
        _syms.insert('[', TokenKind::T_LBRACKET);
        _syms.insert(']', TokenKind::T_RBRACKET);
        _syms
    };
}

/// Single-pass scanner over one source file. Tokens come out lazily
/// through the `Iterator` impl; the cursor never rewinds. Whitespace
/// and `#` line comments produce no token but keep the line/column
/// counters honest.
pub struct Tokenizer<'tcx> {
    line: usize,
    curr_char: char, // current char
    next_char_pos: usize, // position from the start
    col_counter: usize, // column counter
    source: &'tcx str,
}

impl<'tcx> Tokenizer<'tcx> {
    pub fn new(source: &'tcx str) -> Self {
        let mut tokenizer = Self {
            line: 1,
            curr_char: ' ', // space
            next_char_pos: 0,
            col_counter: 1,
            source,
        };
        tokenizer.advance_to_next_char_pos();
        tokenizer
    }

    /// Scan the whole source, aborting at the first invalid character.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompileError> {
        self.by_ref().collect()
    }

    fn next_token(&mut self) -> Option<Result<Token, CompileError>> {
        loop {
            let line: usize = self.line;
            let col: usize = self.col_counter - 1;
            match self.curr_char {
                '\0' => return None,
                '#' => self.advance_to_next_line(),
                ' ' | '\t' | '\r' | '\n' => self.advance_to_next_char_pos(),
                ch => {
                    let pos = TokenPos { line, column: col };
                    self.advance_to_next_char_pos();
                    return match SYMBOLS.get(&ch) {
                        Some(kind) => Some(Ok(Token::new(*kind, pos))),
                        None => Some(Err(CompileError::UnexpectedToken { ch, pos })),
                    };
                }
            }
        }
    }

    fn advance_to_next_char_pos(&mut self) {
        if self.next_char_pos < self.source.len() {
            self.curr_char = self.source.as_bytes()[self.next_char_pos] as char;
            if self.curr_char == '\n' {
                self.line += 1;
                self.col_counter = 0;
            }
            self.next_char_pos += 1;
            self.col_counter += 1;
        }
        else {
            self.curr_char = '\0';
        }
    }

    fn advance_to_next_line(&mut self) {
        while self.curr_char != '\n' && self.curr_char != '\0' {
            self.advance_to_next_char_pos();
        }
        if self.curr_char == '\n' {
            self.advance_to_next_char_pos();
        }
    }
}

impl<'tcx> Iterator for Tokenizer<'tcx> {
    type Item = Result<Token, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
