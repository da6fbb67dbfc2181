// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_token::{TokenKind, TokenPos};

/// A maximal group of consecutive same-kind tokens. `pos` is the
/// position of the first token in the group; it is what diagnostics
/// cite when the group cannot be translated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Run {
    pub kind: TokenKind,
    pub count: usize,
    pub pos: TokenPos,
}

impl Run {
    pub fn new(kind: TokenKind, count: usize, pos: TokenPos) -> Run {
        Run { kind, count, pos }
    }
}
