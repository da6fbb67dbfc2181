// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_errors::CompileError;
use bfc_token::TokenPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopLabel {
    pub id: usize,
    pub pos: TokenPos,
}

/// Hands out loop label identifiers and matches closes to opens.
/// Identifiers start at 0, grow in source order of the opening
/// bracket, and are never reused. Stack depth equals the current loop
/// nesting depth; there is no fixed bound on it.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    next_label: usize,
    stack: Vec<LoopLabel>,
}

impl LabelAllocator {
    pub fn open(&mut self, pos: TokenPos) -> usize {
        let id = self.next_label;
        self.next_label += 1;
        self.stack.push(LoopLabel { id, pos });
        id
    }

    pub fn close(&mut self, pos: TokenPos) -> Result<usize, CompileError> {
        match self.stack.pop() {
            Some(label) => Ok(label.id),
            None => Err(CompileError::UnmatchedLoopClose { pos }),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// End-of-input check. Any loop still open is fatal; the
    /// diagnostic cites the outermost one, not the most recent.
    pub fn finish(&self) -> Result<(), CompileError> {
        match self.stack.first() {
            Some(outermost) => Err(CompileError::UnclosedLoop { pos: outermost.pos }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize, column: usize) -> TokenPos {
        TokenPos { line, column }
    }

    #[test]
    fn test_ids_increase_in_open_order() {
        let mut labels = LabelAllocator::default();
        assert_eq!(labels.open(at(1, 1)), 0);
        assert_eq!(labels.open(at(1, 2)), 1);
        assert_eq!(labels.open(at(1, 3)), 2);
        assert_eq!(labels.depth(), 3);
    }

    #[test]
    fn test_close_pairs_with_innermost_open() {
        let mut labels = LabelAllocator::default();
        labels.open(at(1, 1));
        labels.open(at(1, 2));
        assert_eq!(labels.close(at(1, 3)).unwrap(), 1);
        assert_eq!(labels.close(at(1, 4)).unwrap(), 0);
        assert!(labels.finish().is_ok());
    }

    #[test]
    fn test_ids_are_never_reused_after_close() {
        let mut labels = LabelAllocator::default();
        labels.open(at(1, 1));
        labels.close(at(1, 2)).unwrap();
        assert_eq!(labels.open(at(1, 3)), 1);
    }

    #[test]
    fn test_pop_on_empty_is_an_error() {
        let mut labels = LabelAllocator::default();
        let err = labels.close(at(1, 1)).unwrap_err();
        match err {
            CompileError::UnmatchedLoopClose { pos } => assert_eq!(pos, at(1, 1)),
            other => panic!("expected UnmatchedLoopClose, got {:?}", other),
        }
    }

    #[test]
    fn test_finish_reports_outermost_open_loop() {
        let mut labels = LabelAllocator::default();
        labels.open(at(1, 1));
        labels.open(at(2, 5));
        let err = labels.finish().unwrap_err();
        match err {
            CompileError::UnclosedLoop { pos } => assert_eq!(pos, at(1, 1)),
            other => panic!("expected UnclosedLoop, got {:?}", other),
        }
    }

    #[test]
    fn test_reopened_outermost_loop_is_reported() {
        // "[][": the still-open loop is the second one
        let mut labels = LabelAllocator::default();
        labels.open(at(1, 1));
        labels.close(at(1, 2)).unwrap();
        labels.open(at(1, 3));
        let err = labels.finish().unwrap_err();
        match err {
            CompileError::UnclosedLoop { pos } => assert_eq!(pos, at(1, 3)),
            other => panic!("expected UnclosedLoop, got {:?}", other),
        }
    }
}
