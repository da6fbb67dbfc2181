// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_token::Token;

use crate::run::Run;

/// Groups a token sequence into maximal same-kind runs. This is a pure
/// grouping transform over all eight kinds, brackets included; bracket
/// matching happens later, one push or pop per unit of count.
pub struct RunCoalescer;

impl RunCoalescer {
    pub fn coalesce(tokens: &[Token]) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();
        for token in tokens {
            match runs.last_mut() {
                Some(run) if run.kind == token.kind => run.count += 1,
                _ => runs.push(Run::new(token.kind, 1, token.pos)),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfc_token::{TokenKind, TokenPos};
    use itertools::Itertools;

    fn tokens_of(symbols: &[(TokenKind, usize, usize)]) -> Vec<Token> {
        symbols
            .iter()
            .map(|(kind, line, column)| {
                Token::new(*kind, TokenPos { line: *line, column: *column })
            })
            .collect()
    }

    #[test]
    fn test_consecutive_tokens_merge() {
        let tokens = tokens_of(&[
            (TokenKind::T_PLUS, 1, 1),
            (TokenKind::T_PLUS, 1, 2),
            (TokenKind::T_PLUS, 1, 3),
        ]);
        let runs = RunCoalescer::coalesce(&tokens);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].kind, TokenKind::T_PLUS);
        assert_eq!(runs[0].count, 3);
        assert_eq!(runs[0].pos, TokenPos { line: 1, column: 1 });
    }

    #[test]
    fn test_adjacent_runs_never_share_a_kind() {
        let tokens = tokens_of(&[
            (TokenKind::T_PLUS, 1, 1),
            (TokenKind::T_PLUS, 1, 2),
            (TokenKind::T_GTHAN, 1, 3),
            (TokenKind::T_PLUS, 1, 4),
            (TokenKind::T_MINUS, 1, 5),
            (TokenKind::T_MINUS, 1, 6),
        ]);
        let runs = RunCoalescer::coalesce(&tokens);
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().tuple_windows().all(|(a, b)| a.kind != b.kind));
    }

    #[test]
    fn test_counts_are_conserved() {
        let tokens = tokens_of(&[
            (TokenKind::T_LBRACKET, 1, 1),
            (TokenKind::T_LBRACKET, 1, 2),
            (TokenKind::T_PLUS, 1, 3),
            (TokenKind::T_RBRACKET, 1, 4),
            (TokenKind::T_RBRACKET, 1, 5),
        ]);
        let runs = RunCoalescer::coalesce(&tokens);
        let total: usize = runs.iter().map(|r| r.count).sum();
        assert_eq!(total, tokens.len());
    }

    #[test]
    fn test_brackets_coalesce_like_any_other_kind() {
        let tokens = tokens_of(&[
            (TokenKind::T_LBRACKET, 1, 1),
            (TokenKind::T_LBRACKET, 1, 2),
            (TokenKind::T_LBRACKET, 1, 3),
        ]);
        let runs = RunCoalescer::coalesce(&tokens);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].count, 3);
    }

    #[test]
    fn test_runs_merge_across_source_lines() {
        let tokens = tokens_of(&[
            (TokenKind::T_DOT, 1, 4),
            (TokenKind::T_DOT, 2, 1),
        ]);
        let runs = RunCoalescer::coalesce(&tokens);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].count, 2);
        // position of the run is its first token's position
        assert_eq!(runs[0].pos, TokenPos { line: 1, column: 4 });
    }

    #[test]
    fn test_empty_input() {
        let runs = RunCoalescer::coalesce(&[]);
        assert!(runs.is_empty());
    }
}
