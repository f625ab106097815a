// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Lexer unit tests.

use yare::parameterized;

use super::*;
use crate::token::TokenKind;

/// Tokenize and strip spans, for shape assertions.
fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::tokenize(input)
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn word(text: &str) -> TokenKind {
    TokenKind::Word(text.to_string())
}

#[test]
fn empty_input_yields_newline_immediately() {
    assert_eq!(kinds(""), vec![TokenKind::Newline]);
    assert_eq!(kinds("   \t  "), vec![TokenKind::Newline]);
}

#[test]
fn words_split_on_whitespace() {
    assert_eq!(
        kinds("echo hello world"),
        vec![
            word("echo"),
            word("hello"),
            word("world"),
            TokenKind::Newline
        ]
    );
}

#[parameterized(
    semi = { ";", TokenKind::Semi },
    and_if = { "&&", TokenKind::AndIf },
    or_if = { "||", TokenKind::OrIf },
    pipe = { "|", TokenKind::Pipe },
    lparen = { "(", TokenKind::LParen },
    rparen = { ")", TokenKind::RParen },
    less = { "<", TokenKind::Less },
    great = { ">", TokenKind::Great },
    dless = { "<<", TokenKind::DLess },
    dgreat = { ">>", TokenKind::DGreat },
)]
fn lexes_operator(input: &str, expected: TokenKind) {
    assert_eq!(kinds(input), vec![expected, TokenKind::Newline]);
}

#[test]
fn bare_ampersand_is_illegal() {
    assert_eq!(
        kinds("a & b"),
        vec![
            word("a"),
            TokenKind::Illegal("&".to_string()),
            word("b"),
            TokenKind::Newline
        ]
    );
}

#[test]
fn operators_split_words_without_spaces() {
    assert_eq!(
        kinds("a|b"),
        vec![word("a"), TokenKind::Pipe, word("b"), TokenKind::Newline]
    );
    assert_eq!(
        kinds("echo x>out"),
        vec![
            word("echo"),
            word("x"),
            TokenKind::Great,
            word("out"),
            TokenKind::Newline
        ]
    );
}

#[test]
fn quoted_metacharacters_do_not_split_words() {
    // The literal keeps its quotes; unquoting is the evaluator's job.
    assert_eq!(
        kinds("echo \"a|b\""),
        vec![word("echo"), word("\"a|b\""), TokenKind::Newline]
    );
    assert_eq!(
        kinds("echo 'x && y'"),
        vec![word("echo"), word("'x && y'"), TokenKind::Newline]
    );
}

#[test]
fn opposite_quote_is_ordinary_inside_a_region() {
    assert_eq!(kinds("'a\"b'"), vec![word("'a\"b'"), TokenKind::Newline]);
    assert_eq!(kinds("\"a'b\""), vec![word("\"a'b\""), TokenKind::Newline]);
}

#[test]
fn backslash_escapes_one_byte() {
    assert_eq!(
        kinds("echo a\\|b"),
        vec![word("echo"), word("a\\|b"), TokenKind::Newline]
    );
    // Escaped space keeps the word together.
    assert_eq!(kinds("a\\ b"), vec![word("a\\ b"), TokenKind::Newline]);
}

#[test]
fn trailing_backslash_stays_in_the_word() {
    assert_eq!(kinds("ab\\"), vec![word("ab\\"), TokenKind::Newline]);
}

#[test]
fn unterminated_quote_runs_to_end_of_input() {
    assert_eq!(
        kinds("echo 'oops | ;"),
        vec![word("echo"), word("'oops | ;"), TokenKind::Newline]
    );
}

#[test]
fn nul_byte_ends_the_input() {
    assert_eq!(
        kinds("echo a\0echo b"),
        vec![word("echo"), word("a"), TokenKind::Newline]
    );
}

#[test]
fn next_token_keeps_returning_newline_at_end() {
    let mut lexer = Lexer::new("ls");
    assert_eq!(lexer.next_token().kind, word("ls"));

    let first = lexer.next_token();
    let second = lexer.next_token();
    let third = lexer.next_token();
    assert_eq!(first.kind, TokenKind::Newline);
    assert_eq!(second.kind, TokenKind::Newline);
    assert_eq!(third.kind, TokenKind::Newline);
    // The cursor does not advance past end-of-input.
    assert_eq!(first.span, second.span);
    assert_eq!(second.span, third.span);
}

#[test]
fn spans_point_back_into_the_input() {
    let input = "cat < in > out";
    for token in Lexer::tokenize(input) {
        if let TokenKind::Word(raw) = &token.kind {
            assert_eq!(token.span.slice(input), raw);
        }
    }
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Every input terminates with exactly one trailing Newline token.
        #[test]
        fn tokenize_always_reaches_the_sentinel(input in ".*") {
            let tokens = Lexer::tokenize(&input);
            let newlines = tokens
                .iter()
                .filter(|t| matches!(t.kind, TokenKind::Newline))
                .count();
            prop_assert_eq!(newlines, 1);
            prop_assert!(matches!(
                tokens.last().map(|t| &t.kind),
                Some(TokenKind::Newline)
            ));
        }

        /// Every WORD literal is bytewise equal to its input slice.
        #[test]
        fn word_literals_are_input_slices(input in ".*") {
            for token in Lexer::tokenize(&input) {
                if let TokenKind::Word(raw) = &token.kind {
                    prop_assert_eq!(token.span.slice(&input), raw.as_str());
                    prop_assert!(!raw.is_empty());
                }
            }
        }
    }
}
