// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Parser unit tests: grammar shapes, associativity, and syntax errors.

use yare::parameterized;

use super::*;
use crate::ast::{RedirectKind, SuffixItem};

fn parse(input: &str) -> Ast {
    match Parser::parse(input) {
        Ok(Some(ast)) => ast,
        other => panic!("expected a tree for {input:?}, got {other:?}"),
    }
}

fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Err(err) => err,
        other => panic!("expected a syntax error for {input:?}, got {other:?}"),
    }
}

/// Assert the node is a simple command with the given name.
fn assert_simple(ast: &Ast, name: &str) {
    match ast {
        Ast::Simple(cmd) => assert_eq!(cmd.name.raw, name),
        other => panic!("expected simple command `{name}`, got {other:?}"),
    }
}

#[test]
fn blank_input_parses_to_nothing() {
    assert_eq!(Parser::parse("").unwrap(), None);
    assert_eq!(Parser::parse(" \t ").unwrap(), None);
}

#[test]
fn simple_command_with_arguments() {
    let Ast::Simple(cmd) = parse("echo -n hello world") else {
        panic!("expected simple command");
    };
    assert_eq!(cmd.name.raw, "echo");
    let args: Vec<_> = cmd.args().map(|w| w.raw.as_str()).collect();
    assert_eq!(args, ["-n", "hello", "world"]);
    assert!(cmd.prefix.is_empty());
}

#[test]
fn and_or_is_right_associative() {
    // a && b && c  ⇒  AndOr(a, &&, AndOr(b, &&, c))
    let Ast::AndOr(outer) = parse("a && b && c") else {
        panic!("expected and_or");
    };
    assert_eq!(outer.op, LogicalOp::And);
    assert_simple(&outer.left, "a");
    let Ast::AndOr(inner) = *outer.right else {
        panic!("expected nested and_or");
    };
    assert_simple(&inner.left, "b");
    assert_simple(&inner.right, "c");
}

#[test]
fn mixed_and_or_keeps_operators_in_order() {
    let Ast::AndOr(outer) = parse("a && b || c") else {
        panic!("expected and_or");
    };
    assert_eq!(outer.op, LogicalOp::And);
    let Ast::AndOr(inner) = *outer.right else {
        panic!("expected nested and_or");
    };
    assert_eq!(inner.op, LogicalOp::Or);
}

#[test]
fn pipeline_is_right_associative() {
    // a | b | c  ⇒  Pipeline(a, Pipeline(b, c))
    let Ast::Pipeline(outer) = parse("a | b | c") else {
        panic!("expected pipeline");
    };
    assert_simple(&outer.left, "a");
    let Ast::Pipeline(inner) = *outer.right else {
        panic!("expected nested pipeline");
    };
    assert_simple(&inner.left, "b");
    assert_simple(&inner.right, "c");
}

#[test]
fn list_is_right_associative() {
    // a ; b ; c  ⇒  List(a, List(b, c))
    let Ast::List(outer) = parse("a ; b ; c") else {
        panic!("expected list");
    };
    assert_simple(&outer.left, "a");
    let Some(right) = outer.right else {
        panic!("expected right side");
    };
    let Ast::List(inner) = *right else {
        panic!("expected nested list");
    };
    assert_simple(&inner.left, "b");
}

#[test]
fn pipe_binds_tighter_than_and_or() {
    let Ast::AndOr(node) = parse("a | b && c") else {
        panic!("expected and_or at the root");
    };
    assert!(matches!(*node.left, Ast::Pipeline(_)));
    assert_simple(&node.right, "c");
}

#[test]
fn dangling_semicolon_closes_the_list() {
    let Ast::List(node) = parse("a ;") else {
        panic!("expected list");
    };
    assert_simple(&node.left, "a");
    assert_eq!(node.right, None);
}

#[test]
fn subshell_wraps_its_body() {
    // (a && b) || c  ⇒  AndOr(Subshell(AndOr(a, b)), ||, c)
    let Ast::AndOr(node) = parse("(a && b) || c") else {
        panic!("expected and_or");
    };
    assert_eq!(node.op, LogicalOp::Or);
    let Ast::Subshell(subshell) = *node.left else {
        panic!("expected subshell");
    };
    assert!(matches!(*subshell.body, Ast::AndOr(_)));
    assert_simple(&node.right, "c");
}

#[test]
fn subshell_body_may_be_a_list() {
    let Ast::Subshell(subshell) = parse("(echo a; echo b)") else {
        panic!("expected subshell");
    };
    assert!(matches!(*subshell.body, Ast::List(_)));
}

#[test]
fn subshell_can_feed_a_pipeline() {
    let Ast::Pipeline(node) = parse("(echo a; echo b) | wc -l") else {
        panic!("expected pipeline");
    };
    assert!(matches!(*node.left, Ast::Subshell(_)));
    assert_simple(&node.right, "wc");
}

#[test]
fn redirections_collect_into_prefix_and_suffix() {
    let Ast::Simple(cmd) = parse("< in sort -r > out") else {
        panic!("expected simple command");
    };
    assert_eq!(cmd.prefix.len(), 1);
    assert_eq!(cmd.prefix[0].kind, RedirectKind::Input);
    assert_eq!(cmd.prefix[0].target.raw, "in");
    assert_eq!(cmd.name.raw, "sort");

    let kinds: Vec<_> = cmd
        .suffix
        .iter()
        .map(|item| match item {
            SuffixItem::Word(word) => word.raw.clone(),
            SuffixItem::Redirect(r) => format!("{:?}:{}", r.kind, r.target.raw),
        })
        .collect();
    assert_eq!(kinds, ["-r", "Output:out"]);
}

#[test]
fn repeated_redirections_keep_source_order() {
    let Ast::Simple(cmd) = parse("cmd > f > g") else {
        panic!("expected simple command");
    };
    let targets: Vec<_> = cmd.redirections().map(|r| r.target.raw.clone()).collect();
    assert_eq!(targets, ["f", "g"]);
}

#[test]
fn heredoc_operator_parses() {
    let Ast::Simple(cmd) = parse("cat << EOF") else {
        panic!("expected simple command");
    };
    let redirections: Vec<_> = cmd.redirections().collect();
    assert_eq!(redirections.len(), 1);
    assert_eq!(redirections[0].kind, RedirectKind::HereDoc);
    assert_eq!(redirections[0].target.raw, "EOF");
}

#[test]
fn quoted_operators_stay_in_words() {
    let Ast::Simple(cmd) = parse("echo \"a|b\"") else {
        panic!("expected simple command");
    };
    let args: Vec<_> = cmd.args().map(|w| w.raw.as_str()).collect();
    assert_eq!(args, ["\"a|b\""]);
}

#[parameterized(
    leading_semi = { "; a" },
    double_semi = { "a ;; b" },
    doubled_and = { "a && && b" },
    or_after_and = { "a && || b" },
    leading_pipe = { "| a" },
    double_pipe_gap = { "a | | b" },
    trailing_and = { "a &&" },
    trailing_pipe = { "a |" },
    bare_ampersand = { "a & b" },
    redirect_without_target = { "a >" },
    redirect_into_operator = { "a > ;" },
    empty_command_after_redirect = { "< f" },
    unclosed_subshell = { "(a" },
    empty_subshell = { "()" },
    word_after_subshell = { "(a) b" },
    subshell_after_subshell = { "(a)(b)" },
)]
fn rejects_invalid_syntax(input: &str) {
    parse_err(input);
}

#[test]
fn error_reports_the_offending_token() {
    let err = parse_err("a ;; b");
    assert_eq!(err.to_string(), "syntax error near unexpected token `;'");

    let err = parse_err("a &&");
    assert_eq!(
        err.to_string(),
        "syntax error near unexpected token `<newline>'"
    );
}

#[test]
fn error_spans_locate_the_token() {
    let input = "a ;; b";
    let err = parse_err(input);
    assert_eq!(err.span.slice(input), ";");
    assert_eq!(err.span.start, 3);
}
