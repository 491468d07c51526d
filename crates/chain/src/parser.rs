// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain notation parsing.
//!
//! A definition file holds one or more actions. Each action names its
//! first processor, and every processor may branch on result codes:
//!
//! ```text
//! # comments run to end of line
//! action "order.create" {
//!     order.Validate {
//!         RC_NORMAL => order.Persist {
//!             RC_NORMAL => notify.Send
//!         }
//!         RC_FAIL => end
//!     }
//! }
//!
//! action health.ping {}
//! ```
//!
//! Parsing happens in two layers: nom combinators build a borrowed raw
//! tree (syntax only), then lowering turns it into [`ProcessorNode`]s and
//! rejects duplicate result codes and malformed processor names.

use actc_core::{Action, NameError, ProcessorNode, QualifiedName};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace1, satisfy},
    combinator::{cut, map, not, opt, recognize, value},
    error::{context, convert_error, VerboseError},
    multi::{many0, many0_count, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
    IResult, Offset,
};
use thiserror::Error;

/// Errors that can occur while parsing chain definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed notation or nesting
    #[error("syntax error at line {line}{}:\n{message}", in_action(.action))]
    Syntax {
        action: Option<String>,
        line: usize,
        message: String,
    },

    /// The same result code appears twice under one processor
    #[error("action '{action}': duplicate result code '{code}' under processor '{processor}' at line {line}")]
    DuplicateResultCode {
        action: String,
        processor: String,
        code: String,
        line: usize,
    },

    /// A processor reference that cannot name a type
    #[error("action '{action}': invalid processor name '{name}' at line {line}: {reason}")]
    InvalidProcessorName {
        action: String,
        name: String,
        line: usize,
        #[source]
        reason: NameError,
    },

    /// `parse_action` was given zero or several actions
    #[error("expected exactly one action, found {found}")]
    ExpectedSingleAction { found: usize },
}

fn in_action(action: &Option<String>) -> String {
    action
        .as_ref()
        .map(|a| format!(" in action '{}'", a))
        .unwrap_or_default()
}

/// Parse every action in a definition file.
pub fn parse_chain(src: &str) -> Result<Vec<Action>, ParseError> {
    let mut actions = Vec::new();
    let mut rest = skip_trivia(src);

    while !rest.is_empty() {
        let (after_header, name) = action_header(rest).map_err(|e| syntax_error(src, None, e))?;
        let (after_body, root) =
            action_body(after_header).map_err(|e| syntax_error(src, Some(name), e))?;

        let root = root
            .map(|raw| lower_step(src, name, raw, ""))
            .transpose()?;
        actions.push(Action::new(name, root));
        rest = skip_trivia(after_body);
    }

    Ok(actions)
}

/// Parse a definition that must contain exactly one action.
pub fn parse_action(src: &str) -> Result<Action, ParseError> {
    let mut actions = parse_chain(src)?;
    if actions.len() != 1 {
        return Err(ParseError::ExpectedSingleAction {
            found: actions.len(),
        });
    }
    Ok(actions.remove(0))
}

// ============================================================================
// Raw tree
// ============================================================================

#[derive(Debug, Clone)]
struct RawStep<'a> {
    name: &'a str,
    /// Input at the start of the step, for line numbers
    at: &'a str,
    branches: Vec<RawBranch<'a>>,
}

#[derive(Debug, Clone)]
struct RawBranch<'a> {
    code: &'a str,
    at: &'a str,
    /// `None` for `end`
    target: Option<RawStep<'a>>,
}

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

// ============================================================================
// Lexical pieces
// ============================================================================

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn comment(i: &str) -> Res<'_, &str> {
    recognize(pair(char('#'), take_while(|c| c != '\n')))(i)
}

/// Whitespace and comments
fn trivia(i: &str) -> Res<'_, &str> {
    recognize(many0_count(alt((multispace1, comment))))(i)
}

fn skip_trivia(i: &str) -> &str {
    match trivia(i) {
        Ok((rest, _)) => rest,
        Err(_) => i,
    }
}

fn identifier(i: &str) -> Res<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(i)
}

fn dotted(i: &str) -> Res<'_, &str> {
    recognize(separated_list1(char('.'), identifier))(i)
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> Res<'a, &'a str> {
    terminated(tag(word), not(satisfy(is_name_char)))
}

fn quoted(i: &str) -> Res<'_, &str> {
    delimited(
        char('"'),
        take_while1(|c| c != '"' && c != '\n'),
        cut(context("closing '\"'", char('"'))),
    )(i)
}

// ============================================================================
// Grammar
// ============================================================================

fn action_header(i: &str) -> Res<'_, &str> {
    let (i, _) = context("'action' declaration", keyword("action"))(i)?;
    let (i, _) = trivia(i)?;
    cut(context("action name", alt((quoted, dotted))))(i)
}

fn action_body(i: &str) -> Res<'_, Option<RawStep<'_>>> {
    let (i, _) = trivia(i)?;
    let (i, _) = cut(context("'{' opening the action body", char('{')))(i)?;
    let (i, root) = opt(preceded(trivia, step))(i)?;
    let (i, _) = trivia(i)?;
    let (i, _) = cut(context("'}' closing the action body", char('}')))(i)?;
    Ok((i, root))
}

fn step(i: &str) -> Res<'_, RawStep<'_>> {
    let at = i;
    let (i, name) = dotted(i)?;
    let (i, branches) = opt(preceded(trivia, branch_block))(i)?;
    Ok((
        i,
        RawStep {
            name,
            at,
            branches: branches.unwrap_or_default(),
        },
    ))
}

fn branch_block(i: &str) -> Res<'_, Vec<RawBranch<'_>>> {
    let (i, _) = char('{')(i)?;
    let (i, branches) = many0(preceded(trivia, branch))(i)?;
    let (i, _) = trivia(i)?;
    let (i, _) = cut(context("'}' closing the branch block", char('}')))(i)?;
    Ok((i, branches))
}

fn branch(i: &str) -> Res<'_, RawBranch<'_>> {
    let at = i;
    let (i, code) = identifier(i)?;
    let (i, _) = trivia(i)?;
    let (i, _) = cut(context("'=>' after result code", tag("=>")))(i)?;
    let (i, _) = trivia(i)?;
    let (i, target) = cut(context(
        "processor name or 'end'",
        alt((value(None, keyword("end")), map(step, Some))),
    ))(i)?;
    Ok((i, RawBranch { code, at, target }))
}

// ============================================================================
// Lowering
// ============================================================================

fn lower_step(
    src: &str,
    action: &str,
    raw: RawStep<'_>,
    incoming_code: &str,
) -> Result<ProcessorNode, ParseError> {
    let name = QualifiedName::parse(raw.name).map_err(|reason| ParseError::InvalidProcessorName {
        action: action.to_string(),
        name: raw.name.to_string(),
        line: line_of(src, raw.at),
        reason,
    })?;

    let mut node = ProcessorNode::new(name, incoming_code);
    for branch in raw.branches {
        if node.children.contains_key(branch.code) {
            return Err(ParseError::DuplicateResultCode {
                action: action.to_string(),
                processor: node.name.to_string(),
                code: branch.code.to_string(),
                line: line_of(src, branch.at),
            });
        }
        let child = branch
            .target
            .map(|target| lower_step(src, action, target, branch.code))
            .transpose()?;
        node.children.insert(branch.code.to_string(), child);
    }
    Ok(node)
}

/// 1-based line of `at`, which must be a slice of `src`
fn line_of(src: &str, at: &str) -> usize {
    let offset = src.offset(at).min(src.len());
    src[..offset].matches('\n').count() + 1
}

fn syntax_error(src: &str, action: Option<&str>, err: nom::Err<VerboseError<&str>>) -> ParseError {
    let action = action.map(String::from);
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let line = e
                .errors
                .first()
                .map(|(at, _)| line_of(src, at))
                .unwrap_or(1);
            ParseError::Syntax {
                action,
                line,
                message: convert_error(src, e),
            }
        }
        nom::Err::Incomplete(_) => ParseError::Syntax {
            action,
            line: src.lines().count().max(1),
            message: "unexpected end of input".to_string(),
        },
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
