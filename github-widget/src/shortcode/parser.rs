//! Shortcode parsing.
//!
//! Recognises `{{% name args %}}` directives, optionally closed by
//! `{{% /name %}}`. Text between a paired opening and closing tag is the
//! shortcode body. Shortcodes inside a body are not expanded, but every tag
//! in the document, bodies included, must still be well formed.

use super::{ParseError, ShortcodeArgs};
use std::ops::Range;

const OPEN: &str = "{{%";
const CLOSE: &str = "%}}";

/// A shortcode found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeCall {
    /// Shortcode name.
    pub name: String,

    /// Parsed arguments, including the body of a paired shortcode.
    pub args: ShortcodeArgs,

    /// Byte range of the whole directive (both tags and the body if paired).
    pub span: Range<usize>,
}

/// A single `{{% ... %}}` tag.
#[derive(Debug)]
struct Tag {
    span: Range<usize>,
    kind: TagKind,
}

#[derive(Debug)]
enum TagKind {
    Open { name: String, tokens: Vec<String> },
    Close { name: String },
}

/// Finds every shortcode in `source`, in document order.
///
/// A shortcode is paired when a closing tag with its name follows before
/// another opening tag of the same name. Shortcodes of the same name
/// cannot nest.
///
/// # Errors
///
/// Returns [`ParseError`] on unterminated tags or quotes, nameless tags, and
/// closing tags without an opening tag.
pub fn parse_shortcodes(source: &str) -> Result<Vec<ShortcodeCall>, ParseError> {
    let tags = scan_tags(source)?;
    let mut calls = Vec::new();
    let mut i = 0;

    while i < tags.len() {
        let tag = &tags[i];
        match &tag.kind {
            TagKind::Close { name } => {
                return Err(ParseError::UnexpectedClosingTag {
                    name: name.clone(),
                    offset: tag.span.start,
                });
            }
            TagKind::Open { name, tokens } => {
                let mut args = build_args(tokens);
                match find_closing(&tags, i, name) {
                    Some(j) => {
                        args = args.with_body(&source[tag.span.end..tags[j].span.start]);
                        calls.push(ShortcodeCall {
                            name: name.clone(),
                            args,
                            span: tag.span.start..tags[j].span.end,
                        });
                        i = j + 1;
                    }
                    None => {
                        calls.push(ShortcodeCall {
                            name: name.clone(),
                            args,
                            span: tag.span.clone(),
                        });
                        i += 1;
                    }
                }
            }
        }
    }

    Ok(calls)
}

/// Finds the index of the closing tag for the opening tag at `open`.
fn find_closing(tags: &[Tag], open: usize, name: &str) -> Option<usize> {
    for (j, tag) in tags.iter().enumerate().skip(open + 1) {
        match &tag.kind {
            TagKind::Close { name: close } if close == name => return Some(j),
            TagKind::Open { name: other, .. } if other == name => return None,
            _ => {}
        }
    }
    None
}

/// Collects every tag in the document.
fn scan_tags(source: &str) -> Result<Vec<Tag>, ParseError> {
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(found) = source[pos..].find(OPEN) {
        let start = pos + found;
        let inner_start = start + OPEN.len();
        let inner_len = source[inner_start..]
            .find(CLOSE)
            .ok_or(ParseError::UnterminatedTag { offset: start })?;
        let inner = &source[inner_start..inner_start + inner_len];
        let end = inner_start + inner_len + CLOSE.len();

        tags.push(Tag {
            span: start..end,
            kind: parse_tag(inner, start)?,
        });
        pos = end;
    }

    Ok(tags)
}

fn parse_tag(inner: &str, offset: usize) -> Result<TagKind, ParseError> {
    if let Some(rest) = inner.trim_start().strip_prefix('/') {
        let name = rest.trim();
        if !is_identifier(name) {
            return Err(ParseError::MissingName { offset });
        }
        return Ok(TagKind::Close {
            name: name.to_string(),
        });
    }

    let mut tokens = tokenize(inner, offset)?;
    if tokens.is_empty() || !is_identifier(&tokens[0]) {
        return Err(ParseError::MissingName { offset });
    }
    let name = tokens.remove(0);
    Ok(TagKind::Open { name, tokens })
}

/// Splits on whitespace outside double quotes; quotes are removed.
fn tokenize(inner: &str, offset: usize) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in inner.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote { offset });
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// `key=value` tokens with an identifier key are named; the rest are positional.
fn build_args(tokens: &[String]) -> ShortcodeArgs {
    tokens
        .iter()
        .fold(ShortcodeArgs::new(), |args, token| match token.split_once('=') {
            Some((key, value)) if is_identifier(key) => args.with_named(key, value),
            _ => args.with_positional(token.as_str()),
        })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
