//! Minimal CSS-like selectors for structural/role queries.
//!
//! Supported grammar, enough for landmark lookups during focus resolution:
//!
//! ```text
//! selector-list  = compound ("," compound)*
//! compound       = [tag] simple*
//! simple         = "." class | "[" name ("=" value)? "]"
//! ```
//!
//! Attribute values may be bare or single/double quoted. No combinators, no
//! pseudo-classes; queries always search element subtrees.

use crate::element::ViewHandle;

/// Parsed selector list. Matches if any compound matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

/// Errors raised while parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character `{0}` in selector")]
    Unexpected(char),
    #[error("unterminated attribute selector")]
    UnterminatedAttribute,
}

impl Selector {
    /// Parse a comma-separated selector list.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut compounds = Vec::new();
        for piece in input.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                return Err(SelectorError::Empty);
            }
            compounds.push(parse_compound(piece)?);
        }
        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { compounds })
    }

    /// Whether the element matches any compound in the list.
    pub fn matches(&self, el: &ViewHandle) -> bool {
        self.compounds.iter().any(|c| c.matches(el))
    }
}

impl Compound {
    fn matches(&self, el: &ViewHandle) -> bool {
        if let Some(tag) = &self.tag
            && !el.tag().eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if !self.classes.iter().all(|class| el.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|attr| match &attr.value {
            Some(value) => el.attribute(&attr.name).as_deref() == Some(value.as_str()),
            None => el.attribute(&attr.name).is_some(),
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(input: &str) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut chars = input.chars().peekable();

    // Optional leading tag name.
    let mut tag = String::new();
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) {
            tag.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if !tag.is_empty() {
        compound.tag = Some(tag);
    }

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                let mut class = String::new();
                while let Some(&c) = chars.peek() {
                    if is_ident_char(c) {
                        class.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if class.is_empty() {
                    return Err(SelectorError::Unexpected('.'));
                }
                compound.classes.push(class);
            }
            '[' => {
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(SelectorError::UnterminatedAttribute);
                }
                compound.attrs.push(parse_attr(&body)?);
            }
            other => return Err(SelectorError::Unexpected(other)),
        }
    }

    if compound.tag.is_none() && compound.classes.is_empty() && compound.attrs.is_empty() {
        return Err(SelectorError::Empty);
    }
    Ok(compound)
}

fn parse_attr(body: &str) -> Result<AttrMatch, SelectorError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(SelectorError::UnterminatedAttribute);
    }
    match body.split_once('=') {
        None => Ok(AttrMatch {
            name: body.to_string(),
            value: None,
        }),
        Some((name, value)) => {
            let name = name.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if name.is_empty() {
                return Err(SelectorError::Unexpected('='));
            }
            Ok(AttrMatch {
                name: name.to_string(),
                value: Some(value.to_string()),
            })
        }
    }
}
