//! A parser for the python literals that show up in exported records, e.g.
//! `"['Paris', 'France']"`.
//!
//! Supports strings, numbers, `None`, `True`, `False`, lists, tuples, sets
//! and dicts.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::EnrichError;

/// Containers nested deeper than this are rejected.
pub const MAX_DEPTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(String),
    Bool(bool),
    None,
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Set(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    /// The elements of a list or tuple of strings.
    ///
    /// Tuples count as sequences too, `('Lima', 'Peru')` yields both names.
    pub fn into_strings(self) -> Option<Vec<String>> {
        match self {
            Literal::List(items) | Literal::Tuple(items) => items
                .into_iter()
                .map(|item| match item {
                    Literal::Str(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

/// Parses a complete python literal.
pub fn parse_literal(input: &str) -> Result<Literal, EnrichError> {
    let mut parser = Parser {
        chars: input.chars().peekable(),
        depth: 0,
    };
    let literal = parser
        .value()
        .ok_or_else(|| EnrichError::parse_failure(input, "python literal"))?;
    parser.skip_whitespace();
    if parser.chars.peek().is_some() {
        return Err(EnrichError::parse_failure(input, "python literal"));
    }
    Ok(literal)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    /// Number of currently open containers.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn skip_whitespace(&mut self) {
        while self.chars.peek().map_or(false, |c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.chars.peek() == Some(&expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    /// Consumes the opening char of a container and parses its content.
    fn nested<F>(&mut self, content: F) -> Option<Literal>
    where
        F: FnOnce(&mut Self) -> Option<Literal>,
    {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        self.chars.next();
        self.depth += 1;
        let literal = content(self);
        self.depth -= 1;
        literal
    }

    fn value(&mut self) -> Option<Literal> {
        self.skip_whitespace();
        match *self.chars.peek()? {
            '\'' | '"' => self.string().map(Literal::Str),
            '[' => self.nested(|p| p.items(']').map(Literal::List)),
            '(' => self.nested(Self::tuple),
            '{' => self.nested(Self::braced),
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.number(),
            c if c.is_alphabetic() => match self.identifier().as_str() {
                "None" => Some(Literal::None),
                "True" => Some(Literal::Bool(true)),
                "False" => Some(Literal::Bool(false)),
                _ => None,
            },
            _ => None,
        }
    }

    fn string(&mut self) -> Option<String> {
        let quote = self.chars.next()?;
        let mut s = String::new();
        loop {
            match self.chars.next()? {
                c if c == quote => return Some(s),
                '\\' => match self.chars.next()? {
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    'r' => s.push('\r'),
                    '0' => s.push('\0'),
                    '\n' => {}
                    c @ '\\' | c @ '\'' | c @ '"' => s.push(c),
                    c => {
                        s.push('\\');
                        s.push(c);
                    }
                },
                // unescaped newlines end a single quoted string
                '\n' => return None,
                c => s.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<Literal> {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' || c == '+' {
                s.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        let digits = s.trim_start_matches(|c| c == '-' || c == '+');
        let valid = !digits.is_empty()
            && digits.chars().any(|c| c.is_ascii_digit())
            && digits.replace('_', "").parse::<f64>().is_ok();
        if valid {
            Some(Literal::Number(s))
        } else {
            None
        }
    }

    fn identifier(&mut self) -> String {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                s.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        s
    }

    /// Comma separated values up to `close`, trailing comma allowed.
    fn items(&mut self, close: char) -> Option<Vec<Literal>> {
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                return Some(items);
            }
            items.push(self.value()?);
            if !self.eat(',') {
                return if self.eat(close) { Some(items) } else { None };
            }
        }
    }

    fn tuple(&mut self) -> Option<Literal> {
        if self.eat(')') {
            return Some(Literal::Tuple(Vec::new()));
        }
        let first = self.value()?;
        if self.eat(')') {
            // `(x)` is just a parenthesized value
            return Some(first);
        }
        if !self.eat(',') {
            return None;
        }
        let mut items = vec![first];
        items.extend(self.items(')')?);
        Some(Literal::Tuple(items))
    }

    fn braced(&mut self) -> Option<Literal> {
        if self.eat('}') {
            return Some(Literal::Dict(Vec::new()));
        }
        let first = self.value()?;
        if self.eat(':') {
            let mut entries = vec![(first, self.value()?)];
            loop {
                if !self.eat(',') {
                    return if self.eat('}') {
                        Some(Literal::Dict(entries))
                    } else {
                        None
                    };
                }
                if self.eat('}') {
                    return Some(Literal::Dict(entries));
                }
                let key = self.value()?;
                if !self.eat(':') {
                    return None;
                }
                entries.push((key, self.value()?));
            }
        }
        let mut items = vec![first];
        if self.eat(',') {
            items.extend(self.items('}')?);
        } else if !self.eat('}') {
            return None;
        }
        Some(Literal::Set(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Literal {
        Literal::List(items.iter().map(|s| Literal::Str(s.to_string())).collect())
    }

    #[test]
    fn list_of_strings() {
        assert_eq!(
            parse_literal("['Paris', 'France']").unwrap(),
            strings(&["Paris", "France"])
        );
        assert_eq!(
            parse_literal(r#"  ["New York", 'USA',]  "#).unwrap(),
            strings(&["New York", "USA"])
        );
        assert_eq!(parse_literal("[]").unwrap(), strings(&[]));
    }

    #[test]
    fn escapes() {
        assert_eq!(
            parse_literal(r#"['Côte d\'Ivoire', "say \"hi\""]"#).unwrap(),
            strings(&["Côte d'Ivoire", "say \"hi\""])
        );
    }

    #[test]
    fn scalars() {
        assert_eq!(parse_literal("42").unwrap(), Literal::Number("42".to_string()));
        assert_eq!(parse_literal("-1.5e3").unwrap(), Literal::Number("-1.5e3".to_string()));
        assert_eq!(parse_literal("None").unwrap(), Literal::None);
        assert_eq!(parse_literal("True").unwrap(), Literal::Bool(true));
        assert_eq!(parse_literal("'Paris'").unwrap(), Literal::Str("Paris".to_string()));
    }

    #[test]
    fn containers() {
        assert_eq!(
            parse_literal("('a', 'b')").unwrap().into_strings(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(parse_literal("('a')").unwrap(), Literal::Str("a".to_string()));
        assert_eq!(
            parse_literal("{'a': 1, 'b': [2]}").unwrap(),
            Literal::Dict(vec![
                (Literal::Str("a".to_string()), Literal::Number("1".to_string())),
                (
                    Literal::Str("b".to_string()),
                    Literal::List(vec![Literal::Number("2".to_string())])
                ),
            ])
        );
        assert_eq!(
            parse_literal("{'a'}").unwrap(),
            Literal::Set(vec![Literal::Str("a".to_string())])
        );
        assert_eq!(parse_literal("['a', 1]").unwrap().into_strings(), None);
    }

    #[test]
    fn nesting_depth() {
        let nested = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(parse_literal(&nested).is_ok());

        let too_deep = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
        assert!(parse_literal(&too_deep).is_err());

        let mixed = "({[".repeat(MAX_DEPTH);
        assert!(parse_literal(&mixed).is_err());
        assert!(parse_literal(&"[".repeat(200_000)).is_err());
    }

    #[test]
    fn rejects_plain_text() {
        assert!(parse_literal("Paris").is_err());
        assert!(parse_literal("Paris, France").is_err());
        assert!(parse_literal("['Paris'").is_err());
        assert!(parse_literal("['Paris'] extra").is_err());
        assert!(parse_literal("").is_err());
        assert!(parse_literal("1 2").is_err());
    }
}
