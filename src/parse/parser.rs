use super::ast::{GroupTerm, Term};
use super::lexer::{lexer, Lexer, TokenKind};
use crate::common::{Count, Int};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no dice or flat terms in {expression:?}")]
    NoTerms { expression: String },
}

/// A left-to-right scanner over the token stream. The notation is lenient:
/// anything that does not form a term is skipped, and only a stream with no
/// terms at all is an error.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            lexer: lexer(s),
            source: s,
        }
    }

    pub fn parse(mut self) -> Result<Vec<Term>, ParseError> {
        let mut terms = Vec::new();

        while let Some(token) = self.lexer.next() {
            match token {
                TokenKind::Dice(dice) => {
                    let mut group = GroupTerm::from(dice);
                    group.modifier = self.take_modifier();
                    terms.push(Term::Group(group));
                }
                TokenKind::Plus | TokenKind::Minus => {
                    let sign: Int = if token == TokenKind::Minus { -1 } else { 1 };
                    match self.lexer.peek() {
                        Some(&TokenKind::Integer(value)) => {
                            self.lexer.next();
                            terms.push(Term::Flat(sign * value));
                        }
                        // a minus binds to an explicit count: `-1d4` is the
                        // flat term -1 followed by a single d4
                        Some(&TokenKind::Dice(dice)) if sign < 0 && dice.count.is_some() => {
                            self.lexer.next();
                            terms.push(Term::Flat(-(dice.count().get() as Int)));
                            let mut group = GroupTerm::new(Count::MIN, dice.sides);
                            group.modifier = self.take_modifier();
                            terms.push(Term::Group(group));
                        }
                        // any other sign is just a separator between terms
                        _ => {}
                    }
                }
                // unsigned integers, stray modifiers, zero-dice literals, and
                // unrecognized text are all skipped
                _ => {}
            }
        }

        if terms.is_empty() {
            return Err(ParseError::NoTerms {
                expression: self.source.to_string(),
            });
        }
        Ok(terms)
    }

    fn take_modifier(&mut self) -> Option<crate::common::Modifier> {
        let modifier = self.lexer.peek().and_then(TokenKind::as_modifier)?;
        self.lexer.next();
        Some(modifier)
    }
}
