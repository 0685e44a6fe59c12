pub mod ast;
mod lexer;
mod parser;

pub use parser::{ParseError, Parser};

/// Lowercase the expression and strip all whitespace, the form stored on
/// parsed expressions and results.
pub(crate) fn normalize(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect()
}

/// Parse an expression into its term list. Fails if no recognizable term
/// exists.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parse_normalized(normalize(s))
}

/// `parse` for input that has already been through [`normalize`].
pub(crate) fn parse_normalized(text: String) -> Result<ast::Expression, ParseError> {
    let terms = Parser::new(&text).parse()?;
    Ok(ast::Expression::new(text, terms))
}
