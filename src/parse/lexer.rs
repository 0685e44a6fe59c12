use super::ast::Dice;
use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Integer(Int),

    #[regex(r"([1-9][0-9]*)?d[1-9][0-9]*", |lex| parse_dice(lex.slice()))]
    Dice(Dice),

    #[regex(r"(dl|dh|kh|kl)[0-9]*", |lex| parse_keep_drop(lex.slice()))]
    KeepDrop(Modifier),
    #[regex(r"x(>[0-9]+)?", |lex| parse_explode(lex.slice()))]
    Explode(Modifier),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"0[0-9]*d[0-9]+")]
    #[regex(r"([1-9][0-9]*)?d0[0-9]*")]
    ErrZeroDice,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    /// The modifier carried by a `KeepDrop` or `Explode` token.
    pub fn as_modifier(&self) -> Option<Modifier> {
        match self {
            Self::KeepDrop(m) | Self::Explode(m) => Some(*m),
            _ => None,
        }
    }
}

// logos has verified the shape of the slice; parsing only fails on overflow,
// which turns the slice into an error token
fn parse_dice(s: &str) -> Option<Dice> {
    let (count, sides) = s.split_once('d')?;
    let count = if count.is_empty() {
        None
    } else {
        Some(count.parse().ok()?)
    };
    let sides = sides.parse().ok()?;
    Some(Dice::new(count, sides))
}

fn parse_keep_drop(s: &str) -> Option<Modifier> {
    let (family, n) = s.split_at(2);
    let n = if n.is_empty() { 1 } else { n.parse().ok()? };
    let kd = match family {
        "dl" => KeepDrop::DropLowest(n),
        "dh" => KeepDrop::DropHighest(n),
        "kh" => KeepDrop::KeepHighest(n),
        "kl" => KeepDrop::KeepLowest(n),
        _ => return None,
    };
    Some(Modifier::KeepDrop(kd))
}

fn parse_explode(s: &str) -> Option<Modifier> {
    let threshold = match s.strip_prefix('x')?.strip_prefix('>') {
        Some(t) => Some(t.parse().ok()?),
        None => None,
    };
    Some(Modifier::Explode(threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<TokenKind> {
        lexer(s).collect()
    }

    #[test]
    fn test_lex_dice() {
        assert_eq!(
            tokens("4d6"),
            vec![TokenKind::Dice(Dice::new(
                Some(Count::new(4).unwrap()),
                Sides::new(6).unwrap()
            ))]
        );
        assert_eq!(
            tokens("d20"),
            vec![TokenKind::Dice(Dice::new(None, Sides::new(20).unwrap()))]
        );
    }

    #[test]
    fn test_lex_modifiers() {
        assert_eq!(
            tokens("dl"),
            vec![TokenKind::KeepDrop(KeepDrop::DropLowest(1).into())]
        );
        assert_eq!(
            tokens("kh3"),
            vec![TokenKind::KeepDrop(KeepDrop::KeepHighest(3).into())]
        );
        assert_eq!(tokens("x"), vec![TokenKind::Explode(Modifier::Explode(None))]);
        assert_eq!(
            tokens("x>5"),
            vec![TokenKind::Explode(Modifier::Explode(Some(5)))]
        );
    }

    #[test]
    fn test_lex_full_expression() {
        let toks = tokens("4d6dl1+2");
        assert_eq!(toks.len(), 4);
        assert!(matches!(toks[0], TokenKind::Dice(_)));
        assert_eq!(
            toks[1],
            TokenKind::KeepDrop(KeepDrop::DropLowest(1).into())
        );
        assert_eq!(toks[2], TokenKind::Plus);
        assert_eq!(toks[3], TokenKind::Integer(2));
    }

    #[test]
    fn test_lex_zero_dice() {
        assert_eq!(tokens("0d6"), vec![TokenKind::ErrZeroDice]);
        assert_eq!(tokens("3d0"), vec![TokenKind::ErrZeroDice]);
    }
}
