use super::token::{Operator, Token};

/// Parenthesis depth of the outermost level.
const LEVELS: usize = 4;

/// ## Full parenthesization
///
/// Rewrites an infix expression so that paren nesting alone decides how it
/// groups. Every operator closes and reopens as many parens as it is weak:
/// `^` one, `*` `/` two, `+` `-` three. Literal parens and the expression
/// itself are wrapped in four. A comma closes and reopens three, which keeps
/// each argument of a subscript list in its own group.
///
/// `A+B*C` becomes `((((A)))+(((B))*((C))))`.
///
/// See <https://en.wikipedia.org/wiki/Operator-precedence_parser#Full_parenthesization>
pub fn normalize(tokens: &[Token]) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len() * 4);
    push_n(&mut out, Token::LParen, LEVELS);
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => push_n(&mut out, Token::LParen, LEVELS),
            Token::RParen => push_n(&mut out, Token::RParen, LEVELS),
            Token::Comma => wrap(&mut out, token, LEVELS - 1),
            Token::Operator(op) => {
                if is_unary(op, index.checked_sub(1).map(|i| &tokens[i])) {
                    out.push(token.clone());
                } else {
                    wrap(&mut out, token, LEVELS - op.precedence());
                }
            }
            _ => out.push(token.clone()),
        }
    }
    push_n(&mut out, Token::RParen, LEVELS);
    out
}

fn is_unary(op: &Operator, previous: Option<&Token>) -> bool {
    match op {
        Operator::Plus | Operator::Minus => matches!(
            previous,
            None | Some(Token::Operator(_)) | Some(Token::LParen) | Some(Token::Comma)
        ),
        _ => false,
    }
}

fn wrap(out: &mut Vec<Token>, token: &Token, depth: usize) {
    push_n(out, Token::RParen, depth);
    out.push(token.clone());
    push_n(out, Token::LParen, depth);
}

fn push_n(out: &mut Vec<Token>, token: Token, n: usize) {
    out.extend(std::iter::repeat(token).take(n));
}
