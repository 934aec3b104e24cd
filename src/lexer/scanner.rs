use super::*;

/// Advance one character and update bracket depth
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let (_, c) = lexer.peek?;
    match c {
        '[' | '{' => lexer.depth += 1,
        ']' | '}' => lexer.depth = lexer.depth.saturating_sub(1),
        _ => {}
    }
    lexer.peek = lexer.chars.next();
    Some(c)
}

pub(super) fn skip_whitespace(lexer: &mut Lexer) {
    while let Some((_, c)) = lexer.peek {
        if !c.is_whitespace() {
            break;
        }
        bump(lexer);
    }
}
