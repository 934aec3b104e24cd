// Author: Dustin Pilgrim
// License: MIT

use std::str::CharIndices;

mod scanner;

/// Pieces of expression text. Brackets are kept inside the token they open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Word(&'a str),
    Eof,
}

/// Splits expression text on whitespace or commas, but only at bracket
/// depth zero, so `.[+ a 2].` and `{1, 2}` stay whole.
pub struct Lexer<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    peek: Option<(usize, char)>,
    depth: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut chars = input.char_indices();
        let peek = chars.next();
        Lexer {
            input,
            chars,
            peek,
            depth: 0,
            done: false,
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.depth
    }

    /// Next whitespace separated token.
    pub fn next_token(&mut self) -> Token<'a> {
        scanner::skip_whitespace(self);
        let Some((start, _)) = self.peek else {
            return Token::Eof;
        };

        while let Some((_, c)) = self.peek {
            if self.depth == 0 && c.is_whitespace() {
                break;
            }
            scanner::bump(self);
        }

        let input = self.input;
        Token::Word(&input[start..self.offset()])
    }

    /// Next comma separated item, trimmed. A trailing comma yields one
    /// empty item before `Eof`.
    pub fn next_item(&mut self) -> Token<'a> {
        if self.done {
            return Token::Eof;
        }
        let start = self.offset();

        while let Some((_, c)) = self.peek {
            if self.depth == 0 && c == ',' {
                break;
            }
            scanner::bump(self);
        }

        let end = self.offset();
        if scanner::bump(self).is_none() {
            self.done = true;
        }
        let input = self.input;
        Token::Word(input[start..end].trim())
    }

    fn offset(&self) -> usize {
        self.peek.map_or(self.input.len(), |(i, _)| i)
    }
}

/// All whitespace separated tokens of `text`.
pub fn words(text: &str) -> Vec<&str> {
    let mut lexer = Lexer::new(text);
    let mut out = Vec::new();
    while let Token::Word(w) = lexer.next_token() {
        out.push(w);
    }
    out
}

/// All comma separated items of a list body. An empty body has no items.
pub fn items(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let mut lexer = Lexer::new(text);
    let mut out = Vec::new();
    while let Token::Word(item) = lexer.next_item() {
        out.push(item);
    }
    out
}
