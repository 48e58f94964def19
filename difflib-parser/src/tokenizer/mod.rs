pub mod token;

use log::trace;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer. The input is exhausted when
/// the iterator ends.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input that no token matches becomes a [`TokenKind::Illegal`] token; tokenizing never fails.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Illegal),
            lexeme: lexer.slice(),
        });
    }

    trace!("tokenized {} byte(s) into {} token(s)", input.len(), tokens.len());
    tokens.into_boxed_slice()
}
