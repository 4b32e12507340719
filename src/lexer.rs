use std::fmt;

use crate::ast::Token;
use crate::error::{LexError, LexErrorReason};

/// Location of a lexeme in the source text.
///
/// `offset` counts bytes from the start of the input; `line` and `column`
/// are 1-based and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with its source text and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    pub position: Position,
}

pub struct Lexer {
    source: String,
    input: Vec<char>,
    index: usize,
    position: Position,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            source: input.to_string(),
            input: input.chars().collect(),
            index: 0,
            position: Position::START,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.index).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.index + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.index += 1;
            self.position.offset += ch.len_utf8();
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn text_since(&self, start: Position) -> String {
        self.source[start.offset..self.position.offset].to_string()
    }

    fn error(&self, position: Position, reason: LexErrorReason) -> LexError {
        LexError { position, reason }
    }

    fn is_segment_start(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_segment_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    fn read_segment(&mut self) {
        while let Some(ch) = self.current_char() {
            if Self::is_segment_char(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads `segment(.segment)*`. Keywords are only recognized for
    /// undotted words, so `qualified.in` stays an identifier.
    fn read_identifier(&mut self, start: Position) -> Result<Token, LexError> {
        self.read_segment();
        let mut dotted = false;

        while self.current_char() == Some('.') {
            if !self.peek_char(1).is_some_and(Self::is_segment_start) {
                return Err(self.error(self.position, LexErrorReason::InvalidCharacter('.')));
            }
            dotted = true;
            self.advance(); // Consume '.'
            self.read_segment();
        }

        let word = self.text_since(start);
        if !dotted {
            if let Some(keyword) = Token::keyword(&word) {
                return Ok(keyword);
            }
        }
        Ok(Token::Identifier(word))
    }

    fn read_string(&mut self, start: Position) -> Result<Token, LexError> {
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '\'' => {
                    self.advance();
                    return Ok(Token::String(result));
                }
                '\\' => {
                    self.advance(); // Consume backslash
                    match self.current_char() {
                        Some(escaped @ ('\'' | '\\')) => result.push(escaped),
                        Some(other) => {
                            result.push('\\');
                            result.push(other);
                        }
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(self.error(start, LexErrorReason::UnterminatedString))
    }

    fn read_number(&mut self, start: Position) -> Result<Token, LexError> {
        if self.current_char() == Some('-') {
            self.advance();
        }

        let mut is_float = false;
        let mut digits = 0usize;
        let mut malformed = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                digits += 1;
                self.advance();
            } else if ch == '.' && !is_float {
                is_float = true;
                self.advance();
                if digits == 0 || !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                    malformed = true;
                    break;
                }
            } else {
                break;
            }
        }

        // A number glued to letters, underscores, or a second dot is one bad
        // word, not a number followed by an identifier.
        while let Some(ch) = self.current_char() {
            if Self::is_segment_char(ch) || ch == '.' {
                malformed = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = self.text_since(start);
        if malformed || digits == 0 {
            return Err(self.error(start, LexErrorReason::MalformedNumber(text)));
        }

        let parsed = if is_float {
            text.parse::<f64>().ok().filter(|n| n.is_finite()).map(Token::Float)
        } else {
            text.parse::<i64>().ok().map(Token::Integer)
        };

        parsed.ok_or_else(|| self.error(start, LexErrorReason::MalformedNumber(text)))
    }

    fn single(&mut self, token: Token) -> Result<Token, LexError> {
        self.advance();
        Ok(token)
    }

    fn pair(&mut self, second: char, matched: Token, alone: Token) -> Result<Token, LexError> {
        if self.peek_char(1) == Some(second) {
            self.advance();
            self.advance();
            Ok(matched)
        } else {
            self.single(alone)
        }
    }

    pub fn next_token(&mut self) -> Result<Lexeme, LexError> {
        self.skip_whitespace();
        let start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => self.single(Token::LParen)?,
            Some(')') => self.single(Token::RParen)?,
            Some(',') => self.single(Token::Comma)?,
            Some('=') => self.single(Token::Eq)?,
            Some('>') => self.pair('=', Token::GtEq, Token::Gt)?,
            Some('<') => self.pair('=', Token::LtEq, Token::Lt)?,
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    return Err(self.error(start, LexErrorReason::InvalidCharacter('!')));
                }
            }
            Some('\'') => self.read_string(start)?,
            Some(ch) if Self::is_segment_start(ch) => self.read_identifier(start)?,
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '.' => {
                self.read_number(start)?
            }
            Some(ch) => return Err(self.error(start, LexErrorReason::InvalidCharacter(ch))),
        };

        Ok(Lexeme {
            token,
            text: self.text_since(start),
            position: start,
        })
    }
}

/// Split `input` into lexemes, ending with a single [`Token::Eof`] lexeme.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut lexemes = Vec::new();

    loop {
        let lexeme = lexer.next_token()?;
        tracing::trace!(token = %lexeme.token, offset = lexeme.position.offset, "lexeme");
        let done = lexeme.token == Token::Eof;
        lexemes.push(lexeme);
        if done {
            return Ok(lexemes);
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and OR Not in ORDER by asc DESC");
    for expected in [
        Token::And,
        Token::Or,
        Token::Not,
        Token::In,
        Token::Order,
        Token::By,
        Token::Asc,
        Token::Desc,
        Token::Eof,
    ] {
        assert_eq!(lexer.next_token().unwrap().token, expected);
    }
}

#[test]
fn test_comparison_chain() {
    let mut lexer = Lexer::new("(age>=18)");
    assert_eq!(lexer.next_token().unwrap().token, Token::LParen);
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::Identifier("age".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().token, Token::GtEq);
    assert_eq!(lexer.next_token().unwrap().token, Token::Integer(18));
    assert_eq!(lexer.next_token().unwrap().token, Token::RParen);
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}
