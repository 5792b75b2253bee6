//! Lexer (tokenizer) for pseudocode source
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Whitespace and `#` comments are dropped here; they still advance the line,
//! column and byte offset so later tokens report their true position.

use super::ast::SourceLocation;
use std::fmt;

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,
    String,

    // Identifiers
    Ident,

    // Structural keywords (case-sensitive)
    Daca,
    Atunci,
    Altfel,
    Sf,
    Pentru,
    Executa,
    Cat,
    Timp,
    Repeta,
    Pana,
    Cand,
    Citeste,
    Scrie,

    // Logical keywords (`SAU`/`sau`, `SI`/`si`, `NOT`/`not`)
    Or,
    And,
    Not,

    // Assignment and swap
    Assign, // <-
    Swap,   // <-> or <-->

    // Comparison
    Eq,    // =
    NotEq, // !=
    Lt,    // <
    Le,    // <=
    Gt,    // >
    Ge,    // >=

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Sqrt,    // √

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    Comma,     // ,
    Semicolon, // ;

    // End of input
    Eof,
}

impl TokenKind {
    /// Look up the keyword spelled exactly `ident`, if any.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident {
            "daca" => TokenKind::Daca,
            "atunci" => TokenKind::Atunci,
            "altfel" => TokenKind::Altfel,
            "sf" => TokenKind::Sf,
            "pentru" => TokenKind::Pentru,
            "executa" => TokenKind::Executa,
            "cat" => TokenKind::Cat,
            "timp" => TokenKind::Timp,
            "repeta" => TokenKind::Repeta,
            "pana" => TokenKind::Pana,
            "cand" => TokenKind::Cand,
            "citeste" => TokenKind::Citeste,
            "scrie" => TokenKind::Scrie,
            "SAU" | "sau" => TokenKind::Or,
            "SI" | "si" => TokenKind::And,
            "NOT" | "not" => TokenKind::Not,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Daca
                | TokenKind::Atunci
                | TokenKind::Altfel
                | TokenKind::Sf
                | TokenKind::Pentru
                | TokenKind::Executa
                | TokenKind::Cat
                | TokenKind::Timp
                | TokenKind::Repeta
                | TokenKind::Pana
                | TokenKind::Cand
                | TokenKind::Citeste
                | TokenKind::Scrie
                | TokenKind::Or
                | TokenKind::And
                | TokenKind::Not
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Daca => write!(f, "'daca'"),
            TokenKind::Atunci => write!(f, "'atunci'"),
            TokenKind::Altfel => write!(f, "'altfel'"),
            TokenKind::Sf => write!(f, "'sf'"),
            TokenKind::Pentru => write!(f, "'pentru'"),
            TokenKind::Executa => write!(f, "'executa'"),
            TokenKind::Cat => write!(f, "'cat'"),
            TokenKind::Timp => write!(f, "'timp'"),
            TokenKind::Repeta => write!(f, "'repeta'"),
            TokenKind::Pana => write!(f, "'pana'"),
            TokenKind::Cand => write!(f, "'cand'"),
            TokenKind::Citeste => write!(f, "'citeste'"),
            TokenKind::Scrie => write!(f, "'scrie'"),
            TokenKind::Or => write!(f, "'sau'"),
            TokenKind::And => write!(f, "'si'"),
            TokenKind::Not => write!(f, "'not'"),
            TokenKind::Assign => write!(f, "'<-'"),
            TokenKind::Swap => write!(f, "'<->'"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Ge => write!(f, "'>='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::Sqrt => write!(f, "'√'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A single lexical unit.
///
/// `text` is the literal source slice, except for string literals where it
/// holds the content between the quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            // Keep the spelling the user wrote (`SAU` vs `sau`, `<-->` vs `<->`)
            kind if kind.is_keyword() || kind == TokenKind::Swap => {
                write!(f, "'{}'", self.text)
            }
            kind => write!(f, "{}", kind),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub reason: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.reason
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for pseudocode source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    offset: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, "", self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            reason: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        let single = |kind: TokenKind| -> Result<Token, LexError> {
            Ok(Token::new(kind, ch.to_string(), loc))
        };

        match ch {
            // String literals
            '"' | '\'' => self.string_literal(ch, loc),

            // Numeric literals
            '0'..='9' => self.number_literal(ch, loc),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, loc)),

            // `<-`, `<->`, `<-->` must win over `<`
            '<' => {
                if self.peek() == Some('-') {
                    if self.peek_ahead(1) == Some('>') {
                        self.advance();
                        self.advance();
                        Ok(Token::new(TokenKind::Swap, "<->", loc))
                    } else if self.peek_ahead(1) == Some('-') && self.peek_ahead(2) == Some('>') {
                        self.advance();
                        self.advance();
                        self.advance();
                        Ok(Token::new(TokenKind::Swap, "<-->", loc))
                    } else {
                        self.advance();
                        Ok(Token::new(TokenKind::Assign, "<-", loc))
                    }
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenKind::Le, "<=", loc))
                } else {
                    single(TokenKind::Lt)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenKind::Ge, ">=", loc))
                } else {
                    single(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenKind::NotEq, "!=", loc))
                } else {
                    Err(LexError {
                        reason: "Unexpected character: '!' (did you mean '!=' or 'not'?)"
                            .to_string(),
                        location: loc,
                    })
                }
            }
            '=' => single(TokenKind::Eq),
            '+' => single(TokenKind::Plus),
            '-' => single(TokenKind::Minus),
            '*' => single(TokenKind::Star),
            '/' => single(TokenKind::Slash),
            '%' => single(TokenKind::Percent),
            '√' => single(TokenKind::Sqrt),
            '(' => single(TokenKind::LParen),
            ')' => single(TokenKind::RParen),
            '[' => single(TokenKind::LBracket),
            ']' => single(TokenKind::RBracket),
            ',' => single(TokenKind::Comma),
            ';' => single(TokenKind::Semicolon),

            '.' => Err(LexError {
                reason: "Unexpected character: '.' (numbers must start with a digit)".to_string(),
                location: loc,
            }),

            _ => Err(LexError {
                reason: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse string literal delimited by `quote`; no escape sequences
    fn string_literal(&mut self, quote: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            if ch == quote {
                self.advance(); // consume closing quote
                return Ok(Token::new(TokenKind::String, string, loc));
            }

            if ch == '\n' || ch == '\r' {
                break;
            }

            string.push(ch);
            self.advance();
        }

        Err(LexError {
            reason: "Unterminated string literal".to_string(),
            location: loc,
        })
    }

    /// Parse numeric literal: digits, optionally `.` followed by digits
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);
        self.take_digits(&mut num_str);

        if self.peek() == Some('.') {
            if !self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError {
                    reason: format!("Invalid number literal: '{}.' has no digits after '.'", num_str),
                    location: loc,
                });
            }
            num_str.push('.');
            self.advance();
            self.take_digits(&mut num_str);
        }

        Ok(Token::new(TokenKind::Number, num_str, loc))
    }

    fn take_digits(&mut self, buf: &mut String) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                buf.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Parse identifier or keyword (exact keyword spellings win)
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match TokenKind::keyword(&ident) {
            Some(kind) => Token::new(kind, ident, loc),
            None => Token::new(TokenKind::Ident, ident, loc),
        }
    }

    /// Skip whitespace and `#` comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                self.skip_line_comment();
            } else {
                break;
            }
        }
    }

    /// Skip comment up to (not including) the line break
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.offset)
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
