mod cursor;
mod token;
mod token_kind;

use crate::error::SyntaxError;
use crate::limit::LimitTracker;

use cursor::Cursor;

pub use token::Token;
pub use token_kind::TokenKind;

pub(crate) use token_kind::keyword;

/// A lexical mode. The lexer keeps a stack of these; string-shaped literals
/// and `->` property lookahead push and pop around the base scripting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside PHP tags, scanning literal text.
    Initial,
    /// The main PHP tokenizer.
    Scripting,
    /// Inside an interpolated `"…"` literal.
    DoubleQuotes,
    /// Inside an interpolated `` `…` `` literal.
    Backticks,
    /// Inside a heredoc or nowdoc body. The label is addressed into the
    /// source so nested heredocs inside `{$…}` blocks keep their own.
    Heredoc {
        label_start: usize,
        label_len: usize,
        interpolate: bool,
    },
    /// After `->`: the next label is a property name, never a keyword.
    LookingForProperty,
    /// After `${` in a string: the first label is a variable name.
    LookingForVarname,
    /// Inside `$arr[…]` appearing within a string.
    VarOffset,
}

/// One unit of lexer output.
///
/// Interpolated string literals are scanned piece by piece with the mode
/// stack, but the grammar consumes each literal as a single terminal; the
/// pieces stay addressable in the token stream.
#[derive(Debug)]
pub(crate) enum Lexed<'a> {
    Single(Token<'a>),
    Interpolated {
        kind: TokenKind,
        pieces: Vec<Token<'a>>,
    },
}

/// Tokenizes PHP source text.
///
/// ## Example
/// ```rust
/// use php_parser::{Lexer, TokenKind};
///
/// let (tokens, error) = Lexer::new("<?php echo 1;").lex();
/// assert!(error.is_none());
/// assert_eq!(tokens[1].kind(), TokenKind::Echo);
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    stack: Vec<State>,
    limit: LimitTracker,
    /// Set while scanning an interpolated literal, for error reporting.
    literal: Option<(&'static str, u32)>,
    /// Second half of a two-token emission (the close tag after its
    /// synthetic statement terminator).
    pending: Option<Token<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new instance of `Lexer` over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            stack: vec![State::Initial],
            limit: LimitTracker::new(usize::MAX),
            literal: None,
            pending: None,
            finished: false,
        }
    }

    /// Cap the number of tokens produced before lexing aborts.
    pub(crate) fn with_limit(mut self, limit: usize) -> Self {
        self.limit = LimitTracker::new(limit);
        self
    }

    /// Tokenize the whole input, flattening interpolated literals into their
    /// pieces. Returns the tokens scanned so far and the first error, if any.
    pub fn lex(mut self) -> (Vec<Token<'a>>, Option<SyntaxError>) {
        let mut tokens = Vec::new();
        loop {
            match self.next_lexed() {
                Ok(Some(Lexed::Single(token))) => tokens.push(token),
                Ok(Some(Lexed::Interpolated { pieces, .. })) => tokens.extend(pieces),
                Ok(None) => return (tokens, None),
                Err(err) => return (tokens, Some(err)),
            }
        }
    }

    /// The line the cursor is currently on, 1-based.
    pub(crate) fn current_line(&self) -> u32 {
        self.cursor.line()
    }

    /// Answer every further token request with end of input.
    pub(crate) fn terminate(&mut self) {
        self.finished = true;
    }

    /// Scan the next token, or the next whole interpolated literal.
    pub(crate) fn next_lexed(&mut self) -> Result<Option<Lexed<'a>>, SyntaxError> {
        if self.finished {
            return Ok(None);
        }
        if let Some(token) = self.pending.take() {
            return Ok(Some(Lexed::Single(token)));
        }
        if self.cursor.is_eof() {
            self.finished = true;
            return Ok(None);
        }

        let lexed = match self.scan_current()? {
            Scanned::Token(token) => Lexed::Single(token),
            Scanned::Literal(lexed) => lexed,
        };

        let produced = match &lexed {
            Lexed::Single(_) => 1,
            Lexed::Interpolated { pieces, .. } => pieces.len(),
        };
        for _ in 0..produced {
            self.limit.consume();
        }
        if self.limit.limited() {
            self.finished = true;
            return Err(SyntaxError::new(
                "token limit reached, aborting lexing",
                self.cursor.line(),
            ));
        }

        Ok(Some(lexed))
    }

    fn state(&self) -> State {
        *self.stack.last().expect("state stack is never empty")
    }

    fn push_state(&mut self, state: State) {
        self.stack.push(state);
    }

    fn pop_state(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn set_state(&mut self, state: State) {
        *self.stack.last_mut().expect("state stack is never empty") = state;
    }

    fn token(&self, kind: TokenKind, start: usize, line: u32) -> Token<'a> {
        Token::new(kind, self.cursor.slice(start, self.cursor.pos()), start, line)
    }

    fn unterminated(&self) -> SyntaxError {
        let (what, line) = self
            .literal
            .unwrap_or(("script", self.cursor.line()));
        SyntaxError::new(format!("unterminated {what}"), line)
    }

    /// Scan one token in the current mode. `LookingForProperty` and
    /// `LookingForVarname` may pop without producing a token, in which case
    /// scanning restarts in the restored mode.
    fn scan_current(&mut self) -> Result<Scanned<'a>, SyntaxError> {
        loop {
            if self.cursor.is_eof() {
                // Top-level EOF is handled by the caller; reaching it here
                // means a literal or lookahead mode is still open.
                match self.state() {
                    State::LookingForProperty => {
                        self.pop_state();
                        continue;
                    }
                    _ => return Err(self.unterminated()),
                }
            }
            match self.state() {
                State::Initial => return self.scan_initial().map(Scanned::Token),
                State::Scripting => return self.scan_scripting(),
                State::DoubleQuotes => return self.scan_quoted_body(b'"').map(Scanned::Token),
                State::Backticks => return self.scan_quoted_body(b'`').map(Scanned::Token),
                State::Heredoc { .. } => return self.scan_heredoc_body().map(Scanned::Token),
                State::VarOffset => return self.scan_var_offset().map(Scanned::Token),
                State::LookingForProperty => match self.scan_property() {
                    Some(token) => return Ok(Scanned::Token(token)),
                    None => continue,
                },
                State::LookingForVarname => match self.scan_varname() {
                    Some(token) => return Ok(Scanned::Token(token)),
                    None => continue,
                },
            }
        }
    }

    // ----- INITIAL ---------------------------------------------------------

    fn scan_initial(&mut self) -> Result<Token<'a>, SyntaxError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();

        if self.cursor.starts_with("<?") {
            return Ok(self.scan_open_tag(start, line));
        }

        // Literal text up to the next open tag.
        match self.cursor.find("<?") {
            Some(tag) => {
                while self.cursor.pos() < tag {
                    self.cursor.bump();
                }
            }
            None => {
                while !self.cursor.is_eof() {
                    self.cursor.bump();
                }
            }
        }
        Ok(self.token(TokenKind::InlineHtml, start, line))
    }

    fn scan_open_tag(&mut self, start: usize, line: u32) -> Token<'a> {
        self.set_state(State::Scripting);

        let full = self.cursor.starts_with_ci("<?php")
            && matches!(self.cursor.at(5), b' ' | b'\t' | b'\r' | b'\n' | 0);
        if full {
            self.cursor.bump_n(5);
            // The tag swallows one character of whitespace.
            if self.cursor.first() == b'\r' && self.cursor.second() == b'\n' {
                self.cursor.bump_n(2);
            } else if matches!(self.cursor.first(), b' ' | b'\t' | b'\r' | b'\n') {
                self.cursor.bump();
            }
            return self.token(TokenKind::OpenTag, start, line);
        }

        if self.cursor.starts_with("<?=") {
            self.cursor.bump_n(3);
            return self.token(TokenKind::OpenTagWithEcho, start, line);
        }

        // Short open tag.
        self.cursor.bump_n(2);
        self.token(TokenKind::OpenTag, start, line)
    }

    // ----- IN_SCRIPTING ----------------------------------------------------

    fn scan_scripting(&mut self) -> Result<Scanned<'a>, SyntaxError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let b = self.cursor.first();

        if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
            while matches!(self.cursor.first(), b' ' | b'\t' | b'\r' | b'\n') {
                self.cursor.bump();
            }
            return Ok(Scanned::Token(self.token(TokenKind::Whitespace, start, line)));
        }

        if b == b'#' || self.cursor.starts_with("//") {
            return Ok(Scanned::Token(self.scan_line_comment(start, line)));
        }
        if self.cursor.starts_with("/*") {
            return Ok(Scanned::Token(self.scan_block_comment(start, line)));
        }

        if b.is_ascii_digit() || (b == b'.' && self.cursor.second().is_ascii_digit()) {
            return Ok(Scanned::Token(self.scan_number(start, line)));
        }

        // Binary string prefix.
        if matches!(b, b'b' | b'B') {
            match self.cursor.second() {
                b'\'' => {
                    self.cursor.bump();
                    return self.scan_single_quoted(start, line).map(Scanned::Token);
                }
                b'"' => {
                    self.cursor.bump();
                    return self.scan_double_quoted(start, line);
                }
                b'<' if self.cursor.at(2) == b'<' && self.cursor.at(3) == b'<' => {
                    self.cursor.bump();
                    return self.scan_heredoc(start, line);
                }
                _ => {}
            }
        }

        if is_label_start(b) {
            while is_label_byte(self.cursor.first()) {
                self.cursor.bump();
            }
            let text = self.cursor.slice(start, self.cursor.pos());
            let kind = keyword(text).unwrap_or(TokenKind::String);
            return Ok(Scanned::Token(self.token(kind, start, line)));
        }

        if b == b'$' && is_label_start(self.cursor.second()) {
            self.cursor.bump();
            while is_label_byte(self.cursor.first()) {
                self.cursor.bump();
            }
            return Ok(Scanned::Token(self.token(TokenKind::Variable, start, line)));
        }

        if b == b'\'' {
            return self.scan_single_quoted(start, line).map(Scanned::Token);
        }
        if b == b'"' {
            return self.scan_double_quoted(start, line);
        }
        if b == b'`' {
            return self.scan_backticks(start, line);
        }
        if self.cursor.starts_with("<<<") {
            return self.scan_heredoc(start, line);
        }

        if b == b'(' {
            if let Some(token) = self.scan_cast(start, line) {
                return Ok(Scanned::Token(token));
            }
        }

        self.scan_operator(start, line).map(Scanned::Token)
    }

    fn scan_line_comment(&mut self, start: usize, line: u32) -> Token<'a> {
        while !self.cursor.is_eof() {
            if self.cursor.first() == b'\n' || self.cursor.starts_with("?>") {
                break;
            }
            self.cursor.bump();
        }
        self.token(TokenKind::Comment, start, line)
    }

    fn scan_block_comment(&mut self, start: usize, line: u32) -> Token<'a> {
        let doc = self.cursor.starts_with("/**")
            && matches!(self.cursor.at(3), b' ' | b'\t' | b'\r' | b'\n');
        self.cursor.bump_n(2);
        while !self.cursor.is_eof() {
            if self.cursor.starts_with("*/") {
                self.cursor.bump_n(2);
                break;
            }
            self.cursor.bump();
        }
        let kind = if doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        };
        self.token(kind, start, line)
    }

    fn scan_number(&mut self, start: usize, line: u32) -> Token<'a> {
        // Hex and binary literals.
        let radix = if self.cursor.first() == b'0' {
            match self.cursor.second() {
                b'x' | b'X' if self.cursor.at(2).is_ascii_hexdigit() => Some(16),
                b'b' | b'B' if matches!(self.cursor.at(2), b'0' | b'1') => Some(2),
                _ => None,
            }
        } else {
            None
        };
        if let Some(radix) = radix {
            self.cursor.bump_n(2);
            let digits = self.cursor.pos();
            let in_radix = |b: u8| {
                if radix == 16 {
                    b.is_ascii_hexdigit()
                } else {
                    matches!(b, b'0' | b'1')
                }
            };
            while in_radix(self.cursor.first()) {
                self.cursor.bump();
            }
            let text = self.cursor.slice(digits, self.cursor.pos());
            let kind = match i64::from_str_radix(text, radix) {
                Ok(_) => TokenKind::Lnumber,
                // Too wide for the host integer: it is a float literal.
                Err(_) => TokenKind::Dnumber,
            };
            return self.token(kind, start, line);
        }

        let mut float = false;
        while self.cursor.first().is_ascii_digit() {
            self.cursor.bump();
        }
        if self.cursor.first() == b'.' {
            let had_int = self.cursor.pos() > start;
            if self.cursor.second().is_ascii_digit() {
                self.cursor.bump();
                while self.cursor.first().is_ascii_digit() {
                    self.cursor.bump();
                }
                float = true;
            } else if had_int {
                self.cursor.bump();
                float = true;
            }
        }
        if matches!(self.cursor.first(), b'e' | b'E') {
            let mut ahead = 1;
            if matches!(self.cursor.second(), b'+' | b'-') {
                ahead = 2;
            }
            if self.cursor.at(ahead).is_ascii_digit() {
                self.cursor.bump_n(ahead);
                while self.cursor.first().is_ascii_digit() {
                    self.cursor.bump();
                }
                float = true;
            }
        }

        let text = self.cursor.slice(start, self.cursor.pos());
        let kind = if float {
            TokenKind::Dnumber
        } else {
            let parsed = if text.len() > 1 && text.starts_with('0') {
                i64::from_str_radix(&text[1..], 8)
            } else {
                text.parse::<i64>()
            };
            match parsed {
                Err(err) if matches!(err.kind(), std::num::IntErrorKind::PosOverflow) => {
                    TokenKind::Dnumber
                }
                _ => TokenKind::Lnumber,
            }
        };
        self.token(kind, start, line)
    }

    /// `(` followed by a cast keyword and `)` is a single cast token.
    fn scan_cast(&mut self, start: usize, line: u32) -> Option<Token<'a>> {
        let mut n = 1;
        while matches!(self.cursor.at(n), b' ' | b'\t') {
            n += 1;
        }
        let word_start = n;
        while self.cursor.at(n).is_ascii_alphabetic() {
            n += 1;
        }
        let word_end = n;
        while matches!(self.cursor.at(n), b' ' | b'\t') {
            n += 1;
        }
        if self.cursor.at(n) != b')' {
            return None;
        }

        let word = self
            .cursor
            .slice(start + word_start, start + word_end)
            .to_ascii_lowercase();
        let kind = match word.as_str() {
            "int" | "integer" => TokenKind::IntCast,
            "bool" | "boolean" => TokenKind::BoolCast,
            "float" | "double" | "real" => TokenKind::DoubleCast,
            "string" => TokenKind::StringCast,
            "binary" => TokenKind::BinaryCast,
            "unicode" => TokenKind::UnicodeCast,
            "array" => TokenKind::ArrayCast,
            "object" => TokenKind::ObjectCast,
            "unset" => TokenKind::UnsetCast,
            _ => return None,
        };
        self.cursor.bump_n(n + 1);
        Some(self.token(kind, start, line))
    }

    fn scan_operator(&mut self, start: usize, line: u32) -> Result<Token<'a>, SyntaxError> {
        let b = self.cursor.first();
        let (len, kind) = match b {
            b'<' => {
                if self.cursor.starts_with("<<=") {
                    (3, TokenKind::SlEqual)
                } else if self.cursor.starts_with("<=>") {
                    (3, TokenKind::Spaceship)
                } else if self.cursor.starts_with("<<") {
                    (2, TokenKind::Sl)
                } else if self.cursor.starts_with("<=") {
                    (2, TokenKind::IsSmallerOrEqual)
                } else if self.cursor.starts_with("<>") {
                    // Same token as `!=`; the spelling stays in the slice.
                    (2, TokenKind::IsNotEqual)
                } else {
                    (1, TokenKind::Lt)
                }
            }
            b'>' => {
                if self.cursor.starts_with(">>=") {
                    (3, TokenKind::SrEqual)
                } else if self.cursor.starts_with(">>") {
                    (2, TokenKind::Sr)
                } else if self.cursor.starts_with(">=") {
                    (2, TokenKind::IsGreaterOrEqual)
                } else {
                    (1, TokenKind::Gt)
                }
            }
            b'=' => {
                if self.cursor.starts_with("===") {
                    (3, TokenKind::IsIdentical)
                } else if self.cursor.starts_with("==") {
                    (2, TokenKind::IsEqual)
                } else if self.cursor.starts_with("=>") {
                    (2, TokenKind::DoubleArrow)
                } else {
                    (1, TokenKind::Eq)
                }
            }
            b'!' => {
                if self.cursor.starts_with("!==") {
                    (3, TokenKind::IsNotIdentical)
                } else if self.cursor.starts_with("!=") {
                    (2, TokenKind::IsNotEqual)
                } else {
                    (1, TokenKind::Bang)
                }
            }
            b'+' => {
                if self.cursor.starts_with("+=") {
                    (2, TokenKind::PlusEqual)
                } else if self.cursor.starts_with("++") {
                    (2, TokenKind::Inc)
                } else {
                    (1, TokenKind::Plus)
                }
            }
            b'-' => {
                if self.cursor.starts_with("-=") {
                    (2, TokenKind::MinusEqual)
                } else if self.cursor.starts_with("--") {
                    (2, TokenKind::Dec)
                } else if self.cursor.starts_with("->") {
                    self.push_state(State::LookingForProperty);
                    (2, TokenKind::ObjectOperator)
                } else {
                    (1, TokenKind::Minus)
                }
            }
            b'*' => {
                if self.cursor.starts_with("*=") {
                    (2, TokenKind::MulEqual)
                } else {
                    (1, TokenKind::Star)
                }
            }
            b'/' => {
                if self.cursor.starts_with("/=") {
                    (2, TokenKind::DivEqual)
                } else {
                    (1, TokenKind::Slash)
                }
            }
            b'.' => {
                if self.cursor.starts_with("...") {
                    (3, TokenKind::Ellipsis)
                } else if self.cursor.starts_with(".=") {
                    (2, TokenKind::ConcatEqual)
                } else {
                    (1, TokenKind::Dot)
                }
            }
            b'%' => {
                if self.cursor.starts_with("%=") {
                    (2, TokenKind::ModEqual)
                } else {
                    (1, TokenKind::Percent)
                }
            }
            b'&' => {
                if self.cursor.starts_with("&&") {
                    (2, TokenKind::BooleanAnd)
                } else if self.cursor.starts_with("&=") {
                    (2, TokenKind::AndEqual)
                } else {
                    (1, TokenKind::Amp)
                }
            }
            b'|' => {
                if self.cursor.starts_with("||") {
                    (2, TokenKind::BooleanOr)
                } else if self.cursor.starts_with("|=") {
                    (2, TokenKind::OrEqual)
                } else {
                    (1, TokenKind::Pipe)
                }
            }
            b'^' => {
                if self.cursor.starts_with("^=") {
                    (2, TokenKind::XorEqual)
                } else {
                    (1, TokenKind::Caret)
                }
            }
            b'?' => {
                if self.cursor.starts_with("?>") && self.literal.is_none() {
                    return Ok(self.scan_close_tag(start, line));
                } else if self.cursor.starts_with("??") {
                    (2, TokenKind::Coalesce)
                } else {
                    (1, TokenKind::Question)
                }
            }
            b':' => {
                if self.cursor.starts_with("::") {
                    (2, TokenKind::PaamayimNekudotayim)
                } else {
                    (1, TokenKind::Colon)
                }
            }
            b'{' => {
                self.push_state(State::Scripting);
                (1, TokenKind::LBrace)
            }
            b'}' => {
                self.pop_state();
                (1, TokenKind::RBrace)
            }
            b'(' => (1, TokenKind::LParen),
            b')' => (1, TokenKind::RParen),
            b'[' => (1, TokenKind::LBracket),
            b']' => (1, TokenKind::RBracket),
            b';' => (1, TokenKind::Semicolon),
            b',' => (1, TokenKind::Comma),
            b'@' => (1, TokenKind::At),
            b'~' => (1, TokenKind::Tilde),
            b'$' => (1, TokenKind::Dollar),
            b'\\' => (1, TokenKind::NsSeparator),
            _ => {
                return Err(SyntaxError::new(
                    format!("unexpected character {:?}", b as char),
                    line,
                ));
            }
        };
        self.cursor.bump_n(len);
        Ok(self.token(kind, start, line))
    }

    /// `?>` terminates the current statement exactly like `;` before
    /// dropping back to inline HTML, so the parser sees a zero-width
    /// semicolon followed by the close tag.
    fn scan_close_tag(&mut self, start: usize, line: u32) -> Token<'a> {
        let semicolon = Token::new(
            TokenKind::Semicolon,
            self.cursor.slice(start, start),
            start,
            line,
        );
        self.cursor.bump_n(2);
        // The close tag swallows one following newline.
        if self.cursor.first() == b'\r' && self.cursor.second() == b'\n' {
            self.cursor.bump_n(2);
        } else if self.cursor.first() == b'\n' {
            self.cursor.bump();
        }
        self.set_state(State::Initial);
        self.pending = Some(self.token(TokenKind::CloseTag, start, line));
        semicolon
    }

    // ----- String literals -------------------------------------------------

    fn scan_single_quoted(&mut self, start: usize, line: u32) -> Result<Token<'a>, SyntaxError> {
        self.cursor.bump();
        loop {
            match self.cursor.first() {
                b'\\' => self.cursor.bump_n(2),
                b'\'' => {
                    self.cursor.bump();
                    return Ok(self.token(TokenKind::ConstantEncapsedString, start, line));
                }
                _ if self.cursor.is_eof() => {
                    return Err(SyntaxError::new("unterminated single-quoted string", line));
                }
                _ => self.cursor.bump(),
            }
        }
    }

    fn scan_double_quoted(&mut self, start: usize, line: u32) -> Result<Scanned<'a>, SyntaxError> {
        match self.prescan_quoted(b'"') {
            None => Err(SyntaxError::new("unterminated double-quoted string", line)),
            Some(false) => {
                // No interpolation: the whole literal is one token.
                self.consume_plain_quoted(b'"');
                Ok(Scanned::Token(self.token(
                    TokenKind::ConstantEncapsedString,
                    start,
                    line,
                )))
            }
            Some(true) => {
                self.literal = Some(("double-quoted string", line));
                self.cursor.bump();
                let open = self.token(TokenKind::EncapsedAndWhitespace, start, line);
                self.push_state(State::DoubleQuotes);
                let lexed = self.scan_literal_pieces(TokenKind::ConstantEncapsedString, open)?;
                self.literal = None;
                Ok(Scanned::Literal(lexed))
            }
        }
    }

    fn scan_backticks(&mut self, start: usize, line: u32) -> Result<Scanned<'a>, SyntaxError> {
        match self.prescan_quoted(b'`') {
            None => Err(SyntaxError::new("unterminated backtick expression", line)),
            Some(false) => {
                self.consume_plain_quoted(b'`');
                Ok(Scanned::Token(self.token(
                    TokenKind::BackticksExpr,
                    start,
                    line,
                )))
            }
            Some(true) => {
                self.literal = Some(("backtick expression", line));
                self.cursor.bump();
                let open = self.token(TokenKind::EncapsedAndWhitespace, start, line);
                self.push_state(State::Backticks);
                let lexed = self.scan_literal_pieces(TokenKind::BackticksExpr, open)?;
                self.literal = None;
                Ok(Scanned::Literal(lexed))
            }
        }
    }

    /// Look ahead over a quoted literal. Returns whether it interpolates, or
    /// `None` when the closing delimiter is missing.
    fn prescan_quoted(&self, delim: u8) -> Option<bool> {
        let mut n = 1;
        let mut interpolates = false;
        loop {
            if !self.cursor.in_bounds(n) {
                return None;
            }
            let b = self.cursor.at(n);
            if b == b'\\' {
                n += 2;
                continue;
            }
            if b == delim {
                return Some(interpolates);
            }
            if b == b'$' && (is_label_start(self.cursor.at(n + 1)) || self.cursor.at(n + 1) == b'{')
            {
                interpolates = true;
            }
            if b == b'{' && self.cursor.at(n + 1) == b'$' {
                interpolates = true;
            }
            n += 1;
        }
    }

    /// Consume a quoted literal already known to be plain and terminated.
    fn consume_plain_quoted(&mut self, delim: u8) {
        self.cursor.bump();
        loop {
            match self.cursor.first() {
                b'\\' => self.cursor.bump_n(2),
                b if b == delim => {
                    self.cursor.bump();
                    return;
                }
                _ => self.cursor.bump(),
            }
        }
    }

    /// Collect pieces until the literal's mode pops off the stack.
    fn scan_literal_pieces(
        &mut self,
        kind: TokenKind,
        open: Token<'a>,
    ) -> Result<Lexed<'a>, SyntaxError> {
        let depth = self.stack.len();
        let mut pieces = vec![open];
        while self.stack.len() >= depth {
            if self.cursor.is_eof() && !matches!(self.state(), State::LookingForProperty) {
                return Err(self.unterminated());
            }
            match self.scan_current()? {
                Scanned::Token(token) => pieces.push(token),
                Scanned::Literal(Lexed::Single(token)) => pieces.push(token),
                Scanned::Literal(Lexed::Interpolated { pieces: inner, .. }) => {
                    pieces.extend(inner);
                }
            }
        }
        Ok(Lexed::Interpolated { kind, pieces })
    }

    fn at_interpolation(&self) -> bool {
        let b = self.cursor.first();
        (b == b'$' && (is_label_start(self.cursor.second()) || self.cursor.second() == b'{'))
            || (b == b'{' && self.cursor.second() == b'$')
    }

    /// Body scanner for `"…"` and `` `…` `` modes: one piece per call.
    fn scan_quoted_body(&mut self, delim: u8) -> Result<Token<'a>, SyntaxError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();

        if self.cursor.first() == delim {
            self.cursor.bump();
            self.pop_state();
            return Ok(self.token(TokenKind::EncapsedAndWhitespace, start, line));
        }
        if self.at_interpolation() {
            return Ok(self.scan_interpolation_opener());
        }

        loop {
            if self.cursor.is_eof() {
                return Err(self.unterminated());
            }
            let b = self.cursor.first();
            if b == b'\\' {
                self.cursor.bump_n(2);
                continue;
            }
            if b == delim || self.at_interpolation() {
                break;
            }
            self.cursor.bump();
        }
        Ok(self.token(TokenKind::EncapsedAndWhitespace, start, line))
    }

    /// At `$name`, `${` or `{$` inside an interpolating literal.
    fn scan_interpolation_opener(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        let line = self.cursor.line();

        if self.cursor.first() == b'{' {
            self.cursor.bump();
            self.push_state(State::Scripting);
            return self.token(TokenKind::CurlyOpen, start, line);
        }
        if self.cursor.second() == b'{' {
            self.cursor.bump_n(2);
            self.push_state(State::LookingForVarname);
            return self.token(TokenKind::DollarOpenCurlyBraces, start, line);
        }

        // `$name`, optionally followed by one offset or property access.
        self.cursor.bump();
        while is_label_byte(self.cursor.first()) {
            self.cursor.bump();
        }
        if self.cursor.first() == b'[' {
            self.push_state(State::VarOffset);
        } else if self.cursor.first() == b'-'
            && self.cursor.second() == b'>'
            && is_label_start(self.cursor.at(2))
        {
            self.push_state(State::LookingForProperty);
        }
        self.token(TokenKind::Variable, start, line)
    }

    // ----- Heredoc / nowdoc ------------------------------------------------

    fn scan_heredoc(&mut self, start: usize, line: u32) -> Result<Scanned<'a>, SyntaxError> {
        self.cursor.bump_n(3);
        while matches!(self.cursor.first(), b' ' | b'\t') {
            self.cursor.bump();
        }
        let quote = match self.cursor.first() {
            b'\'' | b'"' => {
                let q = self.cursor.first();
                self.cursor.bump();
                Some(q)
            }
            _ => None,
        };
        if !is_label_start(self.cursor.first()) {
            return Err(SyntaxError::new("invalid heredoc label", line));
        }
        let label_start = self.cursor.pos();
        while is_label_byte(self.cursor.first()) {
            self.cursor.bump();
        }
        let label_len = self.cursor.pos() - label_start;
        if let Some(q) = quote {
            if self.cursor.first() != q {
                return Err(SyntaxError::new("invalid heredoc label", line));
            }
            self.cursor.bump();
        }
        if self.cursor.first() == b'\r' && self.cursor.second() == b'\n' {
            self.cursor.bump_n(2);
        } else if self.cursor.first() == b'\n' {
            self.cursor.bump();
        } else {
            return Err(SyntaxError::new("invalid heredoc label", line));
        }

        let open = self.token(TokenKind::StartHeredoc, start, line);
        let interpolate = quote != Some(b'\'');
        self.literal = Some((if interpolate { "heredoc" } else { "nowdoc" }, line));
        self.push_state(State::Heredoc {
            label_start,
            label_len,
            interpolate,
        });
        let lexed = self.scan_literal_pieces(TokenKind::Heredoc, open)?;
        self.literal = None;
        Ok(Scanned::Literal(lexed))
    }

    /// True when the text at the cursor is a heredoc terminator line:
    /// optional indentation, the label, and no further label character.
    fn at_heredoc_end(&self, label_start: usize, label_len: usize) -> bool {
        let mut n = 0;
        while matches!(self.cursor.at(n), b' ' | b'\t') {
            n += 1;
        }
        let label = self.cursor.slice(label_start, label_start + label_len);
        for (i, &b) in label.as_bytes().iter().enumerate() {
            if self.cursor.at(n + i) != b {
                return false;
            }
        }
        !is_label_byte(self.cursor.at(n + label_len))
    }

    fn scan_heredoc_body(&mut self) -> Result<Token<'a>, SyntaxError> {
        let State::Heredoc {
            label_start,
            label_len,
            interpolate,
        } = self.state()
        else {
            unreachable!("scan_heredoc_body outside heredoc mode");
        };
        let start = self.cursor.pos();
        let line = self.cursor.line();

        if self.cursor.prev() == b'\n' && self.at_heredoc_end(label_start, label_len) {
            while matches!(self.cursor.first(), b' ' | b'\t') {
                self.cursor.bump();
            }
            self.cursor.bump_n(label_len);
            self.pop_state();
            return Ok(self.token(TokenKind::EndHeredoc, start, line));
        }
        if interpolate && self.at_interpolation() {
            return Ok(self.scan_interpolation_opener());
        }

        loop {
            if self.cursor.is_eof() {
                return Err(self.unterminated());
            }
            let b = self.cursor.first();
            if interpolate {
                if b == b'\\' {
                    self.cursor.bump_n(2);
                    continue;
                }
                if self.at_interpolation() {
                    break;
                }
            }
            if b == b'\n' {
                self.cursor.bump();
                if self.at_heredoc_end(label_start, label_len) {
                    break;
                }
                continue;
            }
            self.cursor.bump();
        }
        Ok(self.token(TokenKind::EncapsedAndWhitespace, start, line))
    }

    // ----- Lookahead modes -------------------------------------------------

    /// `LOOKING_FOR_PROPERTY`: whitespace is allowed before the property
    /// name in scripting context; anything that is not a label pops back
    /// without producing a token.
    fn scan_property(&mut self) -> Option<Token<'a>> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let b = self.cursor.first();

        if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
            while matches!(self.cursor.first(), b' ' | b'\t' | b'\r' | b'\n') {
                self.cursor.bump();
            }
            return Some(self.token(TokenKind::Whitespace, start, line));
        }
        if self.cursor.starts_with("->") {
            self.cursor.bump_n(2);
            return Some(self.token(TokenKind::ObjectOperator, start, line));
        }
        if is_label_start(b) {
            while is_label_byte(self.cursor.first()) {
                self.cursor.bump();
            }
            self.pop_state();
            return Some(self.token(TokenKind::String, start, line));
        }
        self.pop_state();
        None
    }

    /// `LOOKING_FOR_VARNAME`: a label directly followed by `}` or `[` is the
    /// variable name; anything else re-scans as a full expression.
    fn scan_varname(&mut self) -> Option<Token<'a>> {
        if is_label_start(self.cursor.first()) {
            let mut n = 1;
            while is_label_byte(self.cursor.at(n)) {
                n += 1;
            }
            if matches!(self.cursor.at(n), b'}' | b'[') {
                let start = self.cursor.pos();
                let line = self.cursor.line();
                self.cursor.bump_n(n);
                self.set_state(State::Scripting);
                return Some(self.token(TokenKind::StringVarname, start, line));
            }
        }
        self.set_state(State::Scripting);
        None
    }

    /// `VAR_OFFSET`: the index of `$arr[…]` inside a string literal.
    fn scan_var_offset(&mut self) -> Result<Token<'a>, SyntaxError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let b = self.cursor.first();
        match b {
            b'[' => {
                self.cursor.bump();
                Ok(self.token(TokenKind::LBracket, start, line))
            }
            b']' => {
                self.cursor.bump();
                self.pop_state();
                Ok(self.token(TokenKind::RBracket, start, line))
            }
            b'$' if is_label_start(self.cursor.second()) => {
                self.cursor.bump();
                while is_label_byte(self.cursor.first()) {
                    self.cursor.bump();
                }
                Ok(self.token(TokenKind::Variable, start, line))
            }
            b'-' => {
                self.cursor.bump();
                Ok(self.token(TokenKind::Minus, start, line))
            }
            _ if b.is_ascii_digit() => {
                if b == b'0' && matches!(self.cursor.second(), b'x' | b'X' | b'b' | b'B') {
                    self.cursor.bump_n(2);
                }
                while self.cursor.first().is_ascii_hexdigit() {
                    self.cursor.bump();
                }
                Ok(self.token(TokenKind::NumString, start, line))
            }
            _ if is_label_start(b) => {
                while is_label_byte(self.cursor.first()) {
                    self.cursor.bump();
                }
                Ok(self.token(TokenKind::String, start, line))
            }
            _ => Err(SyntaxError::new(
                format!("unexpected character {:?} in string offset", b as char),
                line,
            )),
        }
    }
}

enum Scanned<'a> {
    Token(Token<'a>),
    Literal(Lexed<'a>),
}

fn is_label_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let (tokens, error) = Lexer::new(input).lex();
        assert!(error.is_none(), "unexpected error: {error:?}");
        tokens.iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn scripting_basics() {
        assert_eq!(
            kinds("<?php $a = 1;"),
            vec![
                TokenKind::OpenTag,
                TokenKind::Variable,
                TokenKind::Whitespace,
                TokenKind::Eq,
                TokenKind::Whitespace,
                TokenKind::Lnumber,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn open_tag_swallows_one_whitespace() {
        let (tokens, _) = Lexer::new("<?php  echo").lex();
        assert_eq!(tokens[0].data(), "<?php ");
        assert_eq!(tokens[1].data(), " ");
    }

    #[test]
    fn short_and_echo_tags() {
        assert_eq!(kinds("<? 1;")[0], TokenKind::OpenTag);
        assert_eq!(kinds("<?= 1;")[0], TokenKind::OpenTagWithEcho);
    }

    #[test]
    fn inline_html_around_tags() {
        let (tokens, _) = Lexer::new("a<?php 1;?>b").lex();
        assert_eq!(tokens[0].kind(), TokenKind::InlineHtml);
        assert_eq!(tokens[0].data(), "a");
        assert_eq!(tokens.last().unwrap().kind(), TokenKind::InlineHtml);
        assert_eq!(tokens.last().unwrap().data(), "b");
    }

    #[test]
    fn close_tag_swallows_newline() {
        let (tokens, _) = Lexer::new("<?php 1;?>\nhtml").lex();
        let close = tokens
            .iter()
            .find(|t| t.kind() == TokenKind::CloseTag)
            .unwrap();
        assert_eq!(close.data(), "?>\n");
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(kinds("<?php CLASS Foo {}")[1], TokenKind::Class);
    }

    #[test]
    fn property_name_is_never_a_keyword() {
        let toks = kinds("<?php $a->class;");
        assert_eq!(
            toks,
            vec![
                TokenKind::OpenTag,
                TokenKind::Variable,
                TokenKind::ObjectOperator,
                TokenKind::String,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn property_lookahead_allows_whitespace() {
        let toks = kinds("<?php $a -> list;");
        assert_eq!(toks[3], TokenKind::ObjectOperator);
        assert_eq!(toks[5], TokenKind::String);
    }

    #[test]
    fn casts_are_single_tokens() {
        assert_eq!(kinds("<?php (int) $a;")[1], TokenKind::IntCast);
        assert_eq!(kinds("<?php ( BOOL ) $a;")[1], TokenKind::BoolCast);
        // Not a cast keyword: plain parenthesis.
        assert_eq!(kinds("<?php (foo) ;")[1], TokenKind::LParen);
    }

    #[test]
    fn number_bases() {
        assert_eq!(kinds("<?php 0x1f;")[1], TokenKind::Lnumber);
        assert_eq!(kinds("<?php 0b101;")[1], TokenKind::Lnumber);
        assert_eq!(kinds("<?php 0755;")[1], TokenKind::Lnumber);
        assert_eq!(kinds("<?php 1.5e3;")[1], TokenKind::Dnumber);
        assert_eq!(kinds("<?php .5;")[1], TokenKind::Dnumber);
    }

    #[test]
    fn integer_overflow_becomes_float() {
        assert_eq!(kinds("<?php 9223372036854775807;")[1], TokenKind::Lnumber);
        assert_eq!(kinds("<?php 9223372036854775808;")[1], TokenKind::Dnumber);
        assert_eq!(kinds("<?php 0xffffffffffffffff;")[1], TokenKind::Dnumber);
    }

    #[test]
    fn operators_longest_match() {
        assert_eq!(kinds("<?php 1 <=> 2;")[3], TokenKind::Spaceship);
        assert_eq!(kinds("<?php 1 <> 2;")[3], TokenKind::IsNotEqual);
        assert_eq!(kinds("<?php $a ?? $b;")[3], TokenKind::Coalesce);
        assert_eq!(kinds("<?php $a <<= 2;")[3], TokenKind::SlEqual);
        assert_eq!(kinds("<?php f(...$a);")[3], TokenKind::Ellipsis);
    }

    #[test]
    fn plain_strings_are_single_tokens() {
        let toks = kinds("<?php 'a$b' . \"plain\";");
        assert_eq!(toks[1], TokenKind::ConstantEncapsedString);
        assert_eq!(toks[5], TokenKind::ConstantEncapsedString);
    }

    #[test]
    fn interpolated_string_pieces() {
        let toks = kinds("<?php \"a $name b\";");
        assert_eq!(
            toks[1..5],
            [
                TokenKind::EncapsedAndWhitespace,
                TokenKind::EncapsedAndWhitespace,
                TokenKind::Variable,
                TokenKind::EncapsedAndWhitespace,
            ]
        );
    }

    #[test]
    fn escaped_dollar_does_not_interpolate() {
        let toks = kinds("<?php \"a \\$name b\";");
        assert_eq!(toks[1], TokenKind::ConstantEncapsedString);
    }

    #[test]
    fn string_offset_pieces() {
        let (tokens, error) = Lexer::new("<?php \"x $a[0] $b[k] $c[$d]\";").lex();
        assert!(error.is_none());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert!(kinds.contains(&TokenKind::NumString));
        assert!(kinds
            .windows(2)
            .any(|w| w[0] == TokenKind::LBracket && w[1] == TokenKind::String));
        let vars = kinds
            .iter()
            .filter(|k| **k == TokenKind::Variable)
            .count();
        assert_eq!(vars, 4);
    }

    #[test]
    fn dollar_brace_varname() {
        let toks = kinds("<?php \"${name}\";");
        assert_eq!(
            toks[1..6],
            [
                TokenKind::EncapsedAndWhitespace,
                TokenKind::DollarOpenCurlyBraces,
                TokenKind::StringVarname,
                TokenKind::RBrace,
                TokenKind::EncapsedAndWhitespace,
            ]
        );
    }

    #[test]
    fn curly_open_block_lexes_as_script() {
        let toks = kinds("<?php \"{$a->b[1]}\";");
        assert_eq!(toks[2], TokenKind::CurlyOpen);
        assert!(toks.contains(&TokenKind::ObjectOperator));
        assert!(toks.contains(&TokenKind::Lnumber));
    }

    #[test]
    fn heredoc_is_one_terminal_with_pieces() {
        let source = "<?php $x = <<<EOT\nhello $name\nEOT;\n";
        let (tokens, error) = Lexer::new(source).lex();
        assert!(error.is_none());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert!(kinds.contains(&TokenKind::StartHeredoc));
        assert!(kinds.contains(&TokenKind::Variable));
        assert!(kinds.contains(&TokenKind::EndHeredoc));
    }

    #[test]
    fn heredoc_label_inside_body_does_not_terminate() {
        let source = "<?php <<<EOT\nthe EOT label mid-line\n EOTX\nEOT;\n";
        let (tokens, error) = Lexer::new(source).lex();
        assert!(error.is_none(), "{error:?}");
        let end = tokens
            .iter()
            .find(|t| t.kind() == TokenKind::EndHeredoc)
            .unwrap();
        assert_eq!(end.index(), source.len() - 5);
    }

    #[test]
    fn heredoc_end_may_be_indented() {
        let source = "<?php <<<EOT\nbody\n  EOT;\n";
        let (tokens, error) = Lexer::new(source).lex();
        assert!(error.is_none());
        let end = tokens
            .iter()
            .find(|t| t.kind() == TokenKind::EndHeredoc)
            .unwrap();
        assert_eq!(end.data(), "  EOT");
    }

    #[test]
    fn nowdoc_does_not_interpolate() {
        let source = "<?php <<<'EOT'\nno $var here\nEOT;\n";
        let (tokens, error) = Lexer::new(source).lex();
        assert!(error.is_none());
        assert!(!tokens.iter().any(|t| t.kind() == TokenKind::Variable));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let (_, error) = Lexer::new("<?php 'oops").lex();
        assert!(error.unwrap().message().contains("unterminated"));
        let (_, error) = Lexer::new("<?php \"oops $a").lex();
        assert!(error.unwrap().message().contains("unterminated"));
        let (_, error) = Lexer::new("<?php <<<EOT\nnever ends").lex();
        assert!(error.unwrap().message().contains("unterminated heredoc"));
    }

    #[test]
    fn stray_byte_reports_line() {
        let (_, error) = Lexer::new("<?php\n\n1 \x01;").lex();
        let error = error.unwrap();
        assert_eq!(error.line(), 3);
        assert!(error.message().contains("unexpected character"));
    }

    #[test]
    fn comments_and_doc_comments() {
        let toks = kinds("<?php // line\n# hash\n/* block */ /** doc */ 1;");
        assert_eq!(
            toks.iter()
                .filter(|k| **k == TokenKind::Comment)
                .count(),
            3
        );
        assert_eq!(
            toks.iter()
                .filter(|k| **k == TokenKind::DocComment)
                .count(),
            1
        );
    }

    #[test]
    fn line_comment_stops_before_close_tag() {
        let (tokens, _) = Lexer::new("<?php // c ?>x").lex();
        let comment = tokens.iter().find(|t| t.kind() == TokenKind::Comment).unwrap();
        assert_eq!(comment.data(), "// c ");
        assert!(tokens.iter().any(|t| t.kind() == TokenKind::CloseTag));
    }

    #[test]
    fn lines_are_tracked() {
        let (tokens, _) = Lexer::new("<?php\n$a;\n$b;").lex();
        let b = tokens.iter().find(|t| t.data() == "$b").unwrap();
        assert_eq!(b.line(), 3);
    }
}
