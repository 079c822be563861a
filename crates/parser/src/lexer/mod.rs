use {
    ast::{
        token::{Keyword, Token},
        Spanned,
    },
    std::{
        iter::Peekable,
        str::{CharIndices, FromStr},
    },
};

/// A lexer that never fails.
///
/// Anything it cannot classify is emitted as [`Token::Other`], unterminated
/// literals run to the end of the input, and comments are skipped like
/// whitespace.
pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
    // inclusive end of the last consumed char
    end: usize,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trivia();

        let &(begin, c) = self.iter.peek()?;

        let token = match c {
            '\'' => self.scan_string(),
            '"' => self.scan_quoted_identifier('"'),
            '`' => self.scan_quoted_identifier('`'),
            '[' => self.scan_quoted_identifier(']'),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(begin),
            _ => self.scan_symbol(),
        };

        Some(Spanned(token, begin..=self.end))
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
            end: 0,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let (i, c) = self.iter.next()?;
        self.end = i + c.len_utf8() - 1;
        Some(c)
    }

    fn bump_if(&mut self, func: impl Fn(char) -> bool) -> bool {
        match self.iter.peek() {
            Some(&(_, c)) if func(c) => self.bump().is_some(),
            _ => false,
        }
    }

    fn bump_while(&mut self, func: impl Fn(char) -> bool) {
        while self.bump_if(&func) {}
    }

    fn rest_starts_with(&mut self, pat: &str) -> bool {
        match self.iter.peek() {
            Some(&(i, _)) => self.src[i..].starts_with(pat),
            None => false,
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            self.bump_while(char::is_whitespace);

            if self.rest_starts_with("--") {
                self.bump_while(|c| c != '\n');
            } else if self.rest_starts_with("/*") {
                self.bump();
                self.bump();
                while !self.rest_starts_with("*/") && self.bump().is_some() {}
                self.bump();
                self.bump();
            } else {
                return;
            }
        }
    }

    fn scan_string(&mut self) -> Token {
        self.bump();

        while let Some(c) = self.bump() {
            // a doubled quote escapes itself
            if c == '\'' && !self.bump_if(|c| c == '\'') {
                break;
            }
        }

        Token::String
    }

    fn scan_quoted_identifier(&mut self, close: char) -> Token {
        self.bump();

        while let Some(c) = self.bump() {
            if c == close && (close == ']' || !self.bump_if(|c| c == close)) {
                break;
            }
        }

        Token::QuotedIdentifier
    }

    fn scan_number(&mut self) -> Token {
        self.bump_while(|c| c.is_ascii_digit());

        let mut is_float = self.bump_if(|c| c == '.');
        self.bump_while(|c| c.is_ascii_digit());

        if self.bump_if(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.bump_if(|c| c == '+' || c == '-');
            self.bump_while(|c| c.is_ascii_digit());
        }

        Token::Number { is_float }
    }

    fn scan_identifier(&mut self, begin: usize) -> Token {
        self.bump_while(|c| c.is_alphanumeric() || c == '_' || c == '$');

        Keyword::from_str(&self.src[begin..=self.end])
            .map(Token::Keyword)
            .unwrap_or(Token::Identifier)
    }

    fn scan_symbol(&mut self) -> Token {
        let Some(c) = self.bump() else {
            return Token::Other;
        };

        match c {
            '.' => Token::Period,
            '=' => {
                self.bump_if(|c| c == '=');
                Token::Equal
            }
            '<' => {
                if self.bump_if(|c| c == '>') {
                    Token::LessOrGreaterThan
                } else if self.bump_if(|c| c == '=') {
                    Token::LessThanOrEqual
                } else {
                    Token::LessThan
                }
            }
            '>' => {
                if self.bump_if(|c| c == '=') {
                    Token::GreaterThanOrEqual
                } else {
                    Token::GreaterThan
                }
            }
            '!' if self.bump_if(|c| c == '=') => Token::NotEqual,
            '|' if self.bump_if(|c| c == '|') => Token::Concat,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '?' => Token::Question,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            _ => Token::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::iter::zip};

    fn test(input: &str, expected_output: &[Spanned<Token>]) {
        let output = Lexer::new(input).collect::<Vec<_>>();

        assert_eq!(output.len(), expected_output.len());
        zip(&output, expected_output).for_each(|(a, b)| {
            assert_eq!(a.0, b.0);
            assert_eq!(a.1, b.1);
        });
    }

    /// Expects each whitespace-separated chunk of `input` to be one token.
    fn make_test(input: &str, tokens: Vec<Token>) {
        let strs = input.split_whitespace().collect::<Vec<_>>();
        assert_eq!(strs.len(), tokens.len());

        let mut offset = 0;
        let expected_output = zip(strs, tokens)
            .map(|(s, token)| {
                let begin = offset + input[offset..].find(s).unwrap();
                offset = begin + s.len();
                Spanned(token, begin..=offset - 1)
            })
            .collect::<Vec<_>>();

        test(input, &expected_output);
    }

    #[test]
    fn scan_string() {
        let input = " 'abc''DEF'  'ABC*FROM'  ";
        let tokens = vec![Token::String, Token::String];

        make_test(input, tokens);
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        test("'abc", &[Spanned(Token::String, 0..=3)]);
    }

    #[test]
    fn scan_quoted_identifier() {
        let input = "\"Order\" `a``b` [my table]x";
        let expected_output = [
            Spanned(Token::QuotedIdentifier, 0..=6),
            Spanned(Token::QuotedIdentifier, 8..=13),
            Spanned(Token::QuotedIdentifier, 15..=24),
            Spanned(Token::Identifier, 25..=25),
        ];

        test(input, &expected_output);
    }

    #[test]
    fn scan_number() {
        let input = "12 123.  123.456e+789 5e3";
        let tokens = vec![
            Token::Number { is_float: false },
            Token::Number { is_float: true },
            Token::Number { is_float: true },
            Token::Number { is_float: true },
        ];

        make_test(input, tokens);
    }

    #[test]
    fn scan_identifier() {
        let input = " SELECT abc FROM def_1 lEfT";
        let tokens = vec![
            Token::Keyword(Keyword::SELECT),
            Token::Identifier,
            Token::Keyword(Keyword::FROM),
            Token::Identifier,
            Token::Keyword(Keyword::LEFT),
        ];

        make_test(input, tokens);
    }

    #[test]
    fn scan_symbol() {
        let input = "* != < >= <> <= || ; ( ) , == #";
        let tokens = vec![
            Token::Asterisk,
            Token::NotEqual,
            Token::LessThan,
            Token::GreaterThanOrEqual,
            Token::LessOrGreaterThan,
            Token::LessThanOrEqual,
            Token::Concat,
            Token::Semicolon,
            Token::LeftParen,
            Token::RightParen,
            Token::Comma,
            Token::Equal,
            Token::Other,
        ];

        make_test(input, tokens);
    }

    #[test]
    fn comments_are_skipped() {
        let input = "-- header\nSELECT /* inline */ a -- trailing";
        let expected_output = [
            Spanned(Token::Keyword(Keyword::SELECT), 10..=15),
            Spanned(Token::Identifier, 30..=30),
        ];

        test(input, &expected_output);
    }

    #[test]
    fn unterminated_block_comment() {
        test("a /* never closed", &[Spanned(Token::Identifier, 0..=0)]);
    }

    #[test]
    fn multibyte_spans_slice_cleanly() {
        let input = "é.名前 → x";
        let tokens = Lexer::new(input).collect::<Vec<_>>();

        assert_eq!(tokens.len(), 5);
        let texts = tokens
            .iter()
            .map(|Spanned(_, span)| &input[span.clone()])
            .collect::<Vec<_>>();
        assert_eq!(texts, ["é", ".", "名前", "→", "x"]);
        assert_eq!(tokens[3].0, Token::Other);
    }
}
