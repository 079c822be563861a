use {
    super::Parser,
    ast::{
        token::{Keyword, Token},
        Spanned, TableReference,
    },
};

pub(super) type Tokens<'t> = &'t [Spanned<Token>];

/// Splits `tokens` on every `sep` that is not nested inside parentheses.
pub(super) fn split_top_level(tokens: Tokens<'_>, sep: Token) -> Vec<Tokens<'_>> {
    let mut items = vec![];
    let mut depth = 0usize;
    let mut begin = 0;

    for (i, Spanned(token, _)) in tokens.iter().enumerate() {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth = depth.saturating_sub(1),
            t if *t == sep && depth == 0 => {
                items.push(&tokens[begin..i]);
                begin = i + 1;
            }
            _ => {}
        }
    }
    items.push(&tokens[begin..]);

    items
}

/// Groups tokens into whitespace-delimited words.
pub(super) fn words(tokens: Tokens<'_>) -> Vec<Tokens<'_>> {
    tokens.chunk_by(|a, b| a.touches(b)).collect()
}

pub(super) fn is_single_keyword(tokens: Tokens<'_>, keyword: Keyword) -> bool {
    matches!(tokens, [Spanned(token, _)] if token.is_keyword(keyword))
}

/// Whether a keyword token is one part of a dotted name such as `o.order`,
/// in which case it names a column or table rather than starting a clause.
pub(super) fn is_qualified(
    prev: Option<&Spanned<Token>>,
    token: &Spanned<Token>,
    next: Option<&Spanned<Token>>,
) -> bool {
    let is_period = |t: &Spanned<Token>| t.0 == Token::Period;

    matches!(token.0, Token::Keyword(_))
        && (prev.is_some_and(|p| is_period(p) && p.touches(token))
            || next.is_some_and(|n| is_period(n) && token.touches(n)))
}

impl<'a> Parser<'a> {
    /// The source text covered by `tokens`, from the first token's start to
    /// the last token's end. `None` when `tokens` is empty.
    pub(super) fn text(&self, tokens: Tokens<'_>) -> Option<&'a str> {
        match tokens {
            [] => None,
            [first, .., last] => Some(&self.src[first.start()..=last.end()]),
            [only] => Some(&self.src[only.1.clone()]),
        }
    }

    pub(super) fn owned_text(&self, tokens: Tokens<'_>) -> Option<String> {
        self.text(tokens).map(str::to_string)
    }

    /// Reads `<name> [AS <alias> | <alias>]` from the front of `tokens`.
    /// Anything after the alias is ignored.
    pub(super) fn table_reference(&self, tokens: Tokens<'_>) -> Option<TableReference> {
        let mut words = words(tokens).into_iter();

        let name = self.owned_text(words.next()?)?;
        let alias = match words.next() {
            Some(word) if is_single_keyword(word, Keyword::AS) => words.next(),
            other => other,
        }
        .and_then(|word| self.owned_text(word));

        Some(TableReference { name, alias })
    }
}
