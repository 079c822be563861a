mod classify;
mod common;
mod join;
mod query;

pub use self::classify::classify;

use {
    crate::lexer::Lexer,
    ast::{token::Token, ParsedQuery, Spanned, StatementKind},
    tracing::debug,
};

pub(crate) const TARGET: &str = "sqlscope::parser";

pub struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Spanned<Token>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).collect(),
        }
    }

    /// Decomposes `sql`. The returned record echoes the trimmed input as `raw`.
    pub fn parse(sql: &'a str) -> ParsedQuery {
        let src = sql.trim();
        let parser = Self::new(src);

        let kind = parser.statement_kind();
        debug!(target: TARGET, %kind, len = src.len(), "classified statement");

        let mut query = ParsedQuery::new(kind, src);
        if kind == StatementKind::Select {
            parser.extract_select(&mut query);
        }

        query
    }
}

pub fn parse_query(sql: &str) -> ParsedQuery {
    Parser::parse(sql)
}
