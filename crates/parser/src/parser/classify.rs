use {
    super::Parser,
    ast::{
        token::{Keyword, Token},
        Spanned, StatementKind,
    },
};

/// Leading keywords in the order they are tried.
const STATEMENT_KEYWORDS: [(Keyword, StatementKind); 7] = [
    (Keyword::SELECT, StatementKind::Select),
    (Keyword::INSERT, StatementKind::Insert),
    (Keyword::UPDATE, StatementKind::Update),
    (Keyword::DELETE, StatementKind::Delete),
    (Keyword::CREATE, StatementKind::Create),
    (Keyword::DROP, StatementKind::Drop),
    (Keyword::ALTER, StatementKind::Alter),
];

impl<'a> Parser<'a> {
    pub(super) fn statement_kind(&self) -> StatementKind {
        match self.tokens.first() {
            Some(Spanned(Token::Keyword(keyword), _)) => STATEMENT_KEYWORDS
                .iter()
                .find(|(k, _)| k == keyword)
                .map_or(StatementKind::Unknown, |&(_, kind)| kind),
            _ => StatementKind::Unknown,
        }
    }
}

/// Classifies a statement by its leading keyword without extracting clauses.
pub fn classify(sql: &str) -> StatementKind {
    Parser::new(sql.trim()).statement_kind()
}
