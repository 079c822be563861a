#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Keyword(Keyword),

    Identifier,
    QuotedIdentifier,

    Number { is_float: bool },
    String,

    Comma,
    Period,
    Semicolon,
    LeftParen,
    RightParen,
    Question,

    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    LessOrGreaterThan,

    Caret,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Concat,

    /// Any character the lexer has no rule for.
    Other,
}

impl Token {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        pub enum Keyword {
            $($var,)*
        }

        #[derive(Debug)]
        pub struct NotKeywordError {}

        impl std::fmt::Display for NotKeywordError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "not a keyword")
            }
        }
        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Ok(Self::$var),)*
                    _ => Err(NotKeywordError {}),
                }
            }
        }

        impl Keyword {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$var => stringify!($var),)*
                }
            }
        }
    };
}

keyword! {
    ALTER,
    AS,
    BY,
    CREATE,
    CROSS,
    DELETE,
    DESC,
    DROP,
    FROM,
    FULL,
    GROUP,
    HAVING,
    INNER,
    INSERT,
    JOIN,
    LEFT,
    LIMIT,
    NATURAL,
    ON,
    ORDER,
    OUTER,
    RIGHT,
    SELECT,
    UPDATE,
    WHERE,
}
