use {
    common::pub_fields_struct,
    serde::{Serialize, Serializer},
    std::fmt::{Display, Formatter},
};

/// Coarse category of a statement, decided by its leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Drop,
    Alter,
    Unknown,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Alter => "ALTER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    /// A join keyword outside the standard five, kept as written (uppercased).
    Other(String),
}

impl JoinType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Cross => "CROSS",
            Self::Other(literal) => literal,
        }
    }
}

impl Display for JoinType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct TableReference {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct JoinClause {
        #[serde(rename = "type")]
        join_type: JoinType,
        table: TableReference,
        /// Raw text after `ON`, never decomposed.
        #[serde(skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SelectClause {
        columns: Vec<String>,
        is_select_all: bool,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct WhereClause {
        condition: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct OrderByClause {
        column: String,
        direction: SortDirection,
    }

    /// The decomposed shape of one statement.
    ///
    /// Clause fields are only ever populated for [`StatementKind::Select`];
    /// for every other kind just `kind` and `raw` carry information.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ParsedQuery {
        kind: StatementKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        select: Option<SelectClause>,
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<Vec<TableReference>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        joins: Option<Vec<JoinClause>>,
        #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
        where_clause: Option<WhereClause>,
        #[serde(skip_serializing_if = "Option::is_none")]
        order_by: Option<Vec<OrderByClause>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u64>,
        raw: String,
    }
}

impl TableReference {
    pub fn new(name: impl Into<String>, alias: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            alias: alias.map(Into::into),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }
}

impl SelectClause {
    pub fn all() -> Self {
        Self {
            columns: vec!["*".to_string()],
            is_select_all: true,
        }
    }

    pub fn columns<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            is_select_all: false,
        }
    }
}

impl ParsedQuery {
    /// A record holding only the kind and the source text.
    pub fn new(kind: StatementKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            select: None,
            from: None,
            joins: None,
            where_clause: None,
            order_by: None,
            limit: None,
            raw: raw.into(),
        }
    }

    pub fn is_select(&self) -> bool {
        self.kind == StatementKind::Select
    }

    pub fn is_select_all(&self) -> bool {
        self.select.as_ref().is_some_and(|s| s.is_select_all)
    }

    /// The first table of the FROM list, if any.
    pub fn source_table(&self) -> Option<&TableReference> {
        self.from.as_ref().and_then(|tables| tables.first())
    }

    pub fn first_join(&self) -> Option<&JoinClause> {
        self.joins.as_ref().and_then(|joins| joins.first())
    }
}
