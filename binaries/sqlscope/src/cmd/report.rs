use {
    super::error::{EncodeJsonSnafu, Result},
    ast::{ParsedQuery, TableReference},
    explain::{explain, Explanation},
    parser::Parser,
    serde::Serialize,
    snafu::ResultExt,
    std::fmt::Write,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    query: &'a ParsedQuery,
    explanation: &'a Explanation,
}

pub fn render(sql: &str, format: Format, pretty: bool) -> Result<String> {
    let query = Parser::parse(sql);
    let explanation = explain(&query);

    match format {
        Format::Text => Ok(text_report(&query, &explanation)),
        Format::Json => {
            let report = Report {
                query: &query,
                explanation: &explanation,
            };
            let encoded = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            encoded.context(EncodeJsonSnafu)
        }
    }
}

fn table(table: &TableReference) -> String {
    match &table.alias {
        Some(alias) => format!("{} ({alias})", table.name),
        None => table.name.clone(),
    }
}

fn text_report(query: &ParsedQuery, explanation: &Explanation) -> String {
    let mut out = format!("Statement: {}\n", query.kind);

    if let Some(select) = &query.select {
        _ = writeln!(out, "Columns:   {}", select.columns.join(", "));
    }
    if let Some(from) = &query.from {
        let tables = from.iter().map(table).collect::<Vec<_>>();
        _ = writeln!(out, "Tables:    {}", tables.join(", "));
    }
    for join in query.joins.iter().flatten() {
        _ = write!(out, "Join:      {} JOIN {}", join.join_type, table(&join.table));
        match &join.condition {
            Some(condition) => {
                _ = writeln!(out, " ON {condition}");
            }
            None => out.push('\n'),
        }
    }
    if let Some(filter) = &query.where_clause {
        _ = writeln!(out, "Filter:    {}", filter.condition);
    }
    if let Some(order_by) = &query.order_by {
        let keys = order_by
            .iter()
            .map(|item| format!("{} {}", item.column, item.direction))
            .collect::<Vec<_>>();
        _ = writeln!(out, "Order:     {}", keys.join(", "));
    }
    if let Some(limit) = query.limit {
        _ = writeln!(out, "Limit:     {limit}");
    }

    _ = write!(out, "\n{}\n", explanation.description);
    if let Some(join) = &explanation.join {
        _ = writeln!(out, "{join}");
    }

    if !explanation.advisories.is_empty() {
        out.push_str("\nSuggestions:\n");
        for advice in &explanation.advisories {
            _ = writeln!(out, "  - {advice}");
        }
    }

    out
}
