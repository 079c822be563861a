use {
    ast::{ParsedQuery, StatementKind},
    std::fmt::Write,
};

/// One sentence describing what a SELECT does, built clause by clause in a
/// fixed order. Only the first join is mentioned.
pub fn describe(query: &ParsedQuery) -> String {
    match query.kind {
        StatementKind::Select => describe_select(query),
        StatementKind::Unknown => {
            "The statement type could not be determined, so no explanation is available."
                .to_string()
        }
        kind => format!(
            "This is a{} {kind} statement. Detailed explanations are only available for SELECT queries.",
            if kind == StatementKind::Insert || kind == StatementKind::Alter { "n" } else { "" }
        ),
    }
}

fn describe_select(query: &ParsedQuery) -> String {
    let mut out = String::from("This query selects ");

    match &query.select {
        Some(select) if select.is_select_all => out.push_str("all columns (*)"),
        Some(select) => _ = write!(out, "specific columns ({})", select.columns.join(", ")),
        None => out.push_str("data"),
    }

    if let Some(table) = query.source_table() {
        _ = write!(out, " from the {} table", table.name);
        if let Some(alias) = &table.alias {
            _ = write!(out, " (aliased as {alias})");
        }
    }

    if let Some(join) = query.first_join() {
        _ = write!(out, " and joins with the {} table", join.table.name);
    }

    if let Some(filter) = &query.where_clause {
        _ = write!(out, " where {}", filter.condition);
    }

    if let Some(order_by) = query.order_by.as_deref().filter(|items| !items.is_empty()) {
        let keys = order_by
            .iter()
            .map(|item| format!("{} {}", item.column, item.direction.as_str().to_lowercase()))
            .collect::<Vec<_>>();
        _ = write!(out, " ordered by {}", keys.join(", "));
    }

    if let Some(limit) = query.limit {
        _ = write!(out, " with a limit of {limit} rows");
    }

    out.push('.');
    out
}
