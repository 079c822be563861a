use ast::{JoinClause, JoinType};

fn join_behaviour(join_type: &JoinType) -> &'static str {
    match join_type {
        JoinType::Inner => "returns only matching rows in both tables",
        JoinType::Left => "returns all left-table rows plus matches from the right",
        JoinType::Right => "returns all right-table rows plus matches from the left",
        JoinType::Full => "returns rows matching in either table",
        JoinType::Cross => "returns the Cartesian product of both tables",
        JoinType::Other(_) => "combines rows from both tables based on related columns",
    }
}

/// Describes what kind of join this is and echoes its condition.
pub fn explain_join(join: &JoinClause) -> String {
    let name = join.join_type.as_str();
    let article = match name.chars().next() {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    };

    let mut out = format!(
        "This is {article} {name} JOIN, which {}.",
        join_behaviour(&join.join_type)
    );

    if let Some(condition) = &join.condition {
        out.push_str(&format!(" The join condition is: {condition}."));
    }

    out
}
