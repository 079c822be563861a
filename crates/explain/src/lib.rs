//! Plain-language descriptions and optimization hints for decomposed queries.

mod advisory;
mod description;
mod join;

pub use self::{advisory::advisories, description::describe, join::explain_join};

use {
    ast::ParsedQuery,
    common::pub_fields_struct,
    serde::Serialize,
    tracing::debug,
};

pub(crate) const TARGET: &str = "sqlscope::explain";

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct Explanation {
        description: String,
        /// Only the first join is explained.
        #[serde(skip_serializing_if = "Option::is_none")]
        join: Option<String>,
        advisories: Vec<String>,
    }
}

pub fn explain(query: &ParsedQuery) -> Explanation {
    let explanation = Explanation {
        description: describe(query),
        join: query.first_join().map(explain_join),
        advisories: advisories(query),
    };

    debug!(
        target: TARGET,
        kind = %query.kind,
        advisories = explanation.advisories.len(),
        "explained statement"
    );

    explanation
}

#[cfg(test)]
mod tests {
    use {super::*, parser::Parser, serde_json::json};

    #[test]
    fn explain_left_join() {
        let query = Parser::parse(
            "SELECT u.name, COUNT(o.id) FROM users u LEFT JOIN orders o ON u.id = o.user_id;",
        );

        assert_eq!(
            explain(&query),
            Explanation {
                description: "This query selects specific columns (u.name, COUNT(o.id)) from the \
                              users table (aliased as u) and joins with the orders table."
                    .into(),
                join: Some(
                    "This is a LEFT JOIN, which returns all left-table rows plus matches from \
                     the right. The join condition is: u.id = o.user_id."
                        .into()
                ),
                advisories: vec![
                    "Consider adding a WHERE clause to filter results and improve performance."
                        .into()
                ],
            }
        );
    }

    #[test]
    fn explanation_json_shape() {
        let query = Parser::parse("DROP TABLE users;");

        assert_eq!(
            serde_json::to_value(explain(&query)).unwrap(),
            json!({
                "description": "This is a DROP statement. Detailed explanations are only available for SELECT queries.",
                "advisories": [],
            })
        );
    }
}
