use {
    super::TARGET,
    ast::ParsedQuery,
    tracing::trace,
};

const SELECT_STAR: &str = "Consider selecting only the columns you need instead of using SELECT *.";
const LEADING_WILDCARD: &str =
    "Using LIKE with a leading wildcard (e.g., LIKE '%text') prevents index usage.";
const MISSING_FILTER: &str =
    "Consider adding a WHERE clause to filter results and improve performance.";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `condition` has a `LIKE` (or `ILIKE`) whose quoted pattern starts
/// with `%` or `_`.
fn has_leading_wildcard(condition: &str) -> bool {
    // ASCII uppercasing keeps byte offsets valid for `condition`
    let upper = condition.to_ascii_uppercase();

    upper.match_indices("LIKE").any(|(i, keyword)| {
        let before = upper[..i].strip_suffix('I').unwrap_or(&upper[..i]);
        if before.ends_with(is_word_char) {
            return false;
        }

        let rest = &condition[i + keyword.len()..];
        if rest.starts_with(is_word_char) {
            return false;
        }

        rest.trim_start()
            .strip_prefix(|c| c == '\'' || c == '"')
            .is_some_and(|pattern| pattern.starts_with(|c| c == '%' || c == '_'))
    })
}

/// Optimization hints for a SELECT, in a fixed order. Other statement kinds
/// never get any.
pub fn advisories(query: &ParsedQuery) -> Vec<String> {
    if !query.is_select() {
        return vec![];
    }

    let rules = [
        (SELECT_STAR, query.is_select_all()),
        (
            LEADING_WILDCARD,
            query
                .where_clause
                .as_ref()
                .is_some_and(|filter| has_leading_wildcard(&filter.condition)),
        ),
        (
            MISSING_FILTER,
            query.source_table().is_some() && query.where_clause.is_none(),
        ),
    ];

    rules
        .into_iter()
        .filter(|&(advice, applies)| {
            trace!(target: TARGET, advice, applies, "advisory rule");
            applies
        })
        .map(|(advice, _)| advice.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use {super::*, parser::Parser};

    fn advise(sql: &str) -> Vec<String> {
        advisories(&Parser::parse(sql))
    }

    #[test]
    fn star_without_filter() {
        assert_eq!(advise("SELECT * FROM users;"), [SELECT_STAR, MISSING_FILTER]);
    }

    #[test]
    fn explicit_columns_with_filter() {
        assert!(advise("SELECT name FROM users WHERE id = 1").is_empty());
        assert!(advise("SELECT name FROM users WHERE name LIKE 'abc%'").is_empty());
    }

    #[test]
    fn rules_are_independent() {
        let mut query = Parser::parse("SELECT * FROM users WHERE name LIKE '%x'");
        assert_eq!(advisories(&query), [SELECT_STAR, LEADING_WILDCARD]);

        query.from = Some(vec![ast::TableReference::named("users")]);
        query.where_clause = None;
        assert_eq!(advisories(&query), [SELECT_STAR, MISSING_FILTER]);
    }

    #[test]
    fn leading_wildcard_patterns() {
        assert!(has_leading_wildcard("name LIKE '%son'"));
        assert!(has_leading_wildcard("name like   \"_on\""));
        assert!(has_leading_wildcard("a = 1 AND email ILIKE '%@example.com'"));
        assert!(has_leading_wildcard("x NOT LIKE '%y%'"));

        assert!(!has_leading_wildcard("name LIKE 'son%'"));
        assert!(!has_leading_wildcard("name LIKE ?"));
        assert!(!has_leading_wildcard("likes > 3"));
        assert!(!has_leading_wildcard("unlike = '%'"));
        assert!(!has_leading_wildcard("LIKELY = '%'"));
        assert!(!has_leading_wildcard("status = 'LIKE'"));
    }

    #[test]
    fn only_select_gets_advice() {
        assert!(advise("DELETE FROM users").is_empty());
        assert!(advise("no statement here").is_empty());
        assert!(advise("").is_empty());
    }

    #[test]
    fn select_without_from_needs_no_filter() {
        assert!(advise("SELECT 1").is_empty());
    }
}
