use {
    super::{
        common::{split_top_level, Tokens},
        Parser, TARGET,
    },
    ast::{
        token::{Keyword, Token},
        JoinClause, JoinType, Spanned, TableReference,
    },
    common::iter::{MultiPeek, MultiPeekable},
    tracing::trace,
};

/// Keyword sequences that introduce a join, longest first.
const JOIN_PREFIXES: &[(&[Keyword], JoinKeyword)] = &[
    (&[Keyword::INNER, Keyword::JOIN], JoinKeyword::Inner),
    (&[Keyword::LEFT, Keyword::OUTER, Keyword::JOIN], JoinKeyword::Left),
    (&[Keyword::LEFT, Keyword::JOIN], JoinKeyword::Left),
    (&[Keyword::RIGHT, Keyword::OUTER, Keyword::JOIN], JoinKeyword::Right),
    (&[Keyword::RIGHT, Keyword::JOIN], JoinKeyword::Right),
    (&[Keyword::FULL, Keyword::OUTER, Keyword::JOIN], JoinKeyword::Full),
    (&[Keyword::FULL, Keyword::JOIN], JoinKeyword::Full),
    (&[Keyword::CROSS, Keyword::JOIN], JoinKeyword::Cross),
    (&[Keyword::NATURAL, Keyword::JOIN], JoinKeyword::Natural),
    (&[Keyword::JOIN], JoinKeyword::Inner),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum JoinKeyword {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Natural,
}

impl From<JoinKeyword> for JoinType {
    fn from(keyword: JoinKeyword) -> Self {
        match keyword {
            JoinKeyword::Inner => JoinType::Inner,
            JoinKeyword::Left => JoinType::Left,
            JoinKeyword::Right => JoinType::Right,
            JoinKeyword::Full => JoinType::Full,
            JoinKeyword::Cross => JoinType::Cross,
            JoinKeyword::Natural => JoinType::Other(Keyword::NATURAL.as_str().to_string()),
        }
    }
}

/// Where one join starts within the FROM list.
#[derive(Debug)]
struct JoinMarker {
    keyword: JoinKeyword,
    // index of the first prefix keyword
    start: usize,
    // index right after `JOIN`
    body: usize,
}

type Cursor<'t> = MultiPeekable<std::iter::Enumerate<std::slice::Iter<'t, Spanned<Token>>>>;

pub(super) fn contains_join(tokens: Tokens<'_>) -> bool {
    top_level_position(tokens, Keyword::JOIN).is_some()
}

fn match_join_prefix(cursor: &mut Cursor<'_>) -> Option<JoinKeyword> {
    JOIN_PREFIXES.iter().find_map(|&(keywords, join_keyword)| {
        cursor
            .advance_n_if_each(keywords.len(), |(i, (_, Spanned(token, _)))| {
                token.is_keyword(keywords[i])
            })
            .map(|_| join_keyword)
    })
}

fn join_markers(tokens: Tokens<'_>) -> Vec<JoinMarker> {
    let mut markers = vec![];
    let mut cursor = tokens.iter().enumerate().multi_peekable();
    let mut depth = 0usize;

    while let Some(&(start, _)) = cursor.peek() {
        if depth == 0 {
            if let Some(keyword) = match_join_prefix(&mut cursor) {
                let body = cursor.peek().map_or(tokens.len(), |&(i, _)| i);
                markers.push(JoinMarker {
                    keyword,
                    start,
                    body,
                });
                continue;
            }
        }

        match cursor.next() {
            Some((_, Spanned(Token::LeftParen, _))) => depth += 1,
            Some((_, Spanned(Token::RightParen, _))) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    markers
}

impl<'a> Parser<'a> {
    /// Splits a FROM list containing joins into its leading table and the
    /// joins that follow it, in textual order.
    pub(super) fn from_with_joins(
        &self,
        tokens: Tokens<'_>,
    ) -> (Option<TableReference>, Vec<JoinClause>) {
        let markers = join_markers(tokens);
        let lead_end = markers.first().map_or(tokens.len(), |m| m.start);

        let lead = split_top_level(&tokens[..lead_end], Token::Comma)
            .into_iter()
            .next()
            .and_then(|item| self.table_reference(item));

        let joins = markers
            .iter()
            .enumerate()
            .filter_map(|(i, marker)| {
                let end = markers.get(i + 1).map_or(tokens.len(), |next| next.start);
                let join = self.join_clause(marker.keyword.into(), &tokens[marker.body..end]);
                if join.is_none() {
                    trace!(target: TARGET, ?marker, "join without a table reference");
                }
                join
            })
            .collect();

        (lead, joins)
    }

    /// Reads `<table> [AS <alias>] [ON <condition>]`.
    fn join_clause(&self, join_type: JoinType, tokens: Tokens<'_>) -> Option<JoinClause> {
        let on = top_level_position(tokens, Keyword::ON);
        let (table, condition) = match on {
            Some(i) => (&tokens[..i], self.owned_text(&tokens[i + 1..])),
            None => (tokens, None),
        };

        Some(JoinClause {
            join_type,
            table: self.table_reference(table)?,
            condition,
        })
    }
}

fn top_level_position(tokens: Tokens<'_>, keyword: Keyword) -> Option<usize> {
    let mut depth = 0usize;

    tokens.iter().position(|Spanned(token, _)| {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth = depth.saturating_sub(1),
            _ => {}
        }
        depth == 0 && token.is_keyword(keyword)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> (Option<TableReference>, Vec<JoinClause>) {
        let parser = Parser::new(sql);
        parser.from_with_joins(&parser.tokens)
    }

    fn join(join_type: JoinType, name: &str, alias: Option<&str>, cond: Option<&str>) -> JoinClause {
        JoinClause {
            join_type,
            table: TableReference::new(name, alias),
            condition: cond.map(Into::into),
        }
    }

    #[test]
    fn single_join() {
        let (lead, joins) = parse("users u LEFT JOIN orders AS o ON u.id = o.user_id");

        assert_eq!(lead, Some(TableReference::new("users", Some("u"))));
        assert_eq!(
            joins,
            [join(JoinType::Left, "orders", Some("o"), Some("u.id = o.user_id"))]
        );
    }

    #[test]
    fn several_joins_in_textual_order() {
        let (lead, joins) = parse(
            "a JOIN b ON a.id = b.a_id AND b.ok \
             RIGHT OUTER JOIN c ON c.id = b.c_id \
             full join d on d.id = c.d_id \
             CROSS JOIN e \
             NATURAL JOIN f",
        );

        assert_eq!(lead, Some(TableReference::named("a")));
        assert_eq!(
            joins,
            [
                join(JoinType::Inner, "b", None, Some("a.id = b.a_id AND b.ok")),
                join(JoinType::Right, "c", None, Some("c.id = b.c_id")),
                join(JoinType::Full, "d", None, Some("d.id = c.d_id")),
                join(JoinType::Cross, "e", None, None),
                join(JoinType::Other("NATURAL".into()), "f", None, None),
            ]
        );
    }

    #[test]
    fn join_inside_parentheses_is_not_a_boundary() {
        let (lead, joins) = parse("t INNER JOIN s ON s.id IN (SELECT id FROM x JOIN y ON 1 = 1)");

        assert_eq!(lead, Some(TableReference::named("t")));
        assert_eq!(
            joins,
            [join(
                JoinType::Inner,
                "s",
                None,
                Some("s.id IN (SELECT id FROM x JOIN y ON 1 = 1)")
            )]
        );
    }

    #[test]
    fn comma_before_join_keeps_first_table() {
        let (lead, joins) = parse("a, b JOIN c ON b.id = c.id");

        assert_eq!(lead, Some(TableReference::named("a")));
        assert_eq!(joins.len(), 1);
    }

    #[test]
    fn join_without_table_is_dropped() {
        let (lead, joins) = parse("a JOIN");

        assert_eq!(lead, Some(TableReference::named("a")));
        assert!(joins.is_empty());
    }

    #[test]
    fn join_with_empty_condition() {
        let (_, joins) = parse("a JOIN b ON");

        assert_eq!(joins, [join(JoinType::Inner, "b", None, None)]);
    }
}
