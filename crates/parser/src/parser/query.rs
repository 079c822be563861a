use {
    super::{
        common::{is_qualified, is_single_keyword, split_top_level, words, Tokens},
        join::contains_join,
        Parser, TARGET,
    },
    ast::{
        token::{Keyword, Token},
        OrderByClause, ParsedQuery, SelectClause, SortDirection, Spanned, TableReference,
        WhereClause,
    },
    common::iter::{MultiPeek, MultiPeekable},
    std::ops::Range,
    tracing::{debug, trace},
};

/// Clause the boundary scan is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SelectList,
    FromList,
    Where,
    /// GROUP BY or HAVING, recognised as boundaries but never extracted.
    Grouping,
    OrderBy,
    Limit,
    Done,
}

/// Token ranges of each clause body, keyword excluded. Only the first
/// occurrence of a clause is kept.
#[derive(Debug, Default, PartialEq)]
struct ClauseSpans {
    select_list: Option<Range<usize>>,
    from_list: Option<Range<usize>>,
    where_cond: Option<Range<usize>>,
    order_by: Option<Range<usize>>,
    limit: Option<Range<usize>>,
}

impl ClauseSpans {
    fn close(&mut self, state: State, body: Range<usize>, next: Option<State>) {
        let slot = match state {
            // a select list only counts once a FROM has ended it
            State::SelectList if next == Some(State::FromList) => &mut self.select_list,
            State::FromList => &mut self.from_list,
            State::Where => &mut self.where_cond,
            State::OrderBy => &mut self.order_by,
            State::Limit => &mut self.limit,
            State::SelectList | State::Grouping | State::Done => return,
        };

        if slot.is_none() {
            *slot = Some(body);
        }
    }

    /// A LIMIT seen inside a select list that no FROM ever ended.
    fn close_select_limit(&mut self, body_start: Option<usize>, end: usize) {
        if let Some(start) = body_start {
            self.limit = Some(start..end);
        }
    }
}

type Cursor<'t> = MultiPeekable<std::iter::Enumerate<std::slice::Iter<'t, Spanned<Token>>>>;

/// Decides whether `token` ends the clause in `state`, and which clause
/// comes next. May consume a trailing `BY`. A select list only ends at FROM
/// or the end of the statement.
fn transition(state: State, token: &Token, cursor: &mut Cursor<'_>) -> Option<State> {
    if state == State::SelectList {
        return match token {
            Token::Semicolon => Some(State::Done),
            Token::Keyword(Keyword::FROM) => Some(State::FromList),
            _ => None,
        };
    }

    let mut take_by = || {
        cursor
            .next_if(|(_, Spanned(t, _))| t.is_keyword(Keyword::BY))
            .is_some()
    };

    let next = match token {
        Token::Semicolon => State::Done,
        Token::Keyword(Keyword::WHERE) if state == State::FromList => State::Where,
        Token::Keyword(Keyword::GROUP) if state != State::Limit => {
            take_by();
            State::Grouping
        }
        Token::Keyword(Keyword::HAVING) if state != State::Limit => State::Grouping,
        Token::Keyword(Keyword::ORDER) if !matches!(state, State::OrderBy | State::Limit) => {
            if take_by() {
                State::OrderBy
            } else {
                State::Grouping
            }
        }
        Token::Keyword(Keyword::LIMIT) if state != State::Limit => State::Limit,
        _ => return None,
    };

    Some(next)
}

impl<'a> Parser<'a> {
    /// Walks the tokens after the leading SELECT once, recording where each
    /// clause body begins and ends. Boundaries nested in parentheses are
    /// ignored.
    fn scan_clauses(&self) -> ClauseSpans {
        let mut spans = ClauseSpans::default();
        let mut cursor = self.tokens.iter().enumerate().multi_peekable();
        let mut state = State::SelectList;
        let mut depth = 0usize;

        // leading SELECT
        let mut prev = cursor.next().map(|(_, spanned)| spanned);
        let mut body_start = 1;
        let mut select_limit = None;

        while let Some((i, spanned)) = cursor.next() {
            let qualified = is_qualified(prev, spanned, cursor.peek().map(|&(_, next)| next));
            prev = Some(spanned);

            let Spanned(token, _) = spanned;
            match token {
                Token::LeftParen => depth += 1,
                Token::RightParen => depth = depth.saturating_sub(1),
                _ if depth > 0 || qualified => {}
                Token::Keyword(Keyword::LIMIT) if state == State::SelectList => {
                    select_limit.get_or_insert(i + 1);
                }
                _ => {
                    let Some(next) = transition(state, token, &mut cursor) else {
                        continue;
                    };
                    trace!(target: TARGET, from = ?state, to = ?next, at = i, "clause boundary");

                    if state == State::SelectList && next == State::Done {
                        spans.close_select_limit(select_limit, i);
                    }
                    spans.close(state, body_start..i, Some(next));
                    state = next;
                    body_start = cursor.peek().map_or(self.tokens.len(), |&(j, _)| j);

                    if state == State::Done {
                        break;
                    }
                }
            }
        }

        if state == State::SelectList {
            spans.close_select_limit(select_limit, self.tokens.len());
        }
        if state != State::Done {
            spans.close(state, body_start..self.tokens.len(), None);
        }

        spans
    }

    pub(super) fn extract_select(&self, query: &mut ParsedQuery) {
        let spans = self.scan_clauses();
        let body = |range: Option<Range<usize>>| range.map(|range| &self.tokens[range]);

        query.select = body(spans.select_list).and_then(|tokens| self.select_clause(tokens));

        if let Some(tokens) = body(spans.from_list) {
            if contains_join(tokens) {
                let (lead, joins) = self.from_with_joins(tokens);
                query.from = lead.map(|table| vec![table]);
                query.joins = Some(joins).filter(|joins| !joins.is_empty());
            } else {
                query.from = self.table_list(tokens);
            }
        }

        query.where_clause = body(spans.where_cond)
            .and_then(|tokens| self.owned_text(tokens))
            .map(|condition| WhereClause { condition });

        query.order_by = body(spans.order_by).and_then(|tokens| self.order_by_list(tokens));
        query.limit = body(spans.limit).and_then(|tokens| self.limit_value(tokens));
    }

    fn select_clause(&self, tokens: Tokens<'_>) -> Option<SelectClause> {
        if let [Spanned(Token::Asterisk, _)] = tokens {
            return Some(SelectClause::all());
        }

        let columns = split_top_level(tokens, Token::Comma)
            .into_iter()
            .filter_map(|item| self.owned_text(item))
            .collect::<Vec<_>>();

        (!columns.is_empty()).then(|| SelectClause::columns(columns))
    }

    /// A comma separated FROM list without joins.
    fn table_list(&self, tokens: Tokens<'_>) -> Option<Vec<TableReference>> {
        let tables = split_top_level(tokens, Token::Comma)
            .into_iter()
            .filter_map(|item| self.table_reference(item))
            .collect::<Vec<_>>();

        (!tables.is_empty()).then_some(tables)
    }

    fn order_by_list(&self, tokens: Tokens<'_>) -> Option<Vec<OrderByClause>> {
        let items = split_top_level(tokens, Token::Comma)
            .into_iter()
            .filter_map(|item| {
                let words = words(item);
                let column = self.owned_text(words.first()?)?;
                let direction = match words.get(1) {
                    Some(word) if is_single_keyword(word, Keyword::DESC) => SortDirection::Desc,
                    _ => SortDirection::default(),
                };

                Some(OrderByClause { column, direction })
            })
            .collect::<Vec<_>>();

        (!items.is_empty()).then_some(items)
    }

    /// Only a lone integer literal counts; anything else after LIMIT leaves
    /// the limit unset.
    fn limit_value(&self, tokens: Tokens<'_>) -> Option<u64> {
        let [Spanned(Token::Number { is_float: false }, span)] = tokens else {
            return None;
        };

        let text = &self.src[span.clone()];
        text.parse()
            .map_err(|e| debug!(target: TARGET, text, error = %e, "ignoring LIMIT value"))
            .ok()
    }
}
