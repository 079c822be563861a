//! Decomposes one SQL statement into its kind and its SELECT clauses.
//!
//! The decomposer never executes SQL and never fails: unrecognised input is
//! classified as [`StatementKind::Unknown`](ast::StatementKind::Unknown) and
//! clauses it cannot make sense of are simply left unset.

mod lexer;
mod parser;

pub use self::parser::{classify, parse_query, Parser};
