pub(crate) mod error;
mod report;

pub use self::{
    error::{Error, Result},
    report::{render, Format},
};

use {
    error::{EmptyInputSnafu, ReadFileSnafu, ReadStdinSnafu},
    snafu::prelude::*,
    std::{fs, io::Read, path::Path},
};

/// Picks the statement text: a file wins over the positional argument, and
/// `stdin` is only read when neither is given.
pub fn read_input(sql: Option<&str>, file: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    let sql = match (file, sql) {
        (Some(path), _) => fs::read_to_string(path).context(ReadFileSnafu { path })?,
        (None, Some(sql)) => sql.to_string(),
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context(ReadStdinSnafu)?;
            buf
        }
    };

    ensure!(!sql.trim().is_empty(), EmptyInputSnafu);

    Ok(sql)
}
