use {snafu::prelude::*, std::path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to read SQL from {}, source: {}", path.display(), source))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to read SQL from stdin, source: {}", source))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("no query entered"))]
    EmptyInput,

    #[snafu(display("failed to encode JSON, source: {}", source))]
    EncodeJson { source: serde_json::Error },

    #[snafu(display("invalid log filter `{}`, source: {}", filter, source))]
    LogFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
