use {
    crate::cmd::{error::LogFilterSnafu, Result},
    snafu::ResultExt,
    std::env,
    tracing_subscriber::EnvFilter,
};

pub const SQLSCOPE_LOG: &str = "SQLSCOPE_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// An explicit `--log-level` wins over `SQLSCOPE_LOG`, which wins over the
/// default level.
fn filter_directive(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| env::var(SQLSCOPE_LOG).ok())
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

pub fn init(level: Option<&str>) -> Result<()> {
    let directive = filter_directive(level);
    let filter = EnvFilter::try_new(&directive).context(LogFilterSnafu { filter: &directive })?;

    // a subscriber may already be installed when embedded in tests
    _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins() {
        assert_eq!(filter_directive(Some("debug")), "debug");
        assert_eq!(
            filter_directive(Some("sqlscope::parser=trace")),
            "sqlscope::parser=trace"
        );
    }

    #[test]
    fn invalid_filter_is_reported() {
        let err = init(Some("sqlscope::parser=loud")).unwrap_err();

        assert!(err.to_string().starts_with("invalid log filter `sqlscope::parser=loud`"));
    }
}
