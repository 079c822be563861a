mod cmd;
mod logging;

use {
    clap::{arg, value_parser, Arg, ArgMatches, Command},
    cmd::{Format, Result},
    std::{io, path::PathBuf, process},
    tracing::debug,
};

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(arg!([SQL] "statement to decompose, read from stdin when omitted"))
        .arg(
            arg!(-f --file <PATH> "read the statement from a file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--format <FORMAT> "output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(arg!(--pretty "pretty-print JSON output"))
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help(format!("log filter directive, overrides `{}`", logging::SQLSCOPE_LOG)),
        )
}

fn main() {
    if let Err(err) = try_main(cli().get_matches()) {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main(matches: ArgMatches) -> Result<()> {
    logging::init(matches.get_one::<String>("log-level").map(String::as_str))?;

    let sql = cmd::read_input(
        matches.get_one::<String>("SQL").map(String::as_str),
        matches.get_one::<PathBuf>("file").map(PathBuf::as_path),
        io::stdin().lock(),
    )?;

    let format = matches
        .get_one::<String>("format")
        .and_then(|name| Format::from_name(name))
        .unwrap_or(Format::Text);
    debug!(target: "sqlscope", bytes = sql.len(), ?format, "rendering report");

    let output = cmd::render(&sql, format, matches.get_flag("pretty"))?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_arguments() {
        let matches = cli()
            .try_get_matches_from(["sqlscope", "--format", "json", "--pretty", "SELECT 1"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("SQL").map(String::as_str),
            Some("SELECT 1")
        );
        assert_eq!(
            matches.get_one::<String>("format").map(String::as_str),
            Some("json")
        );
        assert!(matches.get_flag("pretty"));
        assert!(cli()
            .try_get_matches_from(["sqlscope", "--format", "xml"])
            .is_err());
    }
}
