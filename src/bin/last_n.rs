use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pitch_lookback::lookback::DEFAULT_WINDOW;
use pitch_lookback::{loader, reshape, LastNExtractor, LookbackConfig};

/// Print the last-N HomeStat/AwayStat tables for one fixture as JSON.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "last_n", version, about)]
struct DriverArgs {
    /// Match data document with MatchInfo, HomeStat and AwayStat arrays.
    #[arg(long, value_name = "PATH", env = "PITCH_LOOKBACK_INPUT")]
    input: PathBuf,

    /// Lookback window size.
    #[arg(long, value_name = "N", env = "PITCH_LOOKBACK_N", default_value_t = DEFAULT_WINDOW)]
    n: usize,

    /// MatchInfo position of the target fixture.
    #[arg(long, value_name = "P", default_value_t = 0)]
    position: usize,

    /// Apply the skip-first window to the home side as well.
    #[arg(long)]
    symmetric: bool,
}

fn main() -> ExitCode {
    let args = DriverArgs::parse();
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "lookback failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &DriverArgs) -> pitch_lookback::Result<()> {
    let raw = loader::from_path(&args.input)?;
    let table = reshape(&raw)?;
    let config = if args.symmetric {
        LookbackConfig::symmetric(args.n)
    } else {
        LookbackConfig::new(args.n)
    };
    let result = LastNExtractor::with_config(&table, config).last_n_at(args.position)?;
    info!(
        position = args.position,
        home_rows = result.home_data.len(),
        away_rows = result.away_data.len(),
        "lookback complete"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pitch_lookback=info,last_n=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        DriverArgs::command().debug_assert();
    }

    #[test]
    fn test_parses_separate_and_inline_values() {
        let parsed = DriverArgs::try_parse_from([
            "last_n",
            "--input",
            "trial90.json",
            "--n=3",
            "--position",
            "4",
            "--symmetric",
        ])
        .unwrap();
        assert_eq!(
            parsed,
            DriverArgs {
                input: PathBuf::from("trial90.json"),
                n: 3,
                position: 4,
                symmetric: true,
            }
        );
    }

    #[test]
    fn test_defaults() {
        let parsed = DriverArgs::try_parse_from(["last_n", "--input=x.json"]).unwrap();
        assert_eq!(parsed.position, 0);
        assert!(!parsed.symmetric);
    }

    #[test]
    fn test_symmetric_flag_takes_no_value() {
        assert!(
            DriverArgs::try_parse_from(["last_n", "--input=x.json", "--symmetric=false"]).is_err()
        );
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(DriverArgs::try_parse_from(["last_n", "--input"]).is_err());
        assert!(DriverArgs::try_parse_from(["last_n", "--input=x.json", "--n=-1"]).is_err());
        assert!(DriverArgs::try_parse_from(["last_n", "--input=x.json", "--verbose=1"]).is_err());
    }
}
