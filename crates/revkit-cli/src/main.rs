//! revkit Command-Line Interface
//!
//! Exposes every synthesis entry point of `revkit-synth` as a subcommand:
//!
//! ```text
//! revkit parity 01:pi/4 10:pi/4 11:-pi/4
//! revkit oracle 1000 --kind pkrm
//! revkit oracle e8 --vars 3 --format json
//! revkit diagonal 0 0 3.14159
//! revkit dbs 0 1 3 2 6 7 5 4 --kind spectrum
//! revkit tbs 1 0 2 3
//! revkit lhrs adder.v -o adder.json --format json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use revkit_synth::StgKind;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::OutputArgs;
use commands::{diagonal, lhrs, oracle, parity, permutation, version};

/// revkit - logic-to-quantum-circuit synthesis
#[derive(Parser)]
#[command(name = "revkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a phase polynomial from parity terms (BITS:ANGLE)
    Parity {
        /// Terms such as `011:0.5` or `11:-pi/4`; character i selects variable i
        #[arg(required = true, allow_hyphen_values = true)]
        terms: Vec<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Synthesize a single-target gate for a Boolean function
    Oracle {
        /// Truth table, binary with the most significant assignment first
        function: String,

        /// Read the function as hexadecimal over this many variables
        #[arg(long)]
        vars: Option<u32>,

        /// Single-target gate strategy (spectrum, pkrm, pprm); pprm searches
        /// all 2^n polarities and accepts at most 12 variables
        #[arg(short, long, default_value = "spectrum", env = "REVKIT_STG_KIND")]
        kind: StgKind,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Synthesize a diagonal unitary diag(1, e^-iθ1, ..., e^-iθ(2^n-1))
    Diagonal {
        /// The 2^n - 1 angles θ1 ... θ(2^n-1)
        #[arg(required = true, allow_hyphen_values = true)]
        angles: Vec<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Synthesize a permutation with decomposition-based synthesis
    Dbs {
        /// Image of 0, 1, ..., 2^n - 1
        #[arg(required = true)]
        perm: Vec<u32>,

        /// Single-target gate strategy (spectrum, pkrm, pprm)
        #[arg(short, long, default_value = "spectrum", env = "REVKIT_STG_KIND")]
        kind: StgKind,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Synthesize a permutation with transformation-based synthesis
    Tbs {
        /// Image of 0, 1, ..., 2^n - 1
        #[arg(required = true)]
        perm: Vec<u32>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Compile a structural Verilog file into a reversible netlist
    Lhrs {
        /// Input Verilog file
        input: String,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Parity { terms, out } => parity::execute(&terms, &out),
        Commands::Oracle {
            function,
            vars,
            kind,
            out,
        } => oracle::execute(&function, vars, kind, &out),
        Commands::Diagonal { angles, out } => diagonal::execute(&angles, &out),
        Commands::Dbs { perm, kind, out } => permutation::execute_dbs(&perm, kind, &out),
        Commands::Tbs { perm, out } => permutation::execute_tbs(&perm, &out),
        Commands::Lhrs { input, out } => lhrs::execute(&input, &out),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::common::OutputFormat;

    #[test]
    fn test_parse_parity_with_negative_angle() {
        let cli = Cli::try_parse_from(["revkit", "parity", "01:0.5", "11:-pi/4"]).unwrap();
        match cli.command {
            Commands::Parity { terms, out } => {
                assert_eq!(terms, vec!["01:0.5", "11:-pi/4"]);
                assert_eq!(out.format, OutputFormat::Text);
                assert!(out.output.is_none());
                assert!(!out.inverse);
            }
            _ => panic!("expected parity"),
        }
    }

    #[test]
    fn test_parse_oracle_kind_and_format() {
        let cli = Cli::try_parse_from([
            "revkit", "oracle", "e8", "--vars", "3", "--kind", "PPRM", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Oracle {
                function,
                vars,
                kind,
                out,
            } => {
                assert_eq!(function, "e8");
                assert_eq!(vars, Some(3));
                assert_eq!(kind, StgKind::Pprm);
                assert_eq!(out.format, OutputFormat::Json);
            }
            _ => panic!("expected oracle"),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = Cli::try_parse_from(["revkit", "oracle", "1000", "--kind", "esop"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_permutation_values_required() {
        assert!(Cli::try_parse_from(["revkit", "tbs"]).is_err());
        let cli = Cli::try_parse_from(["revkit", "tbs", "1", "0", "2", "3", "-o", "out.txt"]).unwrap();
        match cli.command {
            Commands::Tbs { perm, out } => {
                assert_eq!(perm, vec![1, 0, 2, 3]);
                assert_eq!(out.output.as_deref(), Some("out.txt"));
            }
            _ => panic!("expected tbs"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["revkit", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
