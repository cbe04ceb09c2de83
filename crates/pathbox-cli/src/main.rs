use clap::Parser;
use log::LevelFilter;
use pathbox_graph::{Distance, JohnsonConfig, Weight};
use pathbox_io::{load_graph, report, TextReport};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// Exit code returned when the graph contains a negative cycle.
const NEGATIVE_CYCLE_EXIT: u8 = 2;

#[derive(Debug, Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Computes the shortest shortest path of a directed graph with Johnson's algorithm")]
struct Cli {
    /// Graph file: a "<vertex count> <edge count>" header, then one "<tail> <head> <length>" line per edge
    file: PathBuf,

    /// Parse edge lengths as floating point numbers instead of integers
    #[arg(long)]
    float: bool,

    /// Run the Dijkstra searches in parallel
    #[arg(long)]
    parallel: bool,

    /// Print the full distance matrix
    #[arg(long)]
    matrix: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::builder()
        .default_format()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = JohnsonConfig::new().with_parallel(cli.parallel);
    if cli.float {
        run::<f64>(&cli, &config)
    } else {
        run::<i64>(&cli, &config)
    }
}

fn run<W: Weight + FromStr + fmt::Display>(
    cli: &Cli,
    config: &JohnsonConfig,
) -> Result<ExitCode, Box<dyn Error>> {
    let graph = load_graph::<W>(&cli.file)?;
    let result = graph.all_pairs(config);

    if cli.matrix {
        report(&result, &mut TextReport::new(io::stdout().lock()))?;
    }
    match result {
        Ok(matrix) => {
            let min: Distance<W> = matrix.min_distance();
            println!("{min}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log::warn!("{err}");
            println!("NULL");
            Ok(ExitCode::from(NEGATIVE_CYCLE_EXIT))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["pathbox", "--float", "--matrix", "graph.txt"]).unwrap();
        assert!(cli.float);
        assert!(cli.matrix);
        assert!(!cli.parallel);
        assert_eq!(PathBuf::from("graph.txt"), cli.file);
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["pathbox", "--parallel"]).is_err());
    }
}
