use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use u_tour::geo::{DistanceFormula, DistanceUnit};
use u_tour::io::{read_points, ReaderOptions, RouteReport};
use u_tour::kopt::{FourOptSweep, Strategy};
use u_tour::solver::{SolverConfig, TourSolver};

/// Plans a short closed tour through the points in a CSV file
/// (`label,latitude,longitude`).
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Point file.
    file: PathBuf,

    /// Index of the start point, after the header.
    #[arg(short, long)]
    start: Option<usize>,

    /// Local search strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// How 4-opt cut positions are enumerated.
    #[arg(long, value_enum)]
    four_opt_sweep: Option<SweepArg>,

    /// Great-circle distance formula.
    #[arg(long, value_enum)]
    formula: Option<FormulaArg>,

    /// Distance unit.
    #[arg(long, value_enum)]
    unit: Option<UnitArg>,

    /// TOML solver configuration. Command line flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The file has no header line.
    #[arg(long)]
    no_header: bool,

    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Sequential,
    ThreeThenTwo,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SweepArg {
    Bisection,
    Exhaustive,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormulaArg {
    Cosines,
    Haversine,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitArg {
    Miles,
    Km,
}

impl Args {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SolverConfig::default(),
        };

        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(strategy) = self.strategy {
            config.kopt.strategy = match strategy {
                StrategyArg::Sequential => Strategy::Sequential,
                StrategyArg::ThreeThenTwo => Strategy::ThreeOptThenTwoOpt,
            };
        }
        if let Some(sweep) = self.four_opt_sweep {
            config.kopt.four_opt_sweep = match sweep {
                SweepArg::Bisection => FourOptSweep::Bisection,
                SweepArg::Exhaustive => FourOptSweep::Exhaustive,
            };
        }
        if let Some(formula) = self.formula {
            config.metric.formula = match formula {
                FormulaArg::Cosines => DistanceFormula::SphericalLawOfCosines,
                FormulaArg::Haversine => DistanceFormula::Haversine,
            };
        }
        if let Some(unit) = self.unit {
            config.metric.unit = match unit {
                UnitArg::Miles => DistanceUnit::Miles,
                UnitArg::Km => DistanceUnit::Kilometers,
            };
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "u_tour=debug" } else { "u_tour=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.solver_config()?;
    let options = ReaderOptions::default()
        .with_header(!args.no_header)
        .with_delimiter(args.delimiter);

    let file =
        File::open(&args.file).with_context(|| format!("opening {}", args.file.display()))?;
    let records = read_points(BufReader::new(file), options)
        .with_context(|| format!("reading {}", args.file.display()))?;
    if records.is_empty() {
        bail!("{} contains no points", args.file.display());
    }

    let points: Vec<_> = records.iter().map(|r| r.point).collect();
    let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();

    let solution = TourSolver::solve(&points, &config)?;
    let report = RouteReport::new(&solution.tour, &labels, solution.cost, solution.unit);
    println!("{report}");
    Ok(())
}
