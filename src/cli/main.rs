#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ibfs::report::{input_table, latex_section, plain_report};
use ibfs::{compare, Comparison, Method, OpportunityBasis, Options, PenaltySelection};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod input;

/// Initial basic feasible solutions for balanced transportation problems.
#[derive(Parser)]
#[command(name = "ibfs-cli", version, about, long_about = None)]
struct Cli {
    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one problem and print the input table and each method's solution
    Solve {
        /// Problem CSV (header `D1,...,Dn,Supply`, one row per source, a final demand row)
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = MethodArg::All)]
        method: MethodArg,

        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Write the non-zero allocations as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },
    /// Print a LaTeX comparison section for every problem file
    Latex {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },
}

#[derive(Args)]
struct Tuning {
    /// Which penalty Vogel's method picks first
    #[arg(long, value_enum, default_value_t = SelectionArg::Smallest)]
    vogel_selection: SelectionArg,

    /// Row/column reference costs for Russell's method
    #[arg(long, value_enum, default_value_t = BasisArg::Minima)]
    russell_basis: BasisArg,
}

impl From<&Tuning> for Options {
    fn from(t: &Tuning) -> Self {
        Options {
            selection: match t.vogel_selection {
                SelectionArg::Smallest => PenaltySelection::Smallest,
                SelectionArg::Largest => PenaltySelection::Largest,
            },
            basis: match t.russell_basis {
                BasisArg::Minima => OpportunityBasis::Minima,
                BasisArg::Maxima => OpportunityBasis::Maxima,
            },
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    All,
    NorthWestCorner,
    Vogel,
    Russell,
}

impl MethodArg {
    fn methods(self) -> &'static [Method] {
        match self {
            MethodArg::All => &Method::ALL,
            MethodArg::NorthWestCorner => &[Method::NorthWestCorner],
            MethodArg::Vogel => &[Method::Vogel],
            MethodArg::Russell => &[Method::Russell],
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Plain,
    Latex,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SelectionArg {
    Smallest,
    Largest,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BasisArg {
    Minima,
    Maxima,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn title(file: &Path) -> String {
    file.file_stem()
        .map_or_else(|| file.display().to_string(), |s| s.to_string_lossy().into_owned())
}

/// Solve the problem in `file`, reporting validation failures the way users expect to see them.
fn solve_file(
    file: &Path,
    methods: &[Method],
    options: Options,
) -> Result<Option<(ibfs::TransportProblem<i64>, Comparison<i64>)>, Box<dyn Error>> {
    let problem = match input::read_problem(File::open(file)?) {
        Ok(problem) => problem,
        Err(e) => match e.downcast_ref::<ibfs::Error>() {
            Some(invalid) => {
                println!("{}", invalid.kind());
                log::warn!("{}: {invalid}", file.display());
                return Ok(None);
            }
            None => return Err(e),
        },
    };

    let comparison = compare(&problem, methods, options);
    comparison.check(&problem).map_err(|v| v.to_string())?;
    Ok(Some((problem, comparison)))
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Solve {
            file,
            method,
            format,
            output,
            tuning,
        } => {
            let Some((problem, comparison)) =
                solve_file(&file, method.methods(), Options::from(&tuning))?
            else {
                return Ok(());
            };

            match format {
                Format::Plain => {
                    println!("{}", input_table(&problem));
                    print!("{}", plain_report(&comparison));
                }
                Format::Latex => print!("{}", latex_section(&title(&file), &comparison)),
            }

            if let Some(output) = output {
                input::write_shipments(File::create(&output)?, &comparison)?;
                log::info!("wrote allocations to {}", output.display());
            }
        }
        Command::Latex { files, tuning } => {
            let options = Options::from(&tuning);
            for file in files {
                log::info!("Running {}", title(&file));
                if let Some((_, comparison)) = solve_file(&file, &Method::ALL, options)? {
                    print!("{}", latex_section(&title(&file), &comparison));
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logging: {e}");
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        process::exit(1);
    }
}
