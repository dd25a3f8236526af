use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn, LevelFilter, Log, Metadata, Record};

use queens_engine::bench::{self, DEFAULT_RUNS};
use queens_engine::board::BoardSize;
use queens_engine::oracle;
use queens_engine::search::{Engine, EngineConfig, Partition, DEFAULT_THREADS};
use queens_engine::Placement;

#[derive(Parser, Debug)]
#[command(name = "queens")]
#[command(about = "Count N-Queens solutions with bitmask backtracking")]
struct Args {
    /// Board size (NxN)
    #[arg(short = 'n', long = "size", default_value = "8")]
    size: BoardSize,

    /// Search engine: recursive, iterative, parallel or reference
    #[arg(short, long, default_value_t = Engine::Iterative)]
    engine: Engine,

    /// Worker threads for the parallel engine
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Split work over the first two ranks instead of the first
    #[arg(long)]
    two_ranks: bool,

    /// Search every first-rank column instead of half the board
    #[arg(long)]
    no_symmetry: bool,

    /// Print every solution
    #[arg(short, long)]
    print: bool,

    /// Benchmark over this many runs instead of a single search
    #[arg(long, num_args = 0..=1, value_name = "RUNS")]
    bench: Option<Option<usize>>,

    /// Stop the search after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Minimal stderr logger.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let thread = std::thread::current();
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                thread.name().unwrap_or("?"),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn render(placement: &Placement, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{placement}")
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = EngineConfig::new(args.size)
        .engine(args.engine)
        .threads(args.threads)
        .partition(if args.two_ranks {
            Partition::FirstTwoRanks
        } else {
            Partition::FirstRank
        })
        .symmetry(!args.no_symmetry)
        .record_solutions(args.print)
        .time_limit(args.time_limit_ms.map(Duration::from_millis));

    let mut solver = match config.build() {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(runs) = args.bench {
        let runs = runs.unwrap_or(DEFAULT_RUNS);
        return match bench::benchmark(solver.as_mut(), runs) {
            Ok(report) => {
                println!(
                    "{} {} over {} runs: trimmed mean {:?} (fastest {:?}, slowest {:?})",
                    report.size,
                    config.engine,
                    report.runs,
                    report.trimmed_mean,
                    report.fastest,
                    report.slowest
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let mut print_error = None;
    let result = if config.record_solutions {
        let mut out = io::stdout().lock();
        let mut printer = |placement: &Placement| {
            if print_error.is_none() {
                if let Err(err) = render(placement, &mut out) {
                    print_error = Some(err);
                }
            }
        };
        solver.run(Some(&mut printer))
    } else {
        solver.run(None)
    };

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(err) = print_error {
        eprintln!("error: failed to print solutions: {err}");
        return ExitCode::FAILURE;
    }

    println!("Total number of solution(s): {}", report.solutions);
    if !report.status.is_complete() {
        warn!("Search stopped early, the count is partial");
    } else if let Some(expected) = oracle::expected_solutions(report.size.get()) {
        if expected != report.solutions {
            warn!(
                "Count for {} disagrees with the known value {expected}",
                report.size
            );
        }
    }
    info!(
        "{} engine: {} nodes, {} seeds in {:?}",
        report.engine, report.nodes, report.seeds, report.elapsed
    );
    ExitCode::SUCCESS
}
