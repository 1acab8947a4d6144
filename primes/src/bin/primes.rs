use clap::{Parser, ValueEnum};
use primes::{parse_bound, Marking, SieveReport, DEFAULT_BOUND};
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "List every prime up to a bound using the Sieve of Eratosthenes")]
struct Cli {
    /// Inclusive upper bound
    #[arg(default_value_t = DEFAULT_BOUND, value_parser = parse_bound, allow_negative_numbers = true)]
    bound: usize,

    /// Marking array representation
    #[arg(long, value_enum, default_value_t = MarkingArg::Bool)]
    marking: MarkingArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print timing and prime count to stderr
    #[arg(long)]
    time: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MarkingArg {
    /// One bool per integer
    Bool,
    /// One bit per integer
    Packed,
}

impl From<MarkingArg> for Marking {
    fn from(arg: MarkingArg) -> Self {
        match arg {
            MarkingArg::Bool => Marking::Bool,
            MarkingArg::Packed => Marking::Packed,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Space-separated primes on one line
    Text,
    /// Full report as JSON
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let marking = Marking::from(cli.marking);

    if cli.time {
        eprintln!("Sieving up to {} with {marking} marking...", cli.bound);
    }

    let report = SieveReport::run(cli.bound, marking);

    if cli.time {
        eprintln!("Found {} primes in {:.2?}", report.count, report.elapsed());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => report.write_json(&mut out)?,
    }
    out.flush()?;

    Ok(())
}
