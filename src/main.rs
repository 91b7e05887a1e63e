use std::io;

use clap::{Parser, Subcommand};
use pointcalc::{
    CompiledExpression,
    generator::{self, GeneratorConfig},
    point,
};

/// pointcalc evaluates arithmetic formulas over coordinate points and
/// generates randomized test datasets.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Computes the formula value for a single point.
    Eval {
        /// The coordinates, as a whitespace-separated list of numbers.
        #[arg(allow_hyphen_values = true)]
        point:   String,
        /// The formula to evaluate, using x1, x2, ... as variables.
        #[arg(allow_hyphen_values = true)]
        formula: String,
    },
    /// Generates a randomized dataset of points and their formula values.
    Generate {
        /// Number of coordinates per point.
        dimension: usize,
        /// Number of points to generate.
        count:     usize,
        /// The formula to evaluate, using x1, x2, ... as variables.
        #[arg(allow_hyphen_values = true)]
        formula:   String,
        /// Lower bound of the sampling interval.
        #[arg(long, default_value_t = generator::DEFAULT_MIN, allow_negative_numbers = true)]
        min:       f64,
        /// Upper bound of the sampling interval.
        #[arg(long, default_value_t = generator::DEFAULT_MAX, allow_negative_numbers = true)]
        max:       f64,
        /// Seed for reproducible sampling.
        #[arg(long)]
        seed:      Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Eval { point, formula } => run_eval(&point, &formula),
        Command::Generate { dimension,
                            count,
                            formula,
                            min,
                            max,
                            seed, } => {
            let config = GeneratorConfig { dimension,
                                           count,
                                           min,
                                           max,
                                           seed };
            run_generate(&config, &formula)
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_eval(point: &str, formula: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value = point::evaluate(point, formula)?;
    println!("{value}");
    Ok(())
}

fn run_generate(config: &GeneratorConfig, formula: &str) -> Result<(), Box<dyn std::error::Error>> {
    let expr = CompiledExpression::compile(formula)?;
    let stdout = io::stdout();
    generator::generate(config, &expr, &mut stdout.lock())?;
    Ok(())
}
