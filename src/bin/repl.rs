use clap::Parser;
use dice_prob::{dist, Config, Limits, RollContext};
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "dice-prob")]
#[command(version)]
#[command(about = "Evaluate dice expressions over exact probability distributions")]
struct Cli {
    /// Expressions to evaluate; reads from stdin when none are given
    expressions: Vec<String>,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Most dice a single roll may use (0 for no limit)
    #[arg(long, default_value = "1000")]
    max_dice: usize,

    /// Most outcomes a single table may have (0 for no limit)
    #[arg(long, default_value = "10000")]
    max_outcomes: usize,

    /// Print the distribution of each result
    #[arg(short, long)]
    table: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let cap = |max: usize| (max > 0).then_some(max);
        Config {
            limits: Limits {
                max_dice: cap(self.max_dice),
                max_outcomes: cap(self.max_outcomes),
            },
            seed: self.seed,
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    if let Err(why) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: {}", why);
    }
}

fn run(line: &str, ctx: &mut RollContext<StdRng>, table: bool) {
    match dice_prob::roll_with(line, ctx) {
        Ok(outcome) => {
            if table {
                println!("{}", outcome.distribution);
            }
            println!("RESULT: {}", outcome.value);
        }
        Err(why) => eprintln!("Error: {}", why),
    }
    dist::report_leaks();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut ctx = cli.config().context();

    if !cli.expressions.is_empty() {
        for expr in &cli.expressions {
            run(expr, &mut ctx, cli.table);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            run(&line, &mut ctx, cli.table);
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
