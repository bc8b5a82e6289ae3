use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use bitalg::Error;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bitalg")]
#[command(about = "Reads four integer sets from stdin and prints ((A | B) & C) - D")]
struct Args {
    /// Tracing log level, written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdout = BufWriter::new(io::stdout().lock());

    match bitalg::run(io::stdin().lock(), stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Input(err)) => {
            error!("{}", err);
            println!("Input error");
            ExitCode::from(1)
        }
        // 2 is taken by clap for usage errors.
        Err(err) => {
            error!("{}", err);
            ExitCode::from(3)
        }
    }
}
