use std::{path::Path, process::ExitCode};

use lox_astgen::{Error, generate};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// sysexits.h
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [output_dir] = &args[..] else {
        eprintln!("Usage: lox-astgen <output directory>");
        return ExitCode::from(EX_USAGE);
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match generate(Path::new(output_dir)) {
        Ok(paths) => {
            tracing::debug!(files = paths.len(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(match err {
                Error::Schema(_) => EX_DATAERR,
                Error::Write { .. } => EX_IOERR,
            })
        }
    }
}
