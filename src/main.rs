use std::{env, io, path::PathBuf, process::ExitCode};

use meta_assembler::{errors::report::LogReporter, Assembler};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let dir = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let mut stdout = io::stdout();
    let mut assembler = Assembler::new(&mut stdout, Box::new(LogReporter));

    match assembler.configure(&dir) {
        Ok(properties) => tracing::info!(binary = properties.binary_name(), "output binary"),
        Err(error) => {
            tracing::error!("{}", error);
            return ExitCode::FAILURE;
        }
    }

    match assembler.run_configured() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{}", error);
            ExitCode::from(65)
        }
    }
}
