use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use dvbt2ll::output::SymbolOutput;
use dvbt2ll::output::cf32::{new_file_output, new_stdout_output};
use dvbt2ll::source::Source;
use dvbt2ll::source::reader::{new_file_source, new_stdin_source};
use dvbt2ll::{Cli, new_transmitter};

fn go(args: &Cli) -> dvbt2ll::Result<()> {
    let mut transmitter = new_transmitter(&args.config())?;

    let mut source: Box<dyn Source> = match &args.input {
        Some(path) => Box::new(new_file_source(path)?),
        None => Box::new(new_stdin_source()),
    };
    let mut output: Box<dyn SymbolOutput> = match &args.output {
        Some(path) => Box::new(new_file_output(path)?),
        None => Box::new(new_stdout_output()),
    };

    transmitter.run(source.as_mut(), output.as_mut(), args.frames)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    // symbols may go to stdout, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match go(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
