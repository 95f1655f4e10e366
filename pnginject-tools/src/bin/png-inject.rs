use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pnginject_png::{ChunkWriter, Injection, Png};
use tracing_subscriber::prelude::*;

/// Copy a PNG file and add a `coCK` chunk after every `IDAT` chunk
#[derive(Parser)]
#[command(about, version)]
struct Args {
    /// PNG file to read
    input: PathBuf,
    /// File to write, created or overwritten
    output: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("Could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{}' is not a valid PNG file: {source}", path.display())]
    Png {
        path: PathBuf,
        source: pnginject_png::Error,
    },
    #[error("Could not create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: pnginject_png::Error,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let data = std::fs::read(&args.input).map_err(|source| Error::Read {
        path: args.input.clone(),
        source,
    })?;

    // Parsing fails before the output file is touched
    let png = Png::new(data).map_err(|err| Error::Png {
        path: args.input.clone(),
        source: err.into_err(),
    })?;

    let file = File::create(&args.output).map_err(|source| Error::Create {
        path: args.output.clone(),
        source,
    })?;

    let write_err = |source| Error::Write {
        path: args.output.clone(),
        source,
    };

    let mut writer = ChunkWriter::new(BufWriter::new(file));
    let summary = Injection::default()
        .transcode(&png, &mut writer)
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::info!(
        "Wrote {} bytes to '{}': {} chunks copied, {} chunks injected",
        summary.bytes_written,
        args.output.display(),
        summary.chunks_copied,
        summary.chunks_injected
    );

    Ok(())
}
