//! `grch` entrypoint: print the SHA-256 fingerprint of a file.

mod report;

use anyhow::Result;
use clap::Parser;
use grc_hasher::{hash_file, hash_stream, HashError};
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::report::{write_json, HashReport};

/// CLI arguments for the hasher.
#[derive(Parser, Debug)]
#[command(
    name = "grch",
    version = grc_hasher::VERSION,
    about = "Print the SHA-256 fingerprint of a file"
)]
struct Args {
    /// File to hash
    path: PathBuf,

    /// Emit a JSON report instead of `<digest>  <path>`
    #[arg(long)]
    json: bool,

    /// Hash through an open handle first positioned at this byte offset
    #[arg(long, value_name = "BYTES")]
    offset: Option<u64>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    run(args)
}

/// Hash the requested file and print the result.
fn run(args: Args) -> Result<ExitCode> {
    let outcome = match args.offset {
        Some(offset) => hash_at_offset(&args.path, offset)
            .map(|(digest, position)| (digest, Some(position))),
        None => hash_file(&args.path).map(|digest| (digest, None)),
    };
    let report = match outcome {
        Ok((digest, position)) => HashReport::digest(&args.path, digest, position),
        Err(err) => HashReport::failure(&args.path, &err),
    };

    if args.json {
        write_json(&report)?;
    } else if let Some(digest) = &report.sha256 {
        println!("{digest}  {}", args.path.display());
    } else if let Some(error) = &report.error {
        eprintln!("grch: {}", error.message);
        for detail in &error.details {
            eprintln!("  caused by: {detail}");
        }
    }

    Ok(if report.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Hash via `hash_stream` from an offset, returning the digest and the
/// position the handle was left at.
fn hash_at_offset(path: &Path, offset: u64) -> Result<(String, u64), HashError> {
    let mut file = File::open(path).map_err(|err| HashError::from_io(path, err))?;
    file.seek(SeekFrom::Start(offset))?;
    let digest = hash_stream(&mut file)?;
    let position = file.stream_position()?;
    Ok((digest, position))
}
