//! Reads two length-prefixed integer sequences and prints how many pairs
//! of shared values they order differently.
//!
//! Usage: `cross_inversion [PATH]`. Reads standard input when `PATH` is
//! absent or `-`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    process::ExitCode,
};

use input::{InputError, LenPrefixed, OnceSource, Readable};
use log::{error, info};
use thiserror::Error;

#[derive(Debug, Error)]
enum DriverError {
    #[error("cannot open `{path}`")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed input")]
    Input(#[from] InputError),
    #[error(transparent)]
    Count(#[from] cross_inversion::Error),
    #[error("cannot write the result")]
    Output(#[source] io::Error),
}

fn open(path: Option<String>) -> Result<Box<dyn BufRead>, DriverError> {
    match path.as_deref() {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|source| DriverError::Open {
                path: p.to_owned(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

fn run() -> Result<(), DriverError> {
    let mut src = OnceSource::new(open(std::env::args().nth(1))?)?;
    let a = LenPrefixed::<i64>::read(&mut src)?;
    let b = LenPrefixed::<i64>::read(&mut src)?;
    info!("read {} and {} values", a.len(), b.len());

    let count = cross_inversion::cross_inversion(&a, &b)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{count}").map_err(DriverError::Output)
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut msg = e.to_string();
            let mut cur: &dyn std::error::Error = &e;
            while let Some(src) = cur.source() {
                msg += &format!(": {src}");
                cur = src;
            }
            error!("{msg}");
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
