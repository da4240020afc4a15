use std::fs::File;
use std::io::{self, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::fuel::Mass;

/// Everything that can go wrong between the input file and a parsed mass.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("line {line}: {text:?} is not a valid mass: {source}")]
    Parse {
        line: usize,
        text: String,
        source: ParseIntError,
    },
    #[error("line {line}: not valid UTF-8: {source}")]
    Encoding { line: usize, source: FromUtf8Error },
    #[error("unable to read line {line}: {source}")]
    Read { line: usize, source: io::Error },
}

pub fn open_source<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, InputError> {
    let path = path.as_ref();

    File::open(path)
        .map(BufReader::new)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub fn decode_line(line: usize, bytes: Vec<u8>) -> Result<String, InputError> {
    String::from_utf8(bytes).map_err(|source| InputError::Encoding { line, source })
}

/// Parses one input line. Blank lines yield `None`, `line` is the 1-based
/// position used in the error.
pub fn parse_mass(line: usize, text: &str) -> Result<Option<Mass>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<Mass>()
        .map(Some)
        .map_err(|source| InputError::Parse {
            line,
            text: text.to_string(),
            source,
        })
}
