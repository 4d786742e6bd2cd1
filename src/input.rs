//! Plain-text sequence sources and sinks.
//!
//! Two line-oriented layouts are understood:
//! - pair files: consecutive lines are read two at a time, each pair is one
//!   alignment job; reading stops at the first pair with a blank or missing
//!   line.
//! - assembly files: blank lines are ignored, the first remaining line is the
//!   template and every later line is a fragment.
//!
//! Trailing whitespace is stripped from every line. Failures here are reported
//! as [`SourceError`] and are never folded into the core's error type.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("read error: {0}")]
    Io(#[from] io::Error),

    #[error("no template sequence found in input")]
    MissingTemplate,
}

/// One alignment job from a pair file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencePair {
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

/// Template plus fragments from an assembly file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblyInput {
    pub template: Vec<u8>,
    pub fragments: Vec<Vec<u8>>,
}

fn stripped_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end().as_bytes().to_vec()))
}

pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<SequencePair>, SourceError> {
    let mut lines = stripped_lines(reader);
    let mut pairs = Vec::new();
    loop {
        let a = match lines.next().transpose()? {
            Some(a) if !a.is_empty() => a,
            _ => break,
        };
        let b = match lines.next().transpose()? {
            Some(b) if !b.is_empty() => b,
            _ => break,
        };
        pairs.push(SequencePair { a, b });
    }
    Ok(pairs)
}

pub fn read_assembly<R: BufRead>(reader: R) -> Result<AssemblyInput, SourceError> {
    let mut sequences = Vec::new();
    for line in stripped_lines(reader) {
        let line = line?;
        if !line.is_empty() {
            sequences.push(line);
        }
    }
    if sequences.is_empty() {
        return Err(SourceError::MissingTemplate);
    }
    let template = sequences.remove(0);
    Ok(AssemblyInput {
        template,
        fragments: sequences,
    })
}

fn open(path: &Path) -> Result<BufReader<File>, SourceError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub fn read_pairs_from_path(path: impl AsRef<Path>) -> Result<Vec<SequencePair>, SourceError> {
    read_pairs(open(path.as_ref())?)
}

pub fn read_assembly_from_path(path: impl AsRef<Path>) -> Result<AssemblyInput, SourceError> {
    read_assembly(open(path.as_ref())?)
}

/// Write `consensus` followed by a newline.
pub fn write_consensus<W: Write>(mut out: W, consensus: &[u8]) -> io::Result<()> {
    out.write_all(consensus)?;
    out.write_all(b"\n")?;
    out.flush()
}
