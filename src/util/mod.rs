//! This module contains utility methods regarding
//! reading sequences from files.
use log::debug;

use std::path::Path;
use std::{fs, io, io::BufRead, process};

use super::{Result, Sequence, SequenceExt};

/// Reads a FASTA file and concatenates all sequence lines. Header lines starting
/// with '>' are skipped and surrounding whitespace of every line is removed.
/// Multiple records are not split but joined into one sequence.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let f = fs::File::open(path)?;
    read_fasta_from(io::BufReader::new(f))
}

pub fn read_fasta_from<R: BufRead>(reader: R) -> io::Result<String> {
    let mut sequence = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            debug!("skipping header {}", line);
            continue;
        }
        sequence.push_str(line.trim());
    }
    Ok(sequence)
}

pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let raw = read_fasta(path)?;
    Sequence::parse(&raw)
}

/// This method reads a sequence from the FASTA file at the specified path.
/// Should reading or validating the sequence fail, an error is printed and the
/// process exited.
pub fn read_sequence_or_exit(path: &str) -> Sequence {
    read_sequence(path).unwrap_or_else(|e| {
        eprintln!("Encountered error while reading sequence data from {}: {}", path, e);
        process::exit(1);
    })
}
