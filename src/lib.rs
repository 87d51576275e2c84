use std::io::{Read, Write};

use log::{debug, error, info, warn};

pub mod parity;

pub use parity::Parity;

/// Result of classifying the first byte of an input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One ASCII digit was read.
    Classified(Parity),
    /// One byte was read and it is not an ASCII digit.
    NotDigit(u8),
    /// The stream was already at its end.
    EndOfInput,
    /// The read itself failed.
    ReadFailed,
}

impl Outcome {
    /// Parity of the digit read, if one was read.
    pub fn parity(self) -> Option<Parity> {
        match self {
            Outcome::Classified(parity) => Some(parity),
            _ => None,
        }
    }
}

/// Consumes at most one byte from `reader` and classifies it.
pub fn classify<R: Read + ?Sized>(reader: &mut R) -> Outcome {
    match parity_io::read_byte(reader) {
        Ok(Some(byte)) => {
            debug!("consumed byte 0x{}", hex::encode([byte]));
            match Parity::of_digit(byte) {
                Some(parity) => Outcome::Classified(parity),
                None => Outcome::NotDigit(byte),
            }
        }
        Ok(None) => Outcome::EndOfInput,
        Err(e) => {
            warn!("failed to read input byte: {}", e);
            Outcome::ReadFailed
        }
    }
}

/// Classifies the first byte of `reader` and, for a digit, writes `Even\n` or
/// `Odd\n` to `writer`. Nothing is written otherwise.
///
/// A failed write is logged; the returned outcome still reflects what was read.
pub fn run<R, W>(reader: &mut R, writer: &mut W) -> Outcome
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let outcome = classify(reader);
    info!("outcome: {:?}", outcome);

    if let Some(parity) = outcome.parity() {
        if let Err(e) = parity_io::write_literal(writer, parity.literal()) {
            error!("failed to write {:?} to output: {}", parity, e);
        }
    }
    outcome
}
