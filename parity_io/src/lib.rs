use std::io::{self, ErrorKind, Read, Write};

use log::trace;

/// Handle on the process's standard input that is not backed by std's shared
/// stdin buffer.
#[cfg(any(unix, windows))]
pub type RawStdin = std::fs::File;

#[cfg(not(any(unix, windows)))]
pub type RawStdin = io::StdinLock<'static>;

/// Reads a single byte from `reader`.
///
/// Issues one `read` call into a one-byte buffer, so at most one byte is taken
/// from the stream. Returns `Ok(None)` at end of stream.
pub fn read_byte<R: Read + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = 0u8;
    loop {
        match reader.read(std::slice::from_mut(&mut byte)) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte)),
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                trace!("read interrupted, retrying");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Writes `literal` in full and flushes the writer.
pub fn write_literal<W: Write + ?Sized>(writer: &mut W, literal: &[u8]) -> io::Result<()> {
    writer.write_all(literal)?;
    writer.flush()
}

/// Opens standard input for unbuffered reads.
///
/// `std::io::stdin()` fills an internal buffer of several kilobytes on the first
/// read, which would pull more than one byte off the descriptor. On Unix and
/// Windows the descriptor is duplicated into a `File` instead, so a one-byte read
/// is a single one-byte system call.
#[cfg(unix)]
pub fn raw_stdin() -> io::Result<RawStdin> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(std::fs::File::from(fd))
}

#[cfg(windows)]
pub fn raw_stdin() -> io::Result<RawStdin> {
    use std::os::windows::io::AsHandle;

    let handle = io::stdin().as_handle().try_clone_to_owned()?;
    Ok(std::fs::File::from(handle))
}

#[cfg(not(any(unix, windows)))]
pub fn raw_stdin() -> io::Result<RawStdin> {
    Ok(io::stdin().lock())
}
