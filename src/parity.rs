/// Written for an even digit
pub const EVEN_LITERAL: &[u8] = b"Even\n";
/// Written for an odd digit
pub const ODD_LITERAL: &[u8] = b"Odd\n";

/// Parity of a single decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of the ASCII digit `byte`, or `None` if `byte` is not in `b'0'..=b'9'`.
    pub fn of_digit(byte: u8) -> Option<Self> {
        if !byte.is_ascii_digit() {
            return None;
        }
        let value = byte - b'0';
        Some(if value % 2 == 0 { Parity::Even } else { Parity::Odd })
    }

    /// Bytes written to stdout for this parity.
    pub fn literal(self) -> &'static [u8] {
        match self {
            Parity::Even => EVEN_LITERAL,
            Parity::Odd => ODD_LITERAL,
        }
    }
}
