//! Property tests for classification over every byte value.

use digit_parity::{classify, run, Outcome, Parity};
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #[test]
    fn digits_print_their_parity(digit in b'0'..=b'9', rest in proptest::collection::vec(any::<u8>(), 0..16)) {
        let mut input = vec![digit];
        input.extend(rest);
        let mut reader = Cursor::new(input);
        let mut out = Vec::new();

        let outcome = run(&mut reader, &mut out);

        let expected: &[u8] = if (digit - b'0') % 2 == 0 { b"Even\n" } else { b"Odd\n" };
        prop_assert_eq!(out, expected.to_vec());
        prop_assert!(matches!(outcome, Outcome::Classified(_)));
        prop_assert_eq!(reader.position(), 1);
    }

    #[test]
    fn non_digits_print_nothing(byte in any::<u8>().prop_filter("not a digit", |b| !b.is_ascii_digit()),
                                rest in proptest::collection::vec(any::<u8>(), 0..16)) {
        let mut input = vec![byte];
        input.extend(rest);
        let mut reader = Cursor::new(input);
        let mut out = Vec::new();

        prop_assert_eq!(run(&mut reader, &mut out), Outcome::NotDigit(byte));
        prop_assert!(out.is_empty());
        prop_assert_eq!(reader.position(), 1);
    }

    #[test]
    fn classify_agrees_with_of_digit(byte in any::<u8>()) {
        let outcome = classify(&mut Cursor::new([byte]));
        prop_assert_eq!(outcome.parity(), Parity::of_digit(byte));
    }
}
