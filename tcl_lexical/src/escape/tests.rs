use proptest::{prop_assert_eq, proptest};
use strum::IntoEnumIterator;
use tcl_base::source_file::{CharSource, Cursor};

use super::{read_escape, ControlEscape};

/// Decodes the escape written after a backslash and returns it with the text left unconsumed.
fn decode(escape: &str) -> (char, &str) {
    let mut cursor = Cursor::new(escape);
    let character = read_escape(&mut cursor);

    (character, cursor.rest())
}

#[test]
fn control_escapes() {
    assert_eq!(decode("a"), ('\x07', ""));
    assert_eq!(decode("b"), ('\x08', ""));
    assert_eq!(decode("f"), ('\x0C', ""));
    assert_eq!(decode("n"), ('\n', ""));
    assert_eq!(decode("r"), ('\r', ""));
    assert_eq!(decode("tab"), ('\t', "ab"));
    assert_eq!(decode("v"), ('\x0B', ""));
}

#[test]
fn literal_escapes() {
    assert_eq!(decode("\\\\"), ('\\', "\\"));
    assert_eq!(decode("\""), ('"', ""));
    assert_eq!(decode("{"), ('{', ""));
    assert_eq!(decode("q"), ('q', ""));
    assert_eq!(decode(" x"), (' ', "x"));
    assert_eq!(decode("é"), ('é', ""));
}

#[test]
fn newline_continuation() {
    assert_eq!(decode("\n \t  word"), (' ', "word"));

    // only the first newline is folded
    assert_eq!(decode("\n\n  word"), (' ', "\n  word"));
    assert_eq!(decode("\r\nword"), ('\r', "\nword"));
}

#[test]
fn octal_escapes() {
    assert_eq!(decode("101"), ('A', ""));
    assert_eq!(decode("0"), ('\0', ""));
    assert_eq!(decode("12x"), ('\n', "x"));
    assert_eq!(decode("1014"), ('A', "4"));
    assert_eq!(decode("08"), ('\0', "8"));

    // 0o777 does not fit in a byte
    assert_eq!(decode("777"), ('\u{ff}', ""));
    assert_eq!(decode("400"), ('\0', ""));
}

#[test]
fn hex_escapes() {
    assert_eq!(decode("xaabbccddeeff"), ('\u{ff}', ""));
    assert_eq!(decode("xa"), ('\n', ""));
    assert_eq!(decode("x41g"), ('A', "g"));
    assert_eq!(decode("x123"), ('#', ""));
    assert_eq!(decode("xyz"), ('x', "yz"));
    assert_eq!(decode("x"), ('x', ""));
}

#[test]
fn unicode_escapes() {
    assert_eq!(decode("u00e9"), ('é', ""));
    assert_eq!(decode("u41 "), ('A', " "));
    assert_eq!(decode("u12345"), ('\u{1234}', "5"));
    assert_eq!(decode("uz"), ('u', "z"));
    assert_eq!(decode("ud800"), (char::REPLACEMENT_CHARACTER, ""));
}

#[test]
fn dangling_backslash() {
    let mut cursor = Cursor::new("");
    let position = cursor.position();

    assert_eq!(read_escape(&mut cursor), '\\');
    assert_eq!(cursor.position(), position);
}

#[test]
fn control_escape_letters_are_unique() {
    for escape in ControlEscape::iter() {
        assert_eq!(ControlEscape::from_letter(escape.letter()), Some(escape));
    }

    assert_eq!(ControlEscape::from_letter('e'), None);
}

proptest! {
    #[test]
    fn control_escape_test(
        escape in proptest::sample::select(ControlEscape::iter().collect::<Vec<_>>()),
        trailing in "[^\\n]{0,8}",
    ) {
        let text = format!("{}{trailing}", escape.letter());
        let mut cursor = Cursor::new(&text);

        prop_assert_eq!(read_escape(&mut cursor), escape.character());
        prop_assert_eq!(cursor.rest(), trailing.as_str());
    }

    #[test]
    fn octal_escape_test(
        value in 0u32..0o1000,
    ) {
        let text = format!("{value:03o}");
        let (character, rest) = decode(&text);

        prop_assert_eq!(character as u32, value & 0xFF);
        prop_assert_eq!(rest, "");
    }

    #[test]
    fn hex_escape_test(
        digits in "[0-9a-fA-F]{1,12}",
    ) {
        let text = format!("x{digits}");
        let (character, rest) = decode(&text);

        let last_two = &digits[digits.len().saturating_sub(2)..];
        prop_assert_eq!(character as u32, u32::from_str_radix(last_two, 16).unwrap());
        prop_assert_eq!(rest, "");
    }
}
