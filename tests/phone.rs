// tests/phone.rs
//
// Phone normalisation against numbers as they appear on the register.
//
use psi_scrape::config::consts::INVALID_NUMBER;
use psi_scrape::core::phone::{normalize, normalize_value};

#[test]
fn register_examples() {
    assert_eq!(normalize("01 234 5678"), "+353 1 234 5678");
    assert_eq!(normalize("353 86 1234567"), "+353 86 123 4567");
    assert_eq!(normalize("(071) 9142696"), "+353 71 914 2696");
    assert_eq!(normalize("22605 (042) 9322605"), "+353 42 932 2605");
    assert_eq!(normalize("052 12345"), "+353 52 12345");
    assert_eq!(normalize("foo"), INVALID_NUMBER);
}

#[test]
fn country_code_forms() {
    assert_eq!(normalize("+353 86 1234567"), "+353 86 123 4567");
    assert_eq!(normalize("00353 86 1234567"), "+353 86 123 4567");
    assert_eq!(normalize("+353 (0)1 234 5678"), "+353 1 234 5678");
    assert_eq!(normalize("353 71 (071) 9142696"), "+353 71 914 2696");
}

#[test]
fn duplicated_area_code_inside_longer_digit_run() {
    assert_eq!(normalize("12 (02) 345678"), "+353 1 234 5678");
    assert_eq!(normalize("353 12 (02) 345678"), "+353 1 234 5678");
    // leading zero kept inside the parentheses
    assert_eq!(normalize("01 (01) 2345678"), "+353 1 234 5678");
}

#[test]
fn mobiles_and_landlines() {
    assert_eq!(normalize("087-123-4567"), "+353 87 123 4567");
    assert_eq!(normalize("(021) 4123456"), "+353 21 412 3456");
    // eight digits not starting with 1
    assert_eq!(normalize("045 123456"), "+353 45 123 456");
}

#[test]
fn out_of_range_lengths_are_invalid() {
    assert_eq!(normalize(""), INVALID_NUMBER);
    assert_eq!(normalize("12345"), INVALID_NUMBER);
    assert_eq!(normalize("01 234 5678 ext 99"), INVALID_NUMBER);
}

#[test]
fn non_string_input_is_invalid() {
    assert_eq!(normalize_value(None), INVALID_NUMBER);
    assert_eq!(normalize_value(Some("01 234 5678")), "+353 1 234 5678");
}

#[test]
fn never_panics() {
    let odd = [
        "+", "++353", "(", "()", "(0)", "00000", "353", "+353", "00353", "٣٥٣ ٨٦",
        "☎ 01 234 5678", "(((071)))", "22605 (", "1+2+3+4+5+6+7+8", "\u{200B}0861234567",
        "12345 (0123) 4", "99999999999999999999999999",
    ];
    for raw in odd {
        let out = normalize(raw);
        assert!(out == INVALID_NUMBER || out.starts_with("+353 "), "{raw:?} -> {out:?}");
    }
}
