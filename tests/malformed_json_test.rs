//! Integration tests for malformed JSON handling
//!
//! Feeds broken documents through the validator and checks that every
//! failure comes back as a classified verdict instead of a crash.

use pyrite_json::validator::{validate_file, Strictness, ValidationError, Verdict};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to create a test file with given content
fn create_test_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_malformed_documents_are_invalid() {
    let test_cases = vec![
        b"{invalid}".as_slice(),          // unquoted key
        b"{\"a\": 1,}".as_slice(),        // trailing comma
        b"{\"a\" 1}".as_slice(),          // missing colon
        b"[1, 2".as_slice(),              // unclosed array
        b"{\"a\": }".as_slice(),          // missing value
        b"[1 2]".as_slice(),              // missing comma
        b"{\"a\": 'x'}".as_slice(),       // single quotes
        b"not json at all".as_slice(),    // plain text
        b"{\"a\": 01}".as_slice(),        // leading zero
    ];

    for (idx, content) in test_cases.iter().enumerate() {
        let temp_file = create_test_file(content);
        let report = validate_file(temp_file.path(), Strictness::Lenient);
        assert!(
            !report.verdict.is_valid(),
            "test case {} should be invalid",
            idx
        );
    }
}

#[test]
fn test_well_formed_documents_are_valid() {
    let test_cases = vec![
        b"{\"name\": \"Alice\", \"age\": 30}".as_slice(),
        b"[1, 2, 3]".as_slice(),
        b"{\"nested\": {\"deep\": [true, null]}}".as_slice(),
        b"{\"unicode\": \"\xE2\x9C\x93\"}".as_slice(),
        b"  {\"padded\": 1}  \n".as_slice(),
    ];

    for (idx, content) in test_cases.iter().enumerate() {
        let temp_file = create_test_file(content);
        let report = validate_file(temp_file.path(), Strictness::Strict);
        assert!(
            report.verdict.is_valid(),
            "test case {} should be valid",
            idx
        );
    }
}

#[test]
fn test_syntax_failures_carry_decoder_detail() {
    let temp_file = create_test_file(b"{invalid}");
    let report = validate_file(temp_file.path(), Strictness::Lenient);
    match report.verdict {
        Verdict::Invalid(ValidationError::Syntax { line, column, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(column > 1);
            assert!(reason.contains("line 1"), "reason was: {reason}");
        }
        other => panic!("expected a syntax failure, got {other:?}"),
    }
}

#[test]
fn test_bare_scalar_roots_depend_on_mode() {
    for content in [
        b"\"hello\"".as_slice(),
        b"42".as_slice(),
        b"true".as_slice(),
        b"null".as_slice(),
    ] {
        let temp_file = create_test_file(content);

        let lenient = validate_file(temp_file.path(), Strictness::Lenient);
        assert!(lenient.verdict.is_valid());

        let strict = validate_file(temp_file.path(), Strictness::Strict);
        assert!(matches!(
            strict.verdict,
            Verdict::Invalid(ValidationError::InvalidRootType(_))
        ));
    }
}

#[test]
fn test_non_utf8_input_reports_encoding_error() {
    let temp_file = create_test_file(&[0xC3, 0x28, 0xA0, 0xA1]);
    let report = validate_file(temp_file.path(), Strictness::Lenient);
    assert!(matches!(
        report.verdict,
        Verdict::Invalid(ValidationError::Encoding(_))
    ));
}

#[test]
fn test_zero_byte_file_reports_empty() {
    let temp_file = NamedTempFile::new().unwrap();
    let report = validate_file(temp_file.path(), Strictness::Lenient);
    assert!(matches!(
        report.verdict,
        Verdict::Invalid(ValidationError::Empty(_))
    ));
}

#[test]
fn test_empty_roots_stay_valid_in_both_modes() {
    for content in [b"{}".as_slice(), b"[]".as_slice()] {
        let temp_file = create_test_file(content);
        for strictness in [Strictness::Lenient, Strictness::Strict] {
            let report = validate_file(temp_file.path(), strictness);
            assert!(matches!(report.verdict, Verdict::EmptyButValid));
        }
    }
}

#[test]
fn test_repeated_validation_is_stable() {
    let temp_file = create_test_file(b"{\"a\": 1,}");
    let first = validate_file(temp_file.path(), Strictness::Lenient);
    let second = validate_file(temp_file.path(), Strictness::Lenient);
    assert!(!first.verdict.is_valid());
    assert!(!second.verdict.is_valid());
}

#[test]
fn test_deeply_nested_arrays_do_not_hang() {
    let mut content = Vec::new();
    for _ in 0..100 {
        content.push(b'[');
    }
    for _ in 0..100 {
        content.push(b']');
    }

    let temp_file = create_test_file(&content);
    // Accepted or rejected depending on the decoder's recursion limit; the
    // point is a classified verdict either way.
    let _report = validate_file(temp_file.path(), Strictness::Lenient);
}

#[test]
fn test_pretty_content_preserves_key_order() {
    let temp_file = create_test_file(b"{\"zebra\": 1, \"apple\": 2}");
    let rendered = pyrite_json::report::pretty_content(temp_file.path()).unwrap();
    let zebra = rendered.find("\"zebra\"").unwrap();
    let apple = rendered.find("\"apple\"").unwrap();
    assert!(zebra < apple, "keys should keep encounter order:\n{rendered}");
    assert!(rendered.contains("\n  \"zebra\": 1"), "2-space indent expected");
}
