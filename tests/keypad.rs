use std::fs;

use calcbrain::keypad::{Dispatch, replay};
use walkdir::WalkDir;

#[test]
fn scripts_produce_expected_results() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "keys"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = extract_expectation(&content).unwrap_or_else(|| {
                                                        panic!("{path:?} has no '// expect:' line")
                                                    });

        count += 1;
        let actual = replay(&content, Dispatch::Strict).unwrap_or_else(|e| {
                                                           panic!("Script {path:?} failed:\n{content}\nError: {e}")
                                                       });

        assert!(same_value(actual, expected),
                "Script {path:?} produced {actual}, expected {expected}");
    }

    assert!(count > 0, "No keystroke scripts found in scripts/");
}

fn extract_expectation(content: &str) -> Option<f64> {
    content.lines()
           .find_map(|line| line.trim_start().strip_prefix("// expect:"))
           .and_then(|value| value.trim().parse().ok())
}

fn same_value(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0)
}

fn assert_result(src: &str, expected: f64) {
    match replay(src, Dispatch::Strict) {
        Ok(actual) => assert!(same_value(actual, expected), "'{src}' gave {actual}, expected {expected}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if replay(src, Dispatch::Strict).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2 =", 3.0);
    assert_result("7 × 9 =", 63.0);
    assert_result("8 - 5 =", 3.0);
    assert_result("10 ÷ 4 =", 2.5);
}

#[test]
fn negative_literals_are_operands() {
    assert_result("-4 ±", 4.0);
    assert_result("3 - -2 =", 5.0);
}

#[test]
fn unary_inside_pending() {
    assert_result("2 × 9 √ =", 6.0);
}

#[test]
fn unknown_keys_fail_in_strict_mode() {
    assert_failure("1 ^ 2 =");
}

#[test]
fn overflowing_literal_fails() {
    assert_failure("5 1e999");
}

#[test]
fn unknown_keys_pass_in_lenient_mode() {
    assert_eq!(replay("1 ^ 2 =", Dispatch::Lenient).unwrap(), 2.0);
}
