//! Test utilities for backends.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;

/// Assert that two strings are equal, with a line-by-line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (contents differ only in trailing newlines)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_content_eq_matches() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    #[should_panic(expected = "trailing newlines")]
    fn test_assert_content_eq_trailing_newline() {
        assert_content_eq("a", "a\n");
    }

    #[test]
    fn test_generate_to_temp() {
        let dir = generate_to_temp(|path| {
            std::fs::write(path.join("out.h"), "#pragma once\n")?;
            Ok(())
        })
        .unwrap();

        assert!(dir.path().join("out.h").exists());
    }
}
