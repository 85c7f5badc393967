//! Sample input for the binaries: integers separated by commas or whitespace.

use std::fs;
use std::path::Path;

use crate::error::PmfError;

/// Parse `"1, 2 3\n4"` into `[1, 2, 3, 4]`. Empty tokens are skipped.
pub fn parse_sample(text: &str) -> Result<Vec<i64>, PmfError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<i64>().map_err(|source| PmfError::Parse {
                token: t.to_string(),
                source,
            })
        })
        .collect()
}

pub fn read_sample_file(path: &Path) -> Result<Vec<i64>, PmfError> {
    let text = fs::read_to_string(path)?;
    parse_sample(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_sample("1, 2 3\n-4,,5").unwrap(), vec![1, 2, 3, -4, 5]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(parse_sample("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_bad_token() {
        match parse_sample("1,x,3") {
            Err(PmfError::Parse { token, .. }) => assert_eq!(token, "x"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
