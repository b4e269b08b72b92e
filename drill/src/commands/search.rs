use std::io::Write;

use algorithms::searching::{search, search_checked};
use anyhow::Context;

use crate::input::Tokens;

pub fn run<W: Write>(text: &str, strict: bool, out: &mut W) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_count("element count")?;
    let seq = tokens.take_i64s(n, "sequence element")?;
    let target = tokens.next_i64("target")?;
    tokens.finish();

    let found = if strict {
        search_checked(&seq, &target).context("strict search rejected the sequence")?
    } else {
        search(&seq, &target)
    };
    tracing::debug!(n, target, found, strict, "search finished");

    writeln!(out, "{}", if found { "Found" } else { "Not Found" })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(text: &str, strict: bool) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(text, strict, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_found_and_not_found() {
        assert_eq!(run_str("6\n1 3 5 7 9 11\n7\n", false).unwrap(), "Found\n");
        assert_eq!(run_str("6\n1 3 5 7 9 11\n4\n", false).unwrap(), "Not Found\n");
        assert_eq!(run_str("0\n5\n", false).unwrap(), "Not Found\n");
    }

    #[test]
    fn strict_mode_rejects_unsorted_input() {
        let err = run_str("3\n3 1 2\n1\n", true).unwrap_err();
        assert!(format!("{err:#}").contains("not ascending"));
        assert!(run_str("3\n3 1 2\n1\n", false).is_ok());
    }

    #[test]
    fn truncated_input_is_an_error() {
        let err = run_str("4\n1 2 3\n", false).unwrap_err();
        assert_eq!(err.to_string(), "input ended before target");
    }
}
