use std::io::Write;

use algorithms::sorting::quick_sort;

use crate::input::Tokens;

pub fn run<W: Write>(text: &str, out: &mut W) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_count("element count")?;
    let mut values = tokens.take_i64s(n, "element")?;
    tokens.finish();

    quick_sort(&mut values);
    tracing::debug!(n, "sorted");

    let line = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{line}")?;
    Ok(())
}
