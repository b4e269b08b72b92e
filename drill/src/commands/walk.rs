use std::io::Write;

use algorithms::graph::EdgeSet;
use anyhow::Context;

use crate::input::Tokens;

pub fn run<W: Write>(text: &str, out: &mut W) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_count("vertex count")?;
    let m = tokens.next_count("edge count")?;
    let start = tokens.next_count("start vertex")?;

    let mut graph = EdgeSet::new(n).context("invalid vertex count")?;
    for k in 1..=m {
        let u = tokens.next_count("edge source")?;
        let v = tokens.next_count("edge target")?;
        graph
            .add_edge(u, v)
            .with_context(|| format!("edge #{k} ({u} {v})"))?;
    }
    tokens.finish();

    let edges = graph.walk(start).context("invalid start vertex")?;
    for (u, v) in edges {
        writeln!(out, "{u} {v}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_line_per_edge() {
        let mut out = Vec::new();
        run("4 5 1\n1 2\n1 3\n2 4\n3 4\n4 1\n", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 2\n2 4\n4 1\n1 3\n3 4\n");
    }

    #[test]
    fn out_of_range_edge_is_reported_with_its_position() {
        let mut out = Vec::new();
        let err = run("2 2 1\n1 2\n2 3\n", &mut out).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("edge #2 (2 3)"), "{msg}");
        assert!(msg.contains("vertex 3 is outside 1..=2"), "{msg}");
    }

    #[test]
    fn huge_vertex_count_is_an_error() {
        let mut out = Vec::new();
        let err = run("9223372036854775807 0 1\n", &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the limit"), "{err:#}");
        assert!(out.is_empty());
    }
}
