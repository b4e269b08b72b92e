use std::io::Write;

use algorithms::registry::UidRegistry;

pub fn run<W: Write>(text: &str, kind: &str, out: &mut W) -> anyhow::Result<()> {
    let mut registry = UidRegistry::new(kind);
    for (lineno, line) in text.lines().enumerate() {
        let mut words = line.split_whitespace();
        let Some(op) = words.next() else { continue };
        match (op, words.next(), words.next()) {
            ("add", Some(id), None) => match registry.add(id.to_string()) {
                Ok(()) => writeln!(out, "added {id}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ("remove", Some(id), None) => match registry.remove(&id.to_string()) {
                Ok(_) => writeln!(out, "removed {id}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ("exists", Some(id), None) => writeln!(out, "{}", registry.contains(&id.to_string()))?,
            ("list", None, None) => writeln!(out, "{}", registry.ids().join(" "))?,
            _ => {
                tracing::warn!(line = lineno + 1, text = line, "unrecognised registry command");
                writeln!(out, "error: unrecognised command `{}`", line.trim())?;
            }
        }
    }
    tracing::debug!(kind, len = registry.len(), "registry session finished");
    Ok(())
}
