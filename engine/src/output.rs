use std::io::{self, Write};

use engine_core::{MatchRow, ModuleMatches};

/// Writes the human-readable listing, one header per module.
pub fn write_listing<W: Write>(matches: &[ModuleMatches], out: &mut W) -> io::Result<()> {
    for group in matches {
        if group.icon.is_empty() {
            writeln!(out, "== {}", group.name)?;
        } else {
            writeln!(out, "== {} ({})", group.name, group.icon)?;
        }
        for row in &group.items {
            writeln!(out, "  {}", format_row(row))?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(matches: &[ModuleMatches], out: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, matches)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn format_row(row: &MatchRow) -> String {
    let mut line = format!("[{}] {}", row.index, row.name);
    if !row.desc.is_empty() {
        line.push_str(" - ");
        line.push_str(&row.desc);
    }
    if !row.icon.is_empty() {
        line.push_str(&format!(" ({})", row.icon));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugin_core::SearchItemHandle;

    fn row(index: usize, name: &str, desc: &str, icon: &str) -> MatchRow {
        MatchRow {
            index,
            handle: SearchItemHandle(index as i32),
            name: name.into(),
            desc: desc.into(),
            icon: icon.into(),
        }
    }

    fn sample() -> Vec<ModuleMatches> {
        vec![
            ModuleMatches {
                module: 0,
                name: "Example plugin".into(),
                icon: "text-x-rust".into(),
                items: vec![row(0, "apple", "apple", "apple")],
            },
            ModuleMatches {
                module: 1,
                name: "Dmenu".into(),
                icon: String::new(),
                items: vec![row(1, "banana", "", "")],
            },
        ]
    }

    #[test]
    fn listing_layout() {
        let mut out = Vec::new();
        write_listing(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "== Example plugin (text-x-rust)\n  [0] apple - apple (apple)\n== Dmenu\n  [1] banana\n"
        );
    }

    #[test]
    fn json_listing() {
        let mut out = Vec::new();
        write_json(&sample(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "Example plugin");
        assert_eq!(value[1]["items"][0]["name"], "banana");
        assert!(value[0].get("module").is_none());
    }
}
