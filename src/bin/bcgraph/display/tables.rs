use std::io::{self, Write};

use biochem_graph::{EncodingMode, FeatureDescriptor, Molecule, Scope};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const NAME_W: usize = 22;
const KIND_W: usize = 11;
const WIDTH_W: usize = 5;
const DOMAIN_W: usize = 40;

/// Writes one table per scope listing name, kind, column width and domain.
pub fn print_feature_table(
    out: &mut impl Write,
    scope: Scope,
    features: &[FeatureDescriptor<Molecule>],
    mode: EncodingMode,
) -> io::Result<()> {
    let rule = |l: char, m: char, r: char| {
        format!(
            "{l}{}{m}{}{m}{}{m}{}{r}",
            "─".repeat(NAME_W + 2),
            "─".repeat(KIND_W + 2),
            "─".repeat(WIDTH_W + 2),
            "─".repeat(DOMAIN_W + 2),
        )
    };

    let title = format!("{} features ({})", capitalize(scope), features.len());
    writeln!(out, "┌─ {title} ─┐")?;
    writeln!(out, "{}", rule('┌', '┬', '┐'))?;
    writeln!(
        out,
        "│ {:<NAME_W$} │ {:<KIND_W$} │ {:>WIDTH_W$} │ {:<DOMAIN_W$} │",
        "Name", "Kind", "Cols", "Domain"
    )?;
    writeln!(out, "{}", rule('├', '┼', '┤'))?;
    for feature in features {
        writeln!(
            out,
            "│ {:<NAME_W$} │ {:<KIND_W$} │ {:>WIDTH_W$} │ {:<DOMAIN_W$} │",
            truncate(feature.name(), NAME_W),
            feature.domain().kind_name(),
            feature.width(mode),
            truncate(&feature.domain().to_string(), DOMAIN_W),
        )?;
    }
    writeln!(out, "{}", rule('└', '┴', '┘'))?;
    Ok(())
}

/// Totals gathered while sampling.
#[derive(Debug, Default)]
pub struct SampleSummary {
    pub graphs: usize,
    pub nodes: usize,
    pub edges: usize,
    pub node_width: usize,
    pub edge_width: usize,
    pub warnings: usize,
}

pub fn print_sample_summary(summary: &SampleSummary) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = [
        ("Graphs", summary.graphs.to_string()),
        ("Total Nodes", summary.nodes.to_string()),
        ("Total Edges", summary.edges.to_string()),
        ("Node Feature Width", summary.node_width.to_string()),
        ("Edge Feature Width", summary.edge_width.to_string()),
        ("Warnings", summary.warnings.to_string()),
    ];

    let key_w = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let val_w = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0).max(5);

    let _ = writeln!(out, "{}┌─ Sample Summary ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{}┬{}┐",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
    for (key, value) in &rows {
        let _ = writeln!(out, "{}│ {:<key_w$} │ {:>val_w$} │", INDENT, key, value);
    }
    let _ = writeln!(
        out,
        "{}└{}┴{}┘",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
}

fn capitalize(scope: Scope) -> &'static str {
    match scope {
        Scope::Atom => "Atom",
        Scope::Bond => "Bond",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biochem_graph::builtin;

    #[test]
    fn feature_table_lists_every_bond_feature() {
        let features = builtin().features(Scope::Bond);
        let mut buf = Vec::new();
        print_feature_table(&mut buf, Scope::Bond, features, EncodingMode::OneHot).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("┌─ Bond features (8) ─┐"));
        for feature in features {
            assert!(text.contains(feature.name()));
        }
    }

    #[test]
    fn feature_table_reports_mode_width() {
        let features = builtin().features(Scope::Atom);
        let mut one_hot = Vec::new();
        let mut index = Vec::new();
        print_feature_table(&mut one_hot, Scope::Atom, features, EncodingMode::OneHot).unwrap();
        print_feature_table(&mut index, Scope::Atom, features, EncodingMode::Index).unwrap();
        assert_ne!(one_hot, index);
    }
}
