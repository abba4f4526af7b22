use std::io::{self, Write};

use anyhow::Error;

use biochem_graph::GraphError;

use crate::util::text::wrap;

const INNER: usize = 59;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let rule = "─".repeat(INNER + 3);

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔{}╗", "═".repeat(INNER + 3));
    let _ = writeln!(stderr, "   ║  {:<INNER$} ║", "✗ Error");
    let _ = writeln!(stderr, "   ╟{rule}╢");

    for line in wrap(&err.to_string(), INNER) {
        let _ = writeln!(stderr, "   ║  {:<INNER$} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟{rule}╢");
        let _ = writeln!(stderr, "   ║  {:<INNER$} ║", "Caused by:");
        for line in wrap(&cause.to_string(), INNER - 2) {
            let _ = writeln!(stderr, "   ║    {:<w$} ║", line, w = INNER - 2);
        }
    }

    let hints = hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟{rule}╢");
        let _ = writeln!(stderr, "   ║  {:<INNER$} ║", "Hints:");
        for hint in hints {
            let wrapped = wrap(&hint, INNER - 4);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<w$} ║", first, w = INNER - 4);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<w$} ║", line, w = INNER - 4);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚{}╝", "═".repeat(INNER + 3));
    let _ = writeln!(stderr);
}

fn hints(err: &Error) -> Vec<String> {
    if let Some(graph_err) = err.downcast_ref::<GraphError>() {
        return graph_hints(graph_err);
    }
    if let Some(io_err) = err.chain().find_map(|c| c.downcast_ref::<io::Error>()) {
        return io_hints(io_err);
    }
    Vec::new()
}

fn graph_hints(err: &GraphError) -> Vec<String> {
    match err {
        GraphError::UnknownFeature { scope, .. } => vec![
            format!("Run 'bcgraph features --scope {scope}' to list the available names"),
            "Feature names are case-sensitive".to_string(),
        ],
        GraphError::ConfigParse(_) => vec![
            "Allowed keys: atom_features, bond_features, encoding, master_node".to_string(),
            "encoding must be \"one-hot\" or \"index\"".to_string(),
        ],
        GraphError::OutOfDomain { .. } => vec![
            "Index encoding has no fallback for unseen categories".to_string(),
            "Use --encoding one-hot to encode them as all-zero segments".to_string(),
        ],
        GraphError::ConformerSizeMismatch { .. } => {
            vec!["Supply exactly one position per atom".to_string()]
        }
        GraphError::InvalidBond { .. } => {
            vec!["Bond endpoints must be indices into the atom list".to_string()]
        }
        _ => Vec::new(),
    }
}

fn io_hints(err: &io::Error) -> Vec<String> {
    match err.kind() {
        io::ErrorKind::NotFound => {
            vec!["Check that the file path is spelled correctly".to_string()]
        }
        io::ErrorKind::PermissionDenied => {
            vec!["Check read/write permissions on the file and its directory".to_string()]
        }
        _ => Vec::new(),
    }
}
