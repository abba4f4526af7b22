use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use biochem_graph::faker::{Faker, FakerConfig, Library, Predicate};
use biochem_graph::{Assembly, FeatureSelection};

use crate::cli::SampleArgs;
use crate::display::{Context as DisplayContext, SampleSummary, print_sample_summary};
use crate::io::{create_output, read_selection};

/// One JSON line of output.
#[derive(Serialize)]
struct Record<'a, G> {
    sample: usize,
    warnings: Vec<String>,
    graph: &'a G,
}

pub fn run_sample(args: SampleArgs, ctx: DisplayContext) -> Result<()> {
    let selection = build_selection(&args)?;
    let predicates = build_predicates(&args);

    let mut faker = Faker::new(
        Library::builtin(),
        &FakerConfig {
            max_trials: args.max_trials,
            seed: args.seed,
        },
    );
    log::debug!(
        "sampling {} graph(s) with {} predicate(s), {} trials each",
        args.count,
        predicates.len(),
        faker.max_trials()
    );

    let mut out = create_output(args.output.as_deref())?;
    let mut summary = SampleSummary::default();

    for sample in 0..args.count {
        let Some(assembly) = faker
            .graph(&predicates, &selection)
            .context("Graph conversion failed")?
        else {
            bail!(
                "No library molecule passed the filters within {} trials",
                faker.max_trials()
            );
        };
        tally(&mut summary, &assembly);
        write_record(&mut out, sample, &assembly, args.directed)?;
    }
    out.flush().context("Failed to flush output")?;

    if ctx.interactive {
        print_sample_summary(&summary);
    }
    Ok(())
}

fn build_selection(args: &SampleArgs) -> Result<FeatureSelection> {
    let mut selection = read_selection(args.config.as_deref())?;
    if let Some(encoding) = args.encoding {
        selection.encoding = encoding.into();
    }
    if args.no_master_node {
        selection.master_node = false;
    }
    Ok(selection)
}

fn build_predicates(args: &SampleArgs) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(n) = args.filter.min_atoms {
        predicates.push(Predicate::min_atoms(n));
    }
    if args.filter.require_ring {
        predicates.push(Predicate::has_ring());
    }
    predicates
}

fn tally(summary: &mut SampleSummary, assembly: &Assembly) {
    let graph = &assembly.graph;
    summary.graphs += 1;
    summary.nodes += graph.num_nodes();
    summary.edges += graph.num_edges();
    summary.node_width = summary.node_width.max(graph.node_attr().width());
    summary.edge_width = summary.edge_width.max(graph.edge_attr().width());
    summary.warnings += assembly.warnings.len();
}

fn write_record(
    out: &mut impl Write,
    sample: usize,
    assembly: &Assembly,
    directed: bool,
) -> Result<()> {
    let warnings = assembly.warnings.iter().map(ToString::to_string).collect();
    let written = if directed {
        let graph = assembly.graph.to_directed();
        serde_json::to_writer(
            &mut *out,
            &Record {
                sample,
                warnings,
                graph: &graph,
            },
        )
    } else {
        serde_json::to_writer(
            &mut *out,
            &Record {
                sample,
                warnings,
                graph: &assembly.graph,
            },
        )
    };
    written.context("Failed to write graph record")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biochem_graph::{Atom, Element, GraphOptions, Molecule, assemble};

    fn faker_assembly() -> Assembly {
        let mut faker = Faker::new(
            Library::builtin(),
            &FakerConfig {
                max_trials: None,
                seed: Some(3),
            },
        );
        faker
            .graph(&[], &FeatureSelection::default())
            .unwrap()
            .unwrap()
    }

    fn sample_one(directed: bool) -> serde_json::Value {
        let assembly = faker_assembly();
        let mut buf = Vec::new();
        write_record(&mut buf, 0, &assembly, directed).unwrap();
        assert!(buf.ends_with(b"\n"));
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn generic_record_layout() {
        let record = sample_one(false);
        assert_eq!(record["sample"], 0);
        let graph = &record["graph"];
        assert!(graph["node_attr"].is_array());
        assert!(graph["edge_index"].is_array());
        assert_eq!(
            graph["node_attr"].as_array().unwrap().len(),
            graph["node_pos"].as_array().unwrap().len()
        );
    }

    #[test]
    fn directed_record_doubles_edges() {
        let record = sample_one(true);
        let graph = &record["graph"];
        let src = graph["src"].as_array().unwrap();
        assert_eq!(src.len(), graph["dst"].as_array().unwrap().len());
        assert_eq!(src.len() % 2, 0);
        assert_eq!(src.len(), graph["edge_attr"].as_array().unwrap().len());
    }

    #[test]
    fn tally_keeps_widest_rows() {
        let mut summary = SampleSummary::default();
        let mut water = Molecule::new();
        water.add_atom(Atom::new(Element::O).with_implicit_hs(2));
        let narrow = assemble(&water, None, &[], &[], &GraphOptions::default()).unwrap();
        let wide = faker_assembly();

        tally(&mut summary, &wide);
        tally(&mut summary, &narrow);

        assert_eq!(summary.graphs, 2);
        assert_eq!(summary.node_width, wide.graph.node_attr().width());
        assert_eq!(summary.edge_width, wide.graph.edge_attr().width());
        assert_eq!(
            summary.nodes,
            wide.graph.num_nodes() + narrow.graph.num_nodes()
        );
    }
}
