use std::io::{self, Write};

use anyhow::{Context, Result};

use biochem_graph::builtin;

use crate::cli::FeaturesArgs;
use crate::display::{Context as DisplayContext, print_feature_table};
use crate::util::convert::scopes;

pub fn run_features(args: FeaturesArgs, _ctx: DisplayContext) -> Result<()> {
    let registry = builtin();
    let mode = args.encoding.into();

    let mut out = io::stdout().lock();
    for (i, scope) in scopes(args.scope).into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        print_feature_table(&mut out, scope, registry.features(scope), mode)
            .context("Failed to write feature table")?;
    }
    out.flush()?;
    Ok(())
}
