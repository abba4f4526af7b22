use biochem_graph::{EncodingMode, Scope};

use crate::cli::{EncodingArg, ScopeArg};

impl From<EncodingArg> for EncodingMode {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::OneHot => EncodingMode::OneHot,
            EncodingArg::Index => EncodingMode::Index,
        }
    }
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Atom => Scope::Atom,
            ScopeArg::Bond => Scope::Bond,
        }
    }
}

pub fn scopes(filter: Option<ScopeArg>) -> Vec<Scope> {
    match filter {
        Some(s) => vec![s.into()],
        None => vec![Scope::Atom, Scope::Bond],
    }
}
