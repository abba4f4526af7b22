use super::types::{ChiralTag, Element, Hybridization};

/// A single atom as supplied by the caller.
///
/// Only intrinsic, per-atom properties live here. Anything that depends on
/// the surrounding bonds (degree, valence, ring membership) is derived on
/// demand by [`Molecule`](super::molecule::Molecule).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub formal_charge: i32,
    pub hybridization: Hybridization,
    pub chiral_tag: ChiralTag,
    pub is_aromatic: bool,
    /// Suppresses implicit hydrogens entirely when set.
    pub no_implicit: bool,
    pub num_explicit_hs: u32,
    pub num_implicit_hs: u32,
    pub num_radical_electrons: u32,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            formal_charge: 0,
            hybridization: Hybridization::Unspecified,
            chiral_tag: ChiralTag::Unspecified,
            is_aromatic: false,
            no_implicit: false,
            num_explicit_hs: 0,
            num_implicit_hs: 0,
            num_radical_electrons: 0,
        }
    }

    pub fn with_hybridization(mut self, hybridization: Hybridization) -> Self {
        self.hybridization = hybridization;
        self
    }

    pub fn with_implicit_hs(mut self, count: u32) -> Self {
        self.num_implicit_hs = count;
        self
    }

    pub fn with_formal_charge(mut self, charge: i32) -> Self {
        self.formal_charge = charge;
        self
    }

    pub fn aromatic(mut self) -> Self {
        self.is_aromatic = true;
        self
    }

    /// Implicit hydrogen count honoring [`Atom::no_implicit`].
    #[inline]
    pub fn implicit_hs(&self) -> u32 {
        if self.no_implicit {
            0
        } else {
            self.num_implicit_hs
        }
    }

    #[inline]
    pub fn total_hs(&self) -> u32 {
        self.num_explicit_hs + self.implicit_hs()
    }
}
