use std::sync::OnceLock;

use super::atom::Atom;
use super::types::{BondDir, BondStereo, BondType};
use crate::graph::MolecularTopology;

/// A bond between two atoms.
///
/// `begin` and `end` are kept exactly as given; nothing downstream
/// re-sorts them, so the edge index of a converted graph follows the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub bond_type: BondType,
    pub dir: BondDir,
    pub stereo: BondStereo,
    pub is_conjugated: bool,
}

impl Bond {
    pub fn new(begin: usize, end: usize, bond_type: BondType) -> Self {
        Self {
            begin,
            end,
            bond_type,
            dir: BondDir::None,
            stereo: BondStereo::StereoNone,
            is_conjugated: false,
        }
    }

    pub fn conjugated(mut self) -> Self {
        self.is_conjugated = true;
        self
    }

    #[inline]
    pub fn is_aromatic(&self) -> bool {
        self.bond_type == BondType::Aromatic
    }

    /// The endpoint opposite to `atom`.
    #[inline]
    pub fn other(&self, atom: usize) -> usize {
        if self.begin == atom { self.end } else { self.begin }
    }

    /// Contribution of this bond to the valence of `atom`.
    ///
    /// Dative bonds only count toward their acceptor (`end`) atom.
    pub fn valence_contrib(&self, atom: usize) -> f64 {
        if atom != self.begin && atom != self.end {
            return 0.0;
        }
        if self.bond_type.is_dative() {
            return if atom == self.end && atom != self.begin { 1.0 } else { 0.0 };
        }
        self.bond_type.as_f64()
    }
}

/// Connectivity facts derived once per molecule.
#[derive(Debug, Clone)]
struct Perception {
    incident: Vec<Vec<usize>>,
    ring_bonds: Vec<bool>,
}

/// An in-memory molecule: ordered atoms plus ordered bonds.
///
/// Derived properties (degree, valence, ring membership) are computed on
/// first use and cached; mutating the molecule through its `add_*` methods
/// drops the cache.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    perception: OnceLock<Perception>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self {
            atoms,
            bonds,
            perception: OnceLock::new(),
        }
    }

    /// Appends an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.perception.take();
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Appends a bond and returns its index.
    pub fn add_bond(&mut self, bond: Bond) -> usize {
        self.perception.take();
        self.bonds.push(bond);
        self.bonds.len() - 1
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn atom(&self, index: usize) -> &Atom {
        &self.atoms[index]
    }

    /// Mutable access to an atom. Atom properties never feed perception, so
    /// the cache survives.
    #[inline]
    pub fn atom_mut(&mut self, index: usize) -> &mut Atom {
        &mut self.atoms[index]
    }

    #[inline]
    pub fn bond(&self, index: usize) -> &Bond {
        &self.bonds[index]
    }

    /// Number of bonds attached to the atom.
    pub fn degree(&self, atom: usize) -> usize {
        self.perception().incident[atom].len()
    }

    /// Degree including attached hydrogens that are not explicit atoms.
    pub fn total_degree(&self, atom: usize) -> usize {
        self.degree(atom) + self.atoms[atom].total_hs() as usize
    }

    /// Bond-order sum plus explicit hydrogens, rounded to the nearest integer.
    pub fn explicit_valence(&self, atom: usize) -> i64 {
        let bonded: f64 = self.perception().incident[atom]
            .iter()
            .map(|&b| self.bonds[b].valence_contrib(atom))
            .sum();
        bonded.round() as i64 + i64::from(self.atoms[atom].num_explicit_hs)
    }

    pub fn implicit_valence(&self, atom: usize) -> i64 {
        i64::from(self.atoms[atom].implicit_hs())
    }

    pub fn total_valence(&self, atom: usize) -> i64 {
        self.explicit_valence(atom) + self.implicit_valence(atom)
    }

    pub fn atom_in_ring(&self, atom: usize) -> bool {
        let perception = self.perception();
        perception.incident[atom]
            .iter()
            .any(|&b| perception.ring_bonds[b])
    }

    pub fn bond_in_ring(&self, bond: usize) -> bool {
        self.perception().ring_bonds[bond]
    }

    /// Whether any bond closes a cycle.
    pub fn has_ring(&self) -> bool {
        self.perception().ring_bonds.iter().any(|&r| r)
    }

    fn perception(&self) -> &Perception {
        self.perception
            .get_or_init(|| perceive(self.atoms.len(), &self.bonds))
    }
}

impl MolecularTopology for Molecule {
    #[inline]
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    fn bond_atoms(&self, bond: usize) -> (usize, usize) {
        let b = &self.bonds[bond];
        (b.begin, b.end)
    }
}

const UNVISITED: usize = usize::MAX;

/// Builds incidence lists and marks every bond that is not a bridge as a
/// ring bond. Self-loops and bonds with out-of-range endpoints are ignored.
fn perceive(atom_count: usize, bonds: &[Bond]) -> Perception {
    let mut incident = vec![Vec::new(); atom_count];
    let mut ring_bonds = vec![false; bonds.len()];

    for (idx, bond) in bonds.iter().enumerate() {
        if bond.begin == bond.end || bond.begin >= atom_count || bond.end >= atom_count {
            continue;
        }
        incident[bond.begin].push(idx);
        incident[bond.end].push(idx);
        ring_bonds[idx] = true;
    }

    let mut disc = vec![UNVISITED; atom_count];
    let mut low = vec![0; atom_count];
    let mut timer = 0;

    for root in 0..atom_count {
        if disc[root] != UNVISITED {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;

        // (atom, bond used to reach it, next incident slot to explore)
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
        while let Some(frame) = stack.last_mut() {
            let (v, via) = (frame.0, frame.1);
            if let Some(&b) = incident[v].get(frame.2) {
                frame.2 += 1;
                if via == Some(b) {
                    continue;
                }
                let w = bonds[b].other(v);
                if disc[w] == UNVISITED {
                    disc[w] = timer;
                    low[w] = timer;
                    timer += 1;
                    stack.push((w, Some(b), 0));
                } else {
                    low[v] = low[v].min(disc[w]);
                }
            } else {
                stack.pop();
                if let (Some(b), Some(&(u, _, _))) = (via, stack.last()) {
                    low[u] = low[u].min(low[v]);
                    if low[v] > disc[u] {
                        ring_bonds[b] = false;
                    }
                }
            }
        }
    }

    Perception {
        incident,
        ring_bonds,
    }
}
