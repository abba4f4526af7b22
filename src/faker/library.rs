use super::MoleculeSource;
use crate::model::atom::Atom;
use crate::model::molecule::{Bond, Molecule};
use crate::model::types::{BondType, Element, Hybridization};

/// An in-memory list of named molecules.
#[derive(Debug, Clone, Default)]
pub struct Library {
    entries: Vec<(String, Molecule)>,
}

impl Library {
    pub fn new(entries: Vec<(String, Molecule)>) -> Self {
        Self { entries }
    }

    /// A handful of small organic molecules, hydrogens kept implicit.
    pub fn builtin() -> Self {
        let entries = [
            ("water", water()),
            ("ethanol", ethanol()),
            ("acetic acid", acetic_acid()),
            ("acetonitrile", acetonitrile()),
            ("cyclohexane", cyclohexane()),
            ("benzene", benzene()),
            ("pyridine", pyridine()),
            ("phenol", phenol()),
            ("glycine", glycine()),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(name, mol)| (name.to_string(), mol))
                .collect(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, molecule: Molecule) {
        self.entries.push((name.into(), molecule));
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Molecule)> {
        self.entries.iter().map(|(name, mol)| (name.as_str(), mol))
    }
}

impl MoleculeSource for Library {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> Option<&Molecule> {
        self.entries.get(index).map(|(_, mol)| mol)
    }
}

fn heavy(element: Element, hybridization: Hybridization, hs: u32) -> Atom {
    Atom::new(element)
        .with_hybridization(hybridization)
        .with_implicit_hs(hs)
}

fn chain(atoms: Vec<Atom>, bonds: &[(usize, usize, BondType)]) -> Molecule {
    let bonds = bonds
        .iter()
        .map(|&(i, j, order)| {
            let bond = Bond::new(i, j, order);
            if order == BondType::Aromatic {
                bond.conjugated()
            } else {
                bond
            }
        })
        .collect();
    Molecule::from_parts(atoms, bonds)
}

fn water() -> Molecule {
    chain(vec![heavy(Element::O, Hybridization::Sp3, 2)], &[])
}

fn ethanol() -> Molecule {
    use Hybridization::Sp3;
    chain(
        vec![
            heavy(Element::C, Sp3, 3),
            heavy(Element::C, Sp3, 2),
            heavy(Element::O, Sp3, 1),
        ],
        &[(0, 1, BondType::Single), (1, 2, BondType::Single)],
    )
}

fn acetic_acid() -> Molecule {
    use Hybridization::{Sp2, Sp3};
    let mut mol = chain(
        vec![
            heavy(Element::C, Sp3, 3),
            heavy(Element::C, Sp2, 0),
            heavy(Element::O, Sp2, 0),
            heavy(Element::O, Sp2, 1),
        ],
        &[],
    );
    mol.add_bond(Bond::new(0, 1, BondType::Single));
    mol.add_bond(Bond::new(1, 2, BondType::Double).conjugated());
    mol.add_bond(Bond::new(1, 3, BondType::Single).conjugated());
    mol
}

fn acetonitrile() -> Molecule {
    use Hybridization::{Sp, Sp3};
    chain(
        vec![
            heavy(Element::C, Sp3, 3),
            heavy(Element::C, Sp, 0),
            heavy(Element::N, Sp, 0),
        ],
        &[(0, 1, BondType::Single), (1, 2, BondType::Triple)],
    )
}

fn cyclohexane() -> Molecule {
    let atoms = (0..6)
        .map(|_| heavy(Element::C, Hybridization::Sp3, 2))
        .collect();
    let bonds: Vec<_> = (0..6).map(|i| (i, (i + 1) % 6, BondType::Single)).collect();
    chain(atoms, &bonds)
}

fn aromatic_ring(elements: [Element; 6]) -> Molecule {
    let atoms = elements
        .into_iter()
        .map(|e| {
            let hs = if e == Element::C { 1 } else { 0 };
            heavy(e, Hybridization::Sp2, hs).aromatic()
        })
        .collect();
    let bonds: Vec<_> = (0..6)
        .map(|i| (i, (i + 1) % 6, BondType::Aromatic))
        .collect();
    chain(atoms, &bonds)
}

fn benzene() -> Molecule {
    aromatic_ring([Element::C; 6])
}

fn pyridine() -> Molecule {
    let c = Element::C;
    aromatic_ring([Element::N, c, c, c, c, c])
}

fn phenol() -> Molecule {
    let mut mol = benzene();
    let o = mol.add_atom(heavy(Element::O, Hybridization::Sp3, 1));
    mol.add_bond(Bond::new(0, o, BondType::Single).conjugated());
    mol.atom_mut(0).num_implicit_hs = 0;
    mol
}

fn glycine() -> Molecule {
    use Hybridization::{Sp2, Sp3};
    let mut mol = chain(
        vec![
            heavy(Element::N, Sp3, 2),
            heavy(Element::C, Sp3, 2),
            heavy(Element::C, Sp2, 0),
            heavy(Element::O, Sp2, 0),
            heavy(Element::O, Sp2, 1),
        ],
        &[(0, 1, BondType::Single), (1, 2, BondType::Single)],
    );
    mol.add_bond(Bond::new(2, 3, BondType::Double).conjugated());
    mol.add_bond(Bond::new(2, 4, BondType::Single).conjugated());
    mol
}
