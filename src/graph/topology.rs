/// Read-only view of a molecule's connectivity.
///
/// This is all the graph assembler needs to know about a molecule: how many
/// atoms and bonds there are and which atoms each bond joins. Everything
/// else reaches the assembler through feature extractors, so any molecule
/// representation can be converted by implementing this trait and supplying
/// descriptors for it.
pub trait MolecularTopology {
    fn atom_count(&self) -> usize;

    fn bond_count(&self) -> usize;

    /// `(begin, end)` atom indices of a bond, in stored order.
    fn bond_atoms(&self, bond: usize) -> (usize, usize);
}
