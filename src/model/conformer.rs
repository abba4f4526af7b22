/// A concrete 3D coordinate assignment, one position per atom, in Ångströms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conformer {
    pub positions: Vec<[f64; 3]>,
}

impl Conformer {
    pub fn new(positions: Vec<[f64; 3]>) -> Self {
        Self { positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl From<Vec<[f64; 3]>> for Conformer {
    fn from(positions: Vec<[f64; 3]>) -> Self {
        Self::new(positions)
    }
}
