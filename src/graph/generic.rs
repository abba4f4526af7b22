//! The framework-agnostic graph record produced by the assembler.

use serde::{Serialize, Serializer};

/// A dense row-major matrix whose rows all share one width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureMatrix {
    rows: usize,
    width: usize,
    data: Vec<f32>,
}

impl FeatureMatrix {
    /// An empty matrix with rows of `width` columns.
    pub fn new(width: usize) -> Self {
        Self::with_capacity(width, 0)
    }

    pub fn with_capacity(width: usize, rows: usize) -> Self {
        Self {
            rows: 0,
            width,
            data: Vec::with_capacity(width * rows),
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not exactly [`width`](Self::width) long.
    pub fn push_row(&mut self, row: &[f32]) {
        assert_eq!(
            row.len(),
            self.width,
            "feature row width does not match matrix width"
        );
        self.data.extend_from_slice(row);
        self.rows += 1;
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        (index < self.rows).then(|| &self.data[index * self.width..(index + 1) * self.width])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f32]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.width..(i + 1) * self.width])
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.iter().map(<[f32]>::to_vec).collect()
    }

    /// A copy with one trailing zero column appended to every row.
    fn with_indicator_column(&self) -> Self {
        let width = self.width + 1;
        let mut out = Self::with_capacity(width, self.rows + 1);
        for row in self.iter() {
            out.data.extend_from_slice(row);
            out.data.push(0.0);
        }
        out.rows = self.rows;
        out
    }

    /// Appends a row that is zero except for a trailing 1.
    fn push_indicator_row(&mut self) {
        let start = self.data.len();
        self.data.resize(start + self.width, 0.0);
        if self.width > 0 {
            self.data[start + self.width - 1] = 1.0;
        }
        self.rows += 1;
    }
}

impl Serialize for FeatureMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Node features, node positions, edge index and edge features of one
/// molecule.
///
/// Each bond appears once in `edge_index`, as `(begin, end)`. Use
/// [`to_directed`](Self::to_directed) for a representation with both
/// directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericGraph {
    node_attr: FeatureMatrix,
    node_pos: Vec<[f32; 3]>,
    edge_index: Vec<(usize, usize)>,
    edge_attr: FeatureMatrix,
}

impl GenericGraph {
    pub(crate) fn new(
        node_attr: FeatureMatrix,
        node_pos: Vec<[f32; 3]>,
        edge_index: Vec<(usize, usize)>,
        edge_attr: FeatureMatrix,
    ) -> Self {
        debug_assert_eq!(node_attr.rows(), node_pos.len());
        debug_assert_eq!(edge_attr.rows(), edge_index.len());
        Self {
            node_attr,
            node_pos,
            edge_index,
            edge_attr,
        }
    }

    #[inline]
    pub fn node_attr(&self) -> &FeatureMatrix {
        &self.node_attr
    }

    #[inline]
    pub fn node_pos(&self) -> &[[f32; 3]] {
        &self.node_pos
    }

    #[inline]
    pub fn edge_index(&self) -> &[(usize, usize)] {
        &self.edge_index
    }

    #[inline]
    pub fn edge_attr(&self) -> &FeatureMatrix {
        &self.edge_attr
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.node_pos.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_index.len()
    }

    /// Returns a new graph with a master node appended.
    ///
    /// The master node takes index `N` (the current node count) and sits at
    /// the origin. Every existing node and edge row gains a trailing zero
    /// column; the master node row and one new edge `(i, N)` per existing
    /// node carry a 1 in that column instead. When the graph has no edges
    /// the master edges are exactly one column wide.
    pub fn with_master_node(&self) -> Self {
        let master = self.num_nodes();

        let mut node_attr = self.node_attr.with_indicator_column();
        node_attr.push_indicator_row();

        let mut node_pos = Vec::with_capacity(master + 1);
        node_pos.extend_from_slice(&self.node_pos);
        node_pos.push([0.0; 3]);

        let mut edge_attr = if self.edge_attr.is_empty() {
            FeatureMatrix::with_capacity(1, master)
        } else {
            self.edge_attr.with_indicator_column()
        };
        let mut edge_index = Vec::with_capacity(self.num_edges() + master);
        edge_index.extend_from_slice(&self.edge_index);
        for atom in 0..master {
            edge_index.push((atom, master));
            edge_attr.push_indicator_row();
        }

        Self::new(node_attr, node_pos, edge_index, edge_attr)
    }
}
