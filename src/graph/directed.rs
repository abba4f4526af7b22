use serde::Serialize;

use super::generic::{FeatureMatrix, GenericGraph};

/// A graph with every stored edge present in both directions.
///
/// Edges are laid out as the forward block (`edge_index` as stored in the
/// generic graph) followed by the reversed block, and each reversed edge
/// carries the same features as its forward twin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectedGraph {
    pub num_nodes: usize,
    pub node_attr: FeatureMatrix,
    pub node_pos: Vec<[f32; 3]>,
    pub src: Vec<usize>,
    pub dst: Vec<usize>,
    pub edge_attr: FeatureMatrix,
}

impl DirectedGraph {
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.src.len()
    }
}

impl GenericGraph {
    /// Duplicates every edge into two directed edges.
    pub fn to_directed(&self) -> DirectedGraph {
        let edges = self.edge_index();
        let forward = edges.iter().map(|&(s, _)| s);
        let reverse = edges.iter().map(|&(_, t)| t);
        let src: Vec<usize> = forward.clone().chain(reverse.clone()).collect();
        let dst: Vec<usize> = reverse.chain(forward).collect();

        let mut edge_attr = FeatureMatrix::with_capacity(self.edge_attr().width(), 2 * edges.len());
        for _ in 0..2 {
            for row in self.edge_attr().iter() {
                edge_attr.push_row(row);
            }
        }

        DirectedGraph {
            num_nodes: self.num_nodes(),
            node_attr: self.node_attr().clone(),
            node_pos: self.node_pos().to_vec(),
            src,
            dst,
            edge_attr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> GenericGraph {
        let mut node_attr = FeatureMatrix::new(1);
        for x in [6.0, 6.0, 8.0] {
            node_attr.push_row(&[x]);
        }
        let mut edge_attr = FeatureMatrix::new(2);
        edge_attr.push_row(&[1.0, 0.0]);
        edge_attr.push_row(&[0.0, 1.0]);
        GenericGraph::new(
            node_attr,
            vec![[0.0; 3]; 3],
            vec![(0, 1), (2, 1)],
            edge_attr,
        )
    }

    #[test]
    fn edges_are_duplicated_forward_then_reverse() {
        let directed = path_graph().to_directed();
        assert_eq!(directed.num_nodes, 3);
        assert_eq!(directed.num_edges(), 4);
        assert_eq!(directed.src, vec![0, 2, 1, 1]);
        assert_eq!(directed.dst, vec![1, 1, 0, 2]);
    }

    #[test]
    fn reversed_edges_copy_features() {
        let directed = path_graph().to_directed();
        assert_eq!(
            directed.edge_attr.to_rows(),
            vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![0.0, 1.0]
            ]
        );
    }

    #[test]
    fn edgeless_graph_stays_edgeless() {
        let graph = GenericGraph::new(
            FeatureMatrix::new(0),
            Vec::new(),
            Vec::new(),
            FeatureMatrix::new(3),
        );
        let directed = graph.to_directed();
        assert_eq!(directed.num_edges(), 0);
        assert_eq!(directed.edge_attr.width(), 3);
    }
}
