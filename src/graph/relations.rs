//! RelationGraph - directed friend graph construction.
//!
//! Builds a petgraph `DiGraph` from an ordered batch of students. Node
//! indices follow input order, so slot `i` always corresponds to
//! `students[i]`. Each resolvable friend request becomes a directed edge
//! whose weight records whether the reverse request also exists.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

use super::Student;

/// Directed friend graph over one batch of students.
///
/// Built from scratch on every layout run; there is no incremental
/// mutation. Node weights store the input index, edge weights store the
/// mutual flag.
pub struct RelationGraph {
    /// Topology. Node weight = input slot, edge weight = mutual.
    graph: DiGraph<u32, bool>,
    /// Student names in input order (the node id space).
    names: Vec<String>,
}

impl RelationGraph {
    /// Build the graph from an ordered student batch.
    ///
    /// Resolution rules, applied per friend field:
    /// - blank names (empty or whitespace) are skipped
    /// - names not matching any student in the batch are dropped silently
    /// - self-references are rejected
    /// - duplicate requests to the same peer yield duplicate edges
    ///
    /// Mutuality is derived in a second pass: an edge is mutual iff the
    /// reversed ordered pair also appears in the request set.
    pub fn from_students(students: &[Student]) -> Self {
        let n = students.len();
        let mut graph = DiGraph::with_capacity(n, n * 2);
        let mut name_to_node: HashMap<&str, NodeIndex> = HashMap::with_capacity(n);

        for (slot, student) in students.iter().enumerate() {
            let node = graph.add_node(slot as u32);
            // First occurrence wins when a name repeats; later duplicates
            // become ordinary nodes no request can reach.
            name_to_node.entry(student.name.as_str()).or_insert(node);
        }

        // Collect resolved directed pairs, keeping duplicates.
        let mut pairs: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        let mut pair_set: HashSet<(u32, u32)> = HashSet::new();

        for (slot, student) in students.iter().enumerate() {
            let source = NodeIndex::new(slot);
            for friend in student.friend_names() {
                let friend = friend.trim();
                if friend.is_empty() {
                    continue;
                }
                let Some(&target) = name_to_node.get(friend) else {
                    continue;
                };
                if target == source {
                    continue;
                }
                pairs.push((source, target));
                pair_set.insert((source.index() as u32, target.index() as u32));
            }
        }

        for (source, target) in pairs {
            let mutual =
                pair_set.contains(&(target.index() as u32, source.index() as u32));
            graph.add_edge(source, target, mutual);
        }

        Self {
            graph,
            names: students.iter().map(|s| s.name.clone()).collect(),
        }
    }

    /// Number of nodes (one per input student).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Student names in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate edges as `(source_slot, target_slot, mutual)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, friends: [&str; 4]) -> Student {
        Student {
            name: name.into(),
            school: String::new(),
            friend1: friends[0].into(),
            friend2: friends[1].into(),
            friend3: friends[2].into(),
            friend4: friends[3].into(),
        }
    }

    #[test]
    fn test_empty_batch() {
        let graph = RelationGraph::from_students(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_node_per_student_in_order() {
        let students = vec![
            student("A", ["", "", "", ""]),
            student("B", ["", "", "", ""]),
            student("C", ["", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.names(), &["A", "B", "C"]);
    }

    #[test]
    fn test_mutual_pair() {
        let students = vec![
            student("A", ["B", "", "", ""]),
            student("B", ["A", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, true), (1, 0, true)]);
    }

    #[test]
    fn test_one_way_edge_not_mutual() {
        let students = vec![
            student("A", ["B", "", "", ""]),
            student("B", ["", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, false)]);
    }

    #[test]
    fn test_dangling_name_dropped() {
        let students = vec![student("A", ["Nobody", "", "", ""])];
        let graph = RelationGraph::from_students(&students);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_reference_rejected() {
        let students = vec![student("A", ["A", "", "", ""])];
        let graph = RelationGraph::from_students(&students);

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_blank_and_whitespace_skipped() {
        let students = vec![
            student("A", ["", "  ", "B", ""]),
            student("B", ["", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, false)]);
    }

    #[test]
    fn test_duplicate_requests_yield_duplicate_edges() {
        let students = vec![
            student("A", ["B", "", "B", ""]),
            student("B", ["", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, false), (0, 1, false)]);
    }

    #[test]
    fn test_duplicate_requests_keep_mutuality() {
        let students = vec![
            student("A", ["B", "B", "", ""]),
            student("B", ["A", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        for (_, _, mutual) in graph.edges() {
            assert!(mutual);
        }
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_trimmed_name_resolves() {
        let students = vec![
            student("A", [" B ", "", "", ""]),
            student("B", ["", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_mutuality_is_symmetric() {
        // A<->B mutual, B->C one-way, D isolated.
        let students = vec![
            student("A", ["B", "", "", ""]),
            student("B", ["A", "C", "", ""]),
            student("C", ["", "", "", ""]),
            student("D", ["", "", "", ""]),
        ];
        let graph = RelationGraph::from_students(&students);

        let edges: Vec<_> = graph.edges().collect();
        for &(src, tgt, mutual) in &edges {
            let reverse = edges.iter().any(|&(s, t, _)| s == tgt && t == src);
            assert_eq!(mutual, reverse, "edge {src}->{tgt}");
            if mutual {
                let reverse_mutual = edges
                    .iter()
                    .any(|&(s, t, m)| s == tgt && t == src && m);
                assert!(reverse_mutual, "reverse of {src}->{tgt} must be mutual too");
            }
        }
    }
}
