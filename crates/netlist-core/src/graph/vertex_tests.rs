//! Tests for `Vertex` and its capacity invariant.

use super::vertex::{Vertex, VertexId};
use crate::error::Error;

fn id(index: usize) -> VertexId {
    VertexId::new(index)
}

#[test]
fn test_vertex_new() {
    let vertex = Vertex::new("LM741#0", "LM741", 6);
    assert_eq!(vertex.name(), "LM741#0");
    assert_eq!(*vertex.value(), "LM741");
    assert_eq!(vertex.capacity(), 6);
    assert!(vertex.edges().is_empty());
    assert!(!vertex.has_edges());
    assert_eq!(vertex.remaining_capacity(), 6);
}

#[test]
fn test_add_edge_preserves_insertion_order() {
    let mut vertex = Vertex::new("hub", (), 3);
    vertex.add_edge(id(2)).unwrap();
    vertex.add_edge(id(0)).unwrap();
    vertex.add_edge(id(1)).unwrap();
    assert_eq!(vertex.edges(), &[id(2), id(0), id(1)]);
}

#[test]
fn test_add_edge_allows_duplicates_and_self_loops() {
    let mut vertex = Vertex::new("loop", (), 3);
    vertex.add_edge(id(0)).unwrap();
    vertex.add_edge(id(0)).unwrap();
    vertex.add_edge(id(5)).unwrap();
    assert_eq!(vertex.edges(), &[id(0), id(0), id(5)]);
    assert!(vertex.is_full());
}

#[test]
fn test_add_edge_beyond_capacity_is_rejected() {
    let mut vertex = Vertex::new("Wire#0", (), 2);
    vertex.add_edge(id(1)).unwrap();
    vertex.add_edge(id(2)).unwrap();

    let err = vertex.add_edge(id(3)).unwrap_err();
    assert_eq!(
        err,
        Error::CapacityExceeded {
            name: "Wire#0".to_string(),
            capacity: 2,
        }
    );
    assert_eq!(vertex.edges(), &[id(1), id(2)]);
    assert_eq!(vertex.remaining_capacity(), 0);
}

#[test]
fn test_zero_capacity_rejects_every_edge() {
    let mut vertex = Vertex::new("sink", 0u8, 0);
    assert!(vertex.is_full());
    for target in 0..4 {
        assert!(vertex.add_edge(id(target)).unwrap_err().is_capacity_exceeded());
    }
    assert!(vertex.edges().is_empty());
}

#[test]
fn test_vertex_id_display() {
    assert_eq!(id(7).to_string(), "#7");
    assert_eq!(id(7).index(), 7);
}
