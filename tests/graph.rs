//! Validates the visibility overlay: hide/reveal laws, neighborhood queries, and precondition failures

use hexcover::io::error::AlgorithmError;
use hexcover::spatial::graph::TriangleGraph;
use hexcover::spatial::hexagon::{CORNER_TRIANGLES, TRIANGLE_COUNT};

type TestResult = Result<(), AlgorithmError>;

#[test]
fn test_full_hexagon_visibility() {
    let graph = TriangleGraph::hexagon();
    assert_eq!(graph.visible_count(), TRIANGLE_COUNT);
    assert_eq!(graph.visible().count(), TRIANGLE_COUNT);
    assert_eq!(graph.first_visible(), Some(0));
    assert!(graph.is_visible(0));
    assert!(!graph.is_visible(TRIANGLE_COUNT));
}

#[test]
fn test_neighbor_queries_follow_the_table() -> TestResult {
    let graph = TriangleGraph::hexagon();

    // Boundary triangles have two neighbors, interior triangles three
    let boundary = graph.neighbors(0)?;
    assert_eq!(boundary.as_slice(), &[1, 3]);
    assert_eq!(boundary.len(), 2);

    let interior = graph.neighbors(14)?;
    assert_eq!(interior.as_slice(), &[8, 13, 20]);
    assert!(interior.contains(13));
    assert!(!interior.contains(7));
    Ok(())
}

#[test]
fn test_corner_region_membership() -> TestResult {
    let graph = TriangleGraph::corner();
    assert_eq!(graph.visible().collect::<Vec<usize>>(), CORNER_TRIANGLES);
    assert_eq!(graph.visible_count(), CORNER_TRIANGLES.len());

    // Row {0, 2, 8} of triangle 3 loses the hidden 2 but keeps its shape
    assert_eq!(graph.neighbors(3)?.as_slice(), &[0, 8]);
    assert_eq!(graph.neighbors(8)?.as_slice(), &[3, 9]);
    Ok(())
}

#[test]
fn test_hiding_is_symmetric_in_effect() -> TestResult {
    let mut graph = TriangleGraph::hexagon();

    let token = graph.hide(3)?;
    assert!(!graph.is_visible(3));
    assert_eq!(graph.neighbors(0)?.as_slice(), &[1]);
    assert_eq!(graph.neighbors(2)?.as_slice(), &[7]);
    assert_eq!(graph.neighbors(8)?.as_slice(), &[9, 14]);

    graph.reveal(token);
    assert!(graph.is_visible(3));
    assert_eq!(graph.neighbors(0)?.as_slice(), &[1, 3]);
    assert_eq!(graph.neighbors(8)?.as_slice(), &[3, 9, 14]);
    Ok(())
}

#[test]
fn test_hide_reveal_restores_state_exactly() -> TestResult {
    let mut graph = TriangleGraph::hexagon();

    let before_visible: Vec<usize> = graph.visible().collect();
    let mut before_rows = Vec::new();
    for index in &before_visible {
        before_rows.push(graph.neighbors(*index)?);
    }

    let first = graph.hide(10)?;
    let second = graph.hide(22)?;
    let third = graph.hide(53)?;
    assert_eq!(graph.visible_count(), TRIANGLE_COUNT - 3);

    graph.reveal(third);
    graph.reveal(second);
    graph.reveal(first);

    assert_eq!(graph.visible().collect::<Vec<usize>>(), before_visible);
    let mut after_rows = Vec::new();
    for index in &before_visible {
        after_rows.push(graph.neighbors(*index)?);
    }
    assert_eq!(after_rows, before_rows);
    Ok(())
}

// Each token restores exactly its own index, so unrelated hides may be
// undone in any interleaving
#[test]
fn test_reveal_order_is_immaterial() -> TestResult {
    let mut graph = TriangleGraph::hexagon();
    let before_visible: Vec<usize> = graph.visible().collect();

    let first = graph.hide(5)?;
    let second = graph.hide(30)?;
    graph.reveal(first);
    let third = graph.hide(41)?;
    graph.reveal(second);
    graph.reveal(third);

    assert_eq!(graph.visible().collect::<Vec<usize>>(), before_visible);
    Ok(())
}

#[test]
fn test_double_hide_is_rejected() -> TestResult {
    let mut graph = TriangleGraph::hexagon();
    let token = graph.hide(5)?;
    assert_eq!(token.index(), 5);
    assert!(matches!(
        graph.hide(5),
        Err(AlgorithmError::HiddenTriangle { index: 5 })
    ));
    graph.reveal(token);
    Ok(())
}

#[test]
fn test_out_of_range_indices_are_rejected() {
    let mut graph = TriangleGraph::hexagon();
    assert!(matches!(
        graph.hide(TRIANGLE_COUNT),
        Err(AlgorithmError::IndexOutOfBounds { index: 54, .. })
    ));
    assert!(matches!(
        graph.neighbors(usize::MAX),
        Err(AlgorithmError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_querying_a_hidden_triangle_fails() -> TestResult {
    let mut graph = TriangleGraph::hexagon();
    let token = graph.hide(17)?;
    assert!(matches!(
        graph.neighbors(17),
        Err(AlgorithmError::HiddenTriangle { index: 17 })
    ));
    graph.reveal(token);
    assert!(graph.neighbors(17).is_ok());
    Ok(())
}

#[test]
fn test_exclude_rejects_duplicates() {
    assert!(matches!(
        TriangleGraph::with_hidden([4, 9, 4]),
        Err(AlgorithmError::HiddenTriangle { index: 4 })
    ));
    assert!(matches!(
        TriangleGraph::with_hidden([60]),
        Err(AlgorithmError::IndexOutOfBounds { index: 60, .. })
    ));
}

#[test]
fn test_placement_possible_tracks_visible_degree() -> TestResult {
    // Corner region has degree-2 triangles, so a placement exists
    assert!(TriangleGraph::corner().placement_possible());

    // Three pairwise-isolated triangles: every visible degree is zero
    let isolated =
        TriangleGraph::with_hidden((0..TRIANGLE_COUNT).filter(|index| ![0, 5, 52].contains(index)))?;
    assert!(!isolated.placement_possible());

    // A single adjacent pair: both degrees are one
    let pair = TriangleGraph::with_hidden((0..TRIANGLE_COUNT).filter(|index| ![0, 1].contains(index)))?;
    assert!(!pair.placement_possible());

    // Nothing visible at all
    let empty = TriangleGraph::with_hidden(0..TRIANGLE_COUNT)?;
    assert!(!empty.placement_possible());
    assert_eq!(empty.first_visible(), None);
    Ok(())
}

#[test]
fn test_display_dumps_visible_rows() {
    let graph = TriangleGraph::corner();
    let dump = graph.to_string();
    assert_eq!(dump.lines().count(), CORNER_TRIANGLES.len());
    assert!(dump.contains("0 -> {1, 3}"));
    assert!(dump.contains("3 -> {0, 8}"));
    assert!(dump.contains("9 -> {4, 8}"));
}
