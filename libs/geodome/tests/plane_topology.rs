use geodome::{GeodesicDome, Lattice, Manifold, Plane, Topology, VertexIdx};

/// Counts neighbours of every vertex with a fresh visited set.
fn degree_histogram<M: Manifold>(m: &M) -> [usize; 7] {
    let mut hist = [0; 7];
    for v in m.all_vertices() {
        let n = m.neighbours(v, false, &mut m.visited_set()).len();
        hist[n] += 1;
    }
    hist
}

#[test]
fn bounded_rect_degrees() {
    let p = Plane::new(4, 3, Lattice::Rectilinear, Topology::Plane).unwrap();
    // 4 corners, 6 edge vertices, 2 interior
    assert_eq!(degree_histogram(&p), [0, 0, 4, 6, 2, 0, 0]);
}

#[test]
fn toroidal_lattices_are_regular() {
    let rect = Plane::new(5, 4, Lattice::Rectilinear, Topology::Donut).unwrap();
    assert_eq!(degree_histogram(&rect)[4], 20);

    let hex = Plane::new(5, 4, Lattice::Hexagonal, Topology::Donut).unwrap();
    assert_eq!(degree_histogram(&hex)[6], 20);
}

#[test]
fn manifolds_share_one_contract() {
    fn summary<M: Manifold>(m: &mut M) -> (usize, usize, usize) {
        let faces = m.faces();
        (
            m.number_of_vertices(),
            faces.len() / m.vertices_per_face(),
            m.all_xyz().len(),
        )
    }

    let mut dome = GeodesicDome::new(2).unwrap();
    let mut plane = Plane::new(3, 3, Lattice::Hexagonal, Topology::Plane).unwrap();
    assert_eq!(summary(&mut dome), (63, 80, 63));
    assert_eq!(summary(&mut plane), (9, 8, 9));
}

#[test]
fn ids_follow_vertex_order() {
    let mut p = Plane::new(3, 2, Lattice::Hexagonal, Topology::Donut).unwrap();
    p.faces();
    for (i, v) in p.all_vertices().into_iter().enumerate() {
        assert_eq!(v, VertexIdx::new(i as u32));
        assert_eq!(p.vertex(v).id(), Some(i as u32));
    }
}
