use super::*;
use approx::assert_relative_eq;

fn plane(w: usize, h: usize, lattice: Lattice, topology: Topology) -> Plane {
    Plane::new(w, h, lattice, topology).unwrap()
}

fn positions(p: &Plane, vs: &[VertexIdx]) -> Vec<(i32, i32)> {
    vs.iter()
        .map(|&v| (p.vertex(v).x(), p.vertex(v).y()))
        .collect()
}

fn neighbour_positions(p: &Plane, x: i32, y: i32) -> Vec<(i32, i32)> {
    let v = p.vertex_at(x, y).unwrap();
    let n = p.neighbours(v, false, &mut p.visited_set());
    positions(p, &n)
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        Plane::new(0, 3, Lattice::Hexagonal, Topology::Plane).unwrap_err(),
        GeodomeError::InvalidDimensions {
            width: 0,
            height: 3
        }
    );
    assert!(Plane::new(3, 0, Lattice::Rectilinear, Topology::Donut).is_err());
}

#[test]
fn test_oversized_plane_rejected() {
    let err = Plane::new(MAX_VERTICES, 2, Lattice::Hexagonal, Topology::Plane).unwrap_err();
    assert!(matches!(err, GeodomeError::TooManyVertices { .. }));
}

#[test]
fn test_coordinates_by_lattice() {
    let hex = plane(3, 2, Lattice::Hexagonal, Topology::Plane);
    let v = hex.vertex_at(1, 1).unwrap();
    assert_eq!(hex.vertex(v).coord(), DVec3::new(1.5, 1.0, 0.0));
    let v = hex.vertex_at(1, 0).unwrap();
    assert_eq!(hex.vertex(v).coord(), DVec3::new(1.0, 0.0, 0.0));

    let rect = plane(3, 2, Lattice::Rectilinear, Topology::Plane);
    let v = rect.vertex_at(1, 1).unwrap();
    assert_eq!(rect.vertex(v).coord(), DVec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_vertex_at_is_row_major() {
    let p = plane(4, 3, Lattice::Rectilinear, Topology::Plane);
    assert_eq!(p.vertex_at(1, 2), Some(VertexIdx::new(9)));
    assert_eq!(p.vertex_at(4, 0), None);
    assert_eq!(p.vertex_at(0, 3), None);
    assert_eq!(p.vertex_at(-1, 0), None);
}

#[test]
fn test_rect_neighbours() {
    let p = plane(5, 5, Lattice::Rectilinear, Topology::Plane);
    assert_eq!(
        neighbour_positions(&p, 2, 2),
        vec![(3, 2), (1, 2), (2, 1), (2, 3)]
    );
    assert_eq!(neighbour_positions(&p, 0, 0), vec![(1, 0), (0, 1)]);
}

#[test]
fn test_rect_donut_wraps() {
    let p = plane(5, 5, Lattice::Rectilinear, Topology::Donut);
    assert_eq!(
        neighbour_positions(&p, 0, 0),
        vec![(1, 0), (4, 0), (0, 4), (0, 1)]
    );
}

#[test]
fn test_hex_neighbours_by_row_parity() {
    let p = plane(5, 5, Lattice::Hexagonal, Topology::Plane);
    assert_eq!(
        neighbour_positions(&p, 2, 2),
        vec![(3, 2), (1, 2), (1, 1), (2, 1), (1, 3), (2, 3)]
    );
    assert_eq!(
        neighbour_positions(&p, 2, 1),
        vec![(3, 1), (1, 1), (3, 0), (2, 0), (3, 2), (2, 2)]
    );
}

#[test]
fn test_hex_neighbours_are_nearest() {
    let p = plane(5, 5, Lattice::Hexagonal, Topology::Plane);
    for (x, y) in [(2, 2), (2, 1)] {
        let c = p.vertex(p.vertex_at(x, y).unwrap()).coord();
        for (nx, ny) in neighbour_positions(&p, x, y) {
            let n = p.vertex(p.vertex_at(nx, ny).unwrap()).coord();
            assert!(c.distance(n) < 1.2);
        }
    }
}

#[test]
fn test_hex_boundary_and_donut() {
    let bounded = plane(4, 4, Lattice::Hexagonal, Topology::Plane);
    assert_eq!(neighbour_positions(&bounded, 0, 0), vec![(1, 0), (0, 1)]);

    let donut = plane(4, 4, Lattice::Hexagonal, Topology::Donut);
    assert_eq!(
        neighbour_positions(&donut, 0, 0),
        vec![(1, 0), (3, 0), (3, 3), (0, 3), (3, 1), (0, 1)]
    );
}

#[test]
fn test_neighbours_respect_visited() {
    let p = plane(5, 5, Lattice::Rectilinear, Topology::Plane);
    let v = p.vertex_at(2, 2).unwrap();
    let mut visited = p.visited_set();
    visited.mark(p.vertex_at(3, 2).unwrap());
    assert_eq!(p.neighbours(v, false, &mut visited).len(), 3);
    assert!(p.neighbours(v, false, &mut visited).is_empty());
}

#[test]
fn test_tiny_donut_does_not_repeat() {
    let p = plane(2, 1, Lattice::Rectilinear, Topology::Donut);
    assert_eq!(neighbour_positions(&p, 0, 0), vec![(1, 0)]);
}

#[test]
fn test_donut_rings_cover_everything() {
    let p = plane(6, 6, Lattice::Hexagonal, Topology::Donut);
    let start = p.vertex_at(0, 0).unwrap();
    let rings = p.neighbours_in_distance(start, 6, &mut p.visited_set());
    let reached: usize = rings.iter().map(Vec::len).sum();
    assert_eq!(reached, 35);
}

#[test]
fn test_face_counts() {
    let mut hex = plane(5, 4, Lattice::Hexagonal, Topology::Plane);
    assert_eq!(hex.vertices_per_face(), 3);
    assert_eq!(hex.faces().len(), 4 * 3 * 2 * 3);

    let mut rect = plane(5, 4, Lattice::Rectilinear, Topology::Plane);
    assert_eq!(rect.vertices_per_face(), 4);
    assert_eq!(rect.faces().len(), 4 * 3 * 4);
}

#[test]
fn test_donut_faces_do_not_wrap() {
    let mut donut = plane(5, 4, Lattice::Hexagonal, Topology::Donut);
    let mut bounded = plane(5, 4, Lattice::Hexagonal, Topology::Plane);
    assert_eq!(donut.faces(), bounded.faces());
}

#[test]
fn test_single_row_has_no_faces() {
    let mut p = plane(4, 1, Lattice::Hexagonal, Topology::Plane);
    assert!(p.faces().is_empty());
}

#[test]
fn test_hex_faces_are_compact() {
    let mut p = plane(5, 4, Lattice::Hexagonal, Topology::Plane);
    let faces = p.faces();
    for tri in faces.chunks(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let d = p.vertex(a).coord().distance(p.vertex(b).coord());
            assert!(d < 1.2, "edge {a} -> {b} has length {d}");
        }
    }
}

#[test]
fn test_faces_assign_row_major_ids() {
    let mut p = plane(3, 3, Lattice::Rectilinear, Topology::Plane);
    let tris = p.all_triangles();
    assert_eq!(&tris[..4], &[0, 1, 4, 3]);
    let xyz = p.all_xyz();
    assert_relative_eq!(xyz[5].x, 2.0);
    assert_relative_eq!(xyz[5].y, 1.0);
}

#[test]
fn test_plane_payload() {
    let mut p: Plane<u8> = Plane::build(2, 2, Lattice::Hexagonal, Topology::Plane).unwrap();
    let v = p.vertex_at(1, 1).unwrap();
    p.vertex_mut(v).set_data(7);
    assert_eq!(p.vertex(v).data(), Some(&7));
}
