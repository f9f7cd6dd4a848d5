use super::*;
use approx::assert_relative_eq;
use config::constants::dome_physical_vertices;
use std::collections::HashSet;

fn dome(frequency: u32) -> GeodesicDome {
    GeodesicDome::new(frequency).unwrap()
}

fn at(dome: &GeodesicDome, x: i32, y: i32) -> VertexIdx {
    dome.vertex_at(x, y).unwrap()
}

/// Unique undirected edges between physical vertices.
fn physical_edges(dome: &mut GeodesicDome) -> HashSet<(VertexIdx, VertexIdx)> {
    let faces = dome.faces();
    let mut edges = HashSet::new();
    for tri in faces.chunks(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let (a, b) = (dome.canonical(a), dome.canonical(b));
            edges.insert((a.min(b), a.max(b)));
        }
    }
    edges
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_icosahedron_counts() {
    let mut ico = GeodesicDome::icosahedron();
    assert_eq!(ico.number_of_vertices(), 22);
    assert_eq!(ico.physical_vertex_count(), 12);
    assert_eq!(ico.faces().len(), 20 * 3);
    assert_eq!((ico.x_max(), ico.y_max()), (6, 5));
    assert_eq!(ico.frequency(), 1);
    assert_relative_eq!(ico.arc_length(), ICOSAHEDRON_ARC_LENGTH);
}

#[test]
fn test_icosahedron_poles_are_stitched() {
    let ico = GeodesicDome::icosahedron();
    let north = at(&ico, 0, 1);
    let south = at(&ico, 2, 0);
    assert_eq!(ico.seam_partners(north).len(), 4);
    assert_eq!(ico.seam_partners(south).len(), 4);
    assert!(ico.vertex(north).coord().abs_diff_eq(glam::DVec3::Y, 1e-12));
    assert!(ico.vertex(south).coord().abs_diff_eq(-glam::DVec3::Y, 1e-12));
    for &p in ico.seam_partners(north) {
        assert_eq!(ico.canonical(p), north);
    }
}

#[test]
fn test_icosahedron_wraps_bottom_edge() {
    let ico = GeodesicDome::icosahedron();
    assert_eq!(ico.seam_partners(at(&ico, 0, 0)), &[at(&ico, 5, 5)]);
    assert_eq!(ico.seam_partners(at(&ico, 1, 0)), &[at(&ico, 6, 5)]);
}

#[test]
fn test_icosahedron_edges_are_uniform() {
    let mut ico = GeodesicDome::icosahedron();
    let edges = physical_edges(&mut ico);
    assert_eq!(edges.len(), 30);
    let first = {
        let (a, b) = edges.iter().next().copied().unwrap();
        ico.vertex(a).coord().distance(ico.vertex(b).coord())
    };
    for (a, b) in edges {
        let len = ico.vertex(a).coord().distance(ico.vertex(b).coord());
        assert_relative_eq!(len, first, epsilon = 1e-3);
    }
}

#[test]
fn test_new_with_frequency_one_is_icosahedron() {
    let a = dome(1);
    let b = GeodesicDome::icosahedron();
    assert_eq!(a.number_of_vertices(), b.number_of_vertices());
    for (va, vb) in a.vertices().iter().zip(b.vertices()) {
        assert_eq!((va.x(), va.y()), (vb.x(), vb.y()));
        assert_eq!(va.coord(), vb.coord());
    }
}

// =============================================================================
// Splitting
// =============================================================================

#[test]
fn test_split_two_counts() {
    let mut d = dome(2);
    assert_eq!(d.number_of_vertices(), 63);
    assert_eq!(d.physical_vertex_count(), 42);
    assert_eq!(d.faces().len(), 80 * 3);
    assert_eq!((d.x_max(), d.y_max()), (12, 10));
}

#[test]
fn test_counts_follow_closed_forms() {
    for f in 1..=5 {
        let mut d = dome(f);
        assert_eq!(d.number_of_vertices(), dome_vertex_slots(f), "f={f}");
        assert_eq!(d.physical_vertex_count(), dome_physical_vertices(f), "f={f}");
        assert_eq!(d.faces().len(), dome_triangle_count(f) * 3, "f={f}");
    }
}

#[test]
fn test_euler_characteristic() {
    for f in [1, 3, 4] {
        let mut d = dome(f);
        let v = d.physical_vertex_count() as i64;
        let e = physical_edges(&mut d).len() as i64;
        let faces = dome_triangle_count(f) as i64;
        assert_eq!(v - e + faces, 2, "f={f}");
    }
}

#[test]
fn test_all_vertices_on_unit_sphere() {
    let d = dome(4);
    for v in d.vertices() {
        assert_relative_eq!(v.coord().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_split_is_multiplicative() {
    let mut a = dome(2);
    a.split(3).unwrap();
    let b = dome(6);
    assert_eq!(a.frequency(), 6);
    assert_eq!(a.number_of_vertices(), 427);
    assert_eq!(a.number_of_vertices(), b.number_of_vertices());
    assert_eq!(a.physical_vertex_count(), b.physical_vertex_count());
    for x in 0..=a.x_max() {
        assert_eq!(a.column_range(x), b.column_range(x));
    }
    // Base vertices land on the same grid points either way
    for x in (0..=36).step_by(6) {
        for y in (0..=30).step_by(6) {
            if let (Some(va), Some(vb)) = (a.vertex_at(x, y), b.vertex_at(x, y)) {
                assert!(a
                    .vertex(va)
                    .coord()
                    .abs_diff_eq(b.vertex(vb).coord(), 1e-12));
            }
        }
    }
}

#[test]
fn test_split_preserves_existing_vertices() {
    let mut d = dome(1);
    let v4 = at(&d, 1, 1);
    let coord = d.vertex(v4).coord();
    d.split(3).unwrap();
    assert_eq!(d.vertex_at(3, 3), Some(v4));
    assert_eq!((d.vertex(v4).x(), d.vertex(v4).y()), (3, 3));
    assert_eq!(d.vertex(v4).coord(), coord);
}

#[test]
fn test_split_updates_scale() {
    let mut d = dome(1);
    d.split(4).unwrap();
    assert_eq!((d.x_max(), d.y_max()), (24, 20));
    assert_relative_eq!(d.arc_length(), ICOSAHEDRON_ARC_LENGTH / 4.0);
    assert_eq!(d.column_range(0), Some(0..=4));
    assert_eq!(d.column_range(24), Some(16..=20));
    assert_eq!(d.column_range(25), None);
}

#[test]
fn test_split_one_is_noop() {
    let mut d = dome(2);
    d.split(1).unwrap();
    assert_eq!(d.frequency(), 2);
    assert_eq!(d.number_of_vertices(), 63);
}

#[test]
fn test_split_zero_fails_without_mutation() {
    let mut d = dome(2);
    let err = d.split(0).unwrap_err();
    assert!(matches!(
        err,
        GeodomeError::InvalidFrequency { frequency: 0, .. }
    ));
    assert_eq!(d.frequency(), 2);
    assert_eq!(d.number_of_vertices(), 63);
}

#[test]
fn test_split_respects_vertex_limit() {
    let config = DomeConfig::new(1e-7, 100).unwrap();
    let mut d: GeodesicDome = GeodesicDome::build(1, config).unwrap();
    assert_eq!(
        d.split(3),
        Err(GeodomeError::too_many_vertices(124, 100))
    );
    assert_eq!(d.frequency(), 1);
    assert!(d.split(2).is_ok());
}

#[test]
fn test_split_rejects_huge_total_frequency() {
    let mut d = dome(2);
    assert!(matches!(
        d.split(MAX_FREQUENCY),
        Err(GeodomeError::InvalidFrequency { .. })
    ));
}

// =============================================================================
// Seams
// =============================================================================

#[test]
fn test_seams_valid_after_repeated_splits() {
    let mut d = dome(2);
    d.validate_seams().unwrap();
    d.split(2).unwrap();
    d.validate_seams().unwrap();
    d.split(3).unwrap();
    d.validate_seams().unwrap();
}

#[test]
fn test_seam_class_sizes() {
    let d = dome(3);
    let mut poles = 0;
    for i in 0..d.number_of_vertices() as u32 {
        match d.seam_partners(VertexIdx::new(i)).len() {
            0 | 1 => {}
            4 => poles += 1,
            n => panic!("unexpected seam class of {} slots", n + 1),
        }
    }
    assert_eq!(poles, 10);
}

// =============================================================================
// Faces and ids
// =============================================================================

#[test]
fn test_faces_assign_ids_in_grid_order() {
    let mut d = dome(2);
    d.faces();
    let ids: Vec<_> = d
        .all_vertices()
        .into_iter()
        .map(|v| d.vertex(v).id())
        .collect();
    let expected: Vec<_> = (0..63).map(Some).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_split_invalidates_ids() {
    let mut d = dome(1);
    d.faces();
    d.split(2).unwrap();
    assert!(d.vertices().iter().all(|v| v.id().is_none()));
}

#[test]
fn test_all_triangles_indexes_xyz() {
    let mut d = dome(3);
    let tris = d.all_triangles();
    let xyz = d.all_xyz();
    assert_eq!(tris.len(), 180 * 3);
    assert_eq!(xyz.len(), 124);
    assert!(tris.iter().all(|&i| (i as usize) < xyz.len()));
}

#[test]
fn test_faces_point_outward() {
    let mut d = dome(2);
    let faces = d.faces();
    let mut outward = 0;
    for tri in faces.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| d.vertex(v).coord());
        let normal = (b - a).cross(c - a);
        if normal.dot(a + b + c) > 0.0 {
            outward += 1;
        }
    }
    // One consistent winding across the whole net
    assert!(outward == 0 || outward == 80);
}

// =============================================================================
// Lookup and neighbours
// =============================================================================

#[test]
fn test_vertex_at_bounds() {
    let d = dome(2);
    assert!(d.vertex_at(0, 0).is_some());
    assert!(d.vertex_at(d.x_max(), d.y_max()).is_some());
    assert!(d.vertex_at(d.x_max() + 1, 0).is_none());
    assert!(d.vertex_at(0, d.y_max()).is_none());
    assert!(d.vertex_at(-1, 0).is_none());
}

#[test]
fn test_north_pole_has_five_neighbours() {
    let d = GeodesicDome::icosahedron();
    let mut visited = d.visited_set();
    let n = d.neighbours(at(&d, 0, 1), false, &mut visited);
    assert_eq!(n.len(), 5);
    let expected = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)];
    let got: Vec<_> = n
        .iter()
        .map(|&v| (d.vertex(v).x(), d.vertex(v).y()))
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn test_pole_neighbours_without_seams() {
    let d = GeodesicDome::icosahedron();
    let mut visited = d.visited_set();
    let n = d.neighbours(at(&d, 0, 1), true, &mut visited);
    assert_eq!(n.len(), 2);
}

#[test]
fn test_interior_vertex_has_six_neighbours() {
    let d = dome(2);
    let v = at(&d, 3, 2);
    assert!(d.seam_partners(v).is_empty());
    let mut visited = d.visited_set();
    assert_eq!(d.neighbours(v, false, &mut visited).len(), 6);
    assert_eq!(visited.count(), 7);
}

#[test]
fn test_neighbours_skip_visited() {
    let d = dome(2);
    let v = at(&d, 3, 2);
    let mut visited = d.visited_set();
    visited.mark(at(&d, 3, 3));
    assert_eq!(d.neighbours(v, false, &mut visited).len(), 5);
    d.unmark_vertices(&mut visited);
    assert_eq!(d.neighbours(v, false, &mut visited).len(), 6);
}

#[test]
fn test_first_ring_matches_neighbours() {
    let d = dome(3);
    let v = at(&d, 4, 4);
    let ring = d.neighbours_in_distance(v, 1, &mut d.visited_set());
    let direct = d.neighbours(v, false, &mut d.visited_set());
    assert_eq!(ring, vec![direct]);
    assert!(d.neighbours_in_distance(v, 0, &mut d.visited_set()).is_empty());
}

#[test]
fn test_rings_from_pole_cover_sphere() {
    let d = dome(3);
    let north = at(&d, 0, 3);
    let rings = d.neighbours_in_distance(north, 11, &mut d.visited_set());
    assert_eq!(rings.len(), 11);
    assert_eq!(rings[0].len(), 5);
    let reached: usize = rings.iter().map(Vec::len).sum();
    assert_eq!(reached, dome_physical_vertices(3) - 1);

    let physical: HashSet<_> = rings.iter().flatten().map(|&v| d.canonical(v)).collect();
    assert_eq!(physical.len(), reached);
}

#[test]
fn test_icosahedron_rings() {
    let d = GeodesicDome::icosahedron();
    let rings = d.neighbours_in_distance(at(&d, 0, 1), 3, &mut d.visited_set());
    let sizes: Vec<_> = rings.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![5, 5, 1]);
}

// =============================================================================
// Payloads
// =============================================================================

#[test]
fn test_payload_survives_split() {
    let mut d: GeodesicDome<String> = GeodesicDome::build(1, DomeConfig::default()).unwrap();
    let v = d.vertex_at(2, 2).unwrap();
    d.vertex_mut(v).set_data("tile".to_string());
    d.split(2).unwrap();
    assert_eq!(d.vertex(v).data().map(String::as_str), Some("tile"));
    let fresh = d.vertex_at(1, 1).unwrap();
    assert!(d.vertex(fresh).data().is_none());
}
