//! Seam stitching for the folded icosahedron net.
//!
//! Flattening the icosahedron onto the grid cuts it along eleven edges; each
//! cut edge appears twice on the grid boundary. At frequency `F` every cut
//! is a pair of boundary runs of `F + 1` slots, matched point for point:
//!
//! ```text
//! top folds k=0..3    (kF+t, (k+1)F)   ~ ((k+1)F, (k+2)F-t)
//! north / left edge   (4F+t, 5F)       ~ (0, F-t)
//! top / bottom edge   (5F+t, 5F)       ~ (t, 0)
//! right / bottom edge (6F, 4F+t)       ~ (2F-t, 0)
//! bottom folds k=0..3 ((k+2)F, kF+t)   ~ ((k+3)F-t, (k+1)F)
//! ```
//!
//! Chaining the matches yields the equivalence classes: two slots for a
//! generic seam point, five for each pole.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::GeodesicDome;
use crate::error::{GeodomeError, GeodomeResult};
use crate::vertex::VertexIdx;

/// A pair of boundary runs that map onto the same sphere edge.
#[derive(Debug, Clone, Copy)]
struct Cut {
    a: (i32, i32),
    a_step: (i32, i32),
    b: (i32, i32),
    b_step: (i32, i32),
}

impl Cut {
    fn at(&self, t: i32) -> ((i32, i32), (i32, i32)) {
        (
            (self.a.0 + t * self.a_step.0, self.a.1 + t * self.a_step.1),
            (self.b.0 + t * self.b_step.0, self.b.1 + t * self.b_step.1),
        )
    }
}

/// The eleven cuts of the net at frequency `f`.
fn cuts(f: i32) -> Vec<Cut> {
    let mut cuts = Vec::with_capacity(11);
    for k in 0..4 {
        cuts.push(Cut {
            a: (k * f, (k + 1) * f),
            a_step: (1, 0),
            b: ((k + 1) * f, (k + 2) * f),
            b_step: (0, -1),
        });
    }
    cuts.push(Cut {
        a: (4 * f, 5 * f),
        a_step: (1, 0),
        b: (0, f),
        b_step: (0, -1),
    });
    cuts.push(Cut {
        a: (5 * f, 5 * f),
        a_step: (1, 0),
        b: (0, 0),
        b_step: (1, 0),
    });
    cuts.push(Cut {
        a: (6 * f, 4 * f),
        a_step: (0, 1),
        b: (2 * f, 0),
        b_step: (-1, 0),
    });
    for k in 0..4 {
        cuts.push(Cut {
            a: ((k + 2) * f, k * f),
            a_step: (0, 1),
            b: ((k + 3) * f, (k + 1) * f),
            b_step: (-1, 0),
        });
    }
    cuts
}

/// Union-find over the handful of slots that lie on seams.
#[derive(Debug, Default)]
struct SeamClasses {
    parent: HashMap<VertexIdx, VertexIdx>,
}

impl SeamClasses {
    fn find(&mut self, v: VertexIdx) -> VertexIdx {
        let mut root = v;
        while let Some(&p) = self.parent.get(&root) {
            if p == root {
                break;
            }
            root = p;
        }
        // Path compression
        let mut cur = v;
        while cur != root {
            let next = self.parent.get(&cur).copied().unwrap_or(root);
            self.parent.insert(cur, root);
            cur = next;
        }
        root
    }

    fn union(&mut self, a: VertexIdx, b: VertexIdx) {
        self.parent.entry(a).or_insert(a);
        self.parent.entry(b).or_insert(b);
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent.insert(ra.max(rb), ra.min(rb));
        }
    }

    fn into_groups(mut self) -> Vec<Vec<VertexIdx>> {
        let members: Vec<VertexIdx> = self.parent.keys().copied().collect();
        let mut groups: BTreeMap<VertexIdx, Vec<VertexIdx>> = BTreeMap::new();
        for v in members {
            let root = self.find(v);
            groups.entry(root).or_default().push(v);
        }
        groups.into_values().collect()
    }
}

impl<D> GeodesicDome<D> {
    /// Recomputes every seam link from the net's cut edges.
    ///
    /// Links are installed one equivalence class at a time, so every link
    /// has its reverse.
    pub(super) fn stitch_seams(&mut self) {
        for v in &mut self.vertices {
            v.clear_same_vertices();
        }

        let f = self.frequency as i32;
        let mut classes = SeamClasses::default();
        for cut in cuts(f) {
            for t in 0..=f {
                let ((ax, ay), (bx, by)) = cut.at(t);
                if let (Some(a), Some(b)) = (self.grid.get(ax, ay), self.grid.get(bx, by)) {
                    if a != b {
                        classes.union(a, b);
                    }
                }
            }
        }

        let groups = classes.into_groups();
        let mut linked = 0;
        for mut group in groups {
            group.sort_by_key(|&v| (self.vertices[v.index()].x(), self.vertices[v.index()].y()));
            linked += group.len();
            self.link_class(&group);
        }
        debug!(
            frequency = self.frequency,
            seam_vertices = linked,
            "stitched seams"
        );
    }

    /// Makes every member of `class` list every other member.
    fn link_class(&mut self, class: &[VertexIdx]) {
        for &v in class {
            let others = class.iter().copied().filter(|&w| w != v).collect();
            self.vertices[v.index()].set_same_vertices(others);
        }
    }

    /// Checks that seam links are symmetric and that linked vertices
    /// coincide within the configured tolerance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodome::GeodesicDome;
    ///
    /// let dome = GeodesicDome::new(3)?;
    /// dome.validate_seams()?;
    /// # Ok::<(), geodome::GeodomeError>(())
    /// ```
    pub fn validate_seams(&self) -> GeodomeResult<()> {
        for (i, v) in self.vertices.iter().enumerate() {
            let here = VertexIdx::new(i as u32);
            for &other in v.same_vertices() {
                let w = self
                    .vertices
                    .get(other.index())
                    .ok_or(GeodomeError::AsymmetricSeam {
                        a: i,
                        b: other.index(),
                    })?;
                if !w.same_vertices().contains(&here) {
                    return Err(GeodomeError::AsymmetricSeam {
                        a: i,
                        b: other.index(),
                    });
                }
                let distance = v.coord().distance(w.coord());
                if distance > self.config.tolerance {
                    return Err(GeodomeError::SeamMismatch {
                        a: i,
                        b: other.index(),
                        distance,
                    });
                }
            }
        }
        Ok(())
    }
}
