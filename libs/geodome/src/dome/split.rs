//! Frequency splitting of the jagged grid.
//!
//! Every unit square between two adjacent columns holds two triangles split
//! by the `(x, y) -> (x + 1, y + 1)` diagonal. Splitting by `f` rebuilds the
//! grid at `f` times the resolution:
//!
//! 1. each old column is split along its vertical edges,
//! 2. `f - 1` intermediate columns are opened between adjacent old columns,
//! 3. key horizontals are partitioned between rows both columns share,
//! 4. the interior of each square is filled by partitioning diagonals,
//!    longest first, from both triangle sides.
//!
//! ```text
//!  LT ─ ─ ─ RT     diagonals of length f - c start on the left edge
//!  │ ╲  ╲   │      (upper triangle) or on the bottom edge (lower
//!  │╲  ╲  ╲ │      triangle) and end on the top or right edge
//!  │ ╲  ╲  ╲│
//!  LB ─ ─ ─ RB
//! ```
//!
//! All work happens on staged vertices; the dome is only touched once the
//! new grid is complete.

use crate::error::{GeodomeError, GeodomeResult};
use crate::grid::{shared_rows, Column, GridBuilder, JaggedGrid};
use crate::vertex::{Vertex, VertexIdx};

/// Inserts `steps - 1` vertices evenly between `from` and `to`.
///
/// Coordinates are interpolated linearly and pushed back onto the unit
/// sphere; grid positions are interpolated exactly, so the grid delta
/// between the endpoints must be a multiple of `steps`.
///
/// # Example
///
/// ```rust
/// use geodome::{partition_edge, Vertex};
/// use glam::DVec3;
///
/// let a: Vertex = Vertex::new(0, 0, DVec3::X);
/// let b: Vertex = Vertex::new(3, 3, DVec3::Y);
/// let inner = partition_edge(&a, &b, 3)?;
/// assert_eq!(inner.len(), 2);
/// assert_eq!((inner[0].x(), inner[0].y()), (1, 1));
/// assert!((inner[1].coord().length() - 1.0).abs() < 1e-12);
/// # Ok::<(), geodome::GeodomeError>(())
/// ```
pub fn partition_edge<D>(
    from: &Vertex<D>,
    to: &Vertex<D>,
    steps: i32,
) -> GeodomeResult<Vec<Vertex<D>>> {
    let (dx, dy) = (to.x() - from.x(), to.y() - from.y());
    if steps < 1 || dx % steps != 0 || dy % steps != 0 {
        return Err(GeodomeError::uneven_partition(
            (from.x(), from.y()),
            (to.x(), to.y()),
            steps,
        ));
    }

    let (step_x, step_y) = (dx / steps, dy / steps);
    let delta = (to.coord() - from.coord()) / f64::from(steps);
    let inserted = (1..steps)
        .map(|j| {
            let coord = (from.coord() + delta * f64::from(j)).normalize();
            Vertex::new(from.x() + step_x * j, from.y() + step_y * j, coord)
        })
        .collect();
    Ok(inserted)
}

/// Staged subdivision of a dome's grid.
///
/// Existing vertices keep their arena index; new ones are numbered after
/// them in creation order.
pub(super) struct Splitter<'a, D> {
    base: &'a [Vertex<D>],
    pending: Vec<Vertex<D>>,
    grid: GridBuilder,
    factor: i32,
}

impl<'a, D> Splitter<'a, D> {
    /// Row spans of every column of the split grid, or the first column
    /// pair that shares no rows.
    pub(super) fn spans(columns: &[Column], factor: i32) -> GeodomeResult<Vec<(i32, i32)>> {
        let mut spans = Vec::with_capacity((columns.len().max(1) - 1) * factor as usize + 1);
        for (x, column) in columns.iter().enumerate() {
            spans.push((column.offset() * factor, column.top() * factor));
            let Some(next) = columns.get(x + 1) else {
                break;
            };
            let rows = shared_rows(column, next).ok_or(GeodomeError::IncompleteGrid {
                x: x as i32 * factor + 1,
                y: column.offset() * factor,
            })?;
            for _ in 1..factor {
                spans.push((rows.start() * factor, rows.end() * factor));
            }
        }
        Ok(spans)
    }

    pub(super) fn new(base: &'a [Vertex<D>], spans: &[(i32, i32)], factor: i32) -> Self {
        Self {
            base,
            pending: Vec::new(),
            grid: GridBuilder::with_spans(spans),
            factor,
        }
    }

    /// Runs all four stages and returns the staged vertices and new grid.
    pub(super) fn run(mut self, columns: &[Column]) -> GeodomeResult<(Vec<Vertex<D>>, JaggedGrid)> {
        for column in columns {
            self.split_column(column)?;
        }
        for (x, pair) in columns.windows(2).enumerate() {
            self.fill_strip(x as i32 * self.factor, &pair[0], &pair[1])?;
        }
        let grid = self.grid.finish()?;
        Ok((self.pending, grid))
    }

    /// Number of vertices already known (base plus staged).
    fn next_index(&self) -> VertexIdx {
        VertexIdx::new((self.base.len() + self.pending.len()) as u32)
    }

    /// Position of `v` in the split grid, as a payload-free copy.
    fn endpoint(&self, v: VertexIdx) -> Vertex<D> {
        let i = v.index();
        match self.base.get(i) {
            Some(b) => Vertex::new(b.x() * self.factor, b.y() * self.factor, b.coord()),
            None => {
                let p = &self.pending[i - self.base.len()];
                Vertex::new(p.x(), p.y(), p.coord())
            }
        }
    }

    fn at(&self, x: i32, y: i32) -> GeodomeResult<VertexIdx> {
        self.grid.get(x, y).ok_or(GeodomeError::IncompleteGrid { x, y })
    }

    /// Partitions the edge `a -> b` into `steps` and places the new vertices.
    fn partition(&mut self, steps: i32, a: VertexIdx, b: VertexIdx) -> GeodomeResult<()> {
        let inserted = partition_edge(&self.endpoint(a), &self.endpoint(b), steps)?;
        for v in inserted {
            let idx = self.next_index();
            self.grid.place(v.x(), v.y(), idx)?;
            self.pending.push(v);
        }
        Ok(())
    }

    /// Stage 1: scale a column and partition each of its vertical edges.
    ///
    /// A column of `n` vertices becomes `n + (f - 1)(n - 1)` vertices.
    fn split_column(&mut self, column: &Column) -> GeodomeResult<()> {
        for &v in column.slots() {
            let p = self.endpoint(v);
            self.grid.place(p.x(), p.y(), v)?;
        }
        for edge in column.slots().windows(2) {
            self.partition(self.factor, edge[0], edge[1])?;
        }
        Ok(())
    }

    /// Stages 2 to 4 for the strip between two adjacent old columns, whose
    /// left column now sits at `x0`.
    fn fill_strip(&mut self, x0: i32, left: &Column, right: &Column) -> GeodomeResult<()> {
        let f = self.factor;
        let Some(rows) = shared_rows(left, right) else {
            return Ok(());
        };

        // Key horizontals
        for row in rows.clone() {
            let y = row * f;
            let (l, r) = (self.at(x0, y)?, self.at(x0 + f, y)?);
            self.partition(f, l, r)?;
        }

        // Diagonals, square by square
        for row in *rows.start()..*rows.end() {
            let y0 = row * f;
            for c in 0..f - 1 {
                let len = f - c;
                let (b, t) = (self.at(x0, y0 + c)?, self.at(x0 + len, y0 + f)?);
                self.partition(len, b, t)?;
                if c > 0 {
                    let (b, t) = (self.at(x0 + c, y0)?, self.at(x0 + f, y0 + len)?);
                    self.partition(len, b, t)?;
                }
            }
        }
        Ok(())
    }
}
