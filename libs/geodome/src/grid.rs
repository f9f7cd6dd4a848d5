//! # Jagged Grid
//!
//! Rectilinear index over a folded net: an ordered sequence of columns, each
//! holding a contiguous run of rows starting at its own offset.
//!
//! ```text
//!   x=0    x=1    x=2
//!          [y=2]  [y=3]
//!   [y=1]  [y=1]  [y=2]
//!   [y=0]  [y=0]  [y=1]
//!   offset=0      offset=1
//! ```

use std::ops::RangeInclusive;

use crate::error::{GeodomeError, GeodomeResult};
use crate::vertex::VertexIdx;

/// One column of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Column {
    offset: i32,
    slots: Vec<VertexIdx>,
}

impl Column {
    pub(crate) fn new(offset: i32, slots: Vec<VertexIdx>) -> Self {
        Self { offset, slots }
    }

    /// Lowest row present.
    #[inline]
    pub(crate) fn offset(&self) -> i32 {
        self.offset
    }

    /// Highest row present.
    #[inline]
    pub(crate) fn top(&self) -> i32 {
        self.offset + self.slots.len() as i32 - 1
    }

    #[inline]
    pub(crate) fn rows(&self) -> RangeInclusive<i32> {
        self.offset..=self.top()
    }

    #[inline]
    pub(crate) fn slots(&self) -> &[VertexIdx] {
        &self.slots
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Vertex at row `y`, if the row lies inside the column.
    #[inline]
    pub(crate) fn get(&self, y: i32) -> Option<VertexIdx> {
        let row = usize::try_from(y.checked_sub(self.offset)?).ok()?;
        self.slots.get(row).copied()
    }
}

/// Rows shared by two columns, if any.
pub(crate) fn shared_rows(a: &Column, b: &Column) -> Option<RangeInclusive<i32>> {
    let lo = a.offset().max(b.offset());
    let hi = a.top().min(b.top());
    (lo <= hi).then_some(lo..=hi)
}

/// Jagged 2D index of vertex slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct JaggedGrid {
    columns: Vec<Column>,
}

impl JaggedGrid {
    pub(crate) fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    #[inline]
    pub(crate) fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[inline]
    pub(crate) fn column(&self, x: i32) -> Option<&Column> {
        self.columns.get(usize::try_from(x).ok()?)
    }

    /// Vertex at `(x, y)`, or `None` outside the grid.
    pub(crate) fn get(&self, x: i32, y: i32) -> Option<VertexIdx> {
        self.column(x)?.get(y)
    }

    /// All slots in column-major, row-minor order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = VertexIdx> + '_ {
        self.columns.iter().flat_map(|c| c.slots().iter().copied())
    }

    /// Total number of slots.
    pub(crate) fn slot_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

/// Grid under construction: every slot starts empty and must be filled
/// exactly once before [`GridBuilder::finish`] succeeds.
#[derive(Debug)]
pub(crate) struct GridBuilder {
    columns: Vec<(i32, Vec<Option<VertexIdx>>)>,
}

impl GridBuilder {
    /// Creates an empty builder from per-column `(offset, top)` row spans.
    pub(crate) fn with_spans(spans: &[(i32, i32)]) -> Self {
        let columns = spans
            .iter()
            .map(|&(lo, hi)| (lo, vec![None; (hi - lo + 1).max(0) as usize]))
            .collect();
        Self { columns }
    }

    fn slot_mut(&mut self, x: i32, y: i32) -> Option<&mut Option<VertexIdx>> {
        let (offset, slots) = self.columns.get_mut(usize::try_from(x).ok()?)?;
        let row = usize::try_from(y.checked_sub(*offset)?).ok()?;
        slots.get_mut(row)
    }

    /// Vertex already placed at `(x, y)`.
    pub(crate) fn get(&self, x: i32, y: i32) -> Option<VertexIdx> {
        let (offset, slots) = self.columns.get(usize::try_from(x).ok()?)?;
        let row = usize::try_from(y.checked_sub(*offset)?).ok()?;
        slots.get(row).copied().flatten()
    }

    /// Places `v` at `(x, y)`; fails if the slot is outside the column or taken.
    pub(crate) fn place(&mut self, x: i32, y: i32, v: VertexIdx) -> GeodomeResult<()> {
        match self.slot_mut(x, y) {
            Some(slot @ None) => {
                *slot = Some(v);
                Ok(())
            }
            _ => Err(GeodomeError::SlotOccupied { x, y }),
        }
    }

    /// Converts into a [`JaggedGrid`], failing on the first empty slot.
    pub(crate) fn finish(self) -> GeodomeResult<JaggedGrid> {
        let mut columns = Vec::with_capacity(self.columns.len());
        for (x, (offset, slots)) in self.columns.into_iter().enumerate() {
            let filled = slots
                .iter()
                .enumerate()
                .map(|(row, slot)| {
                    slot.ok_or(GeodomeError::IncompleteGrid {
                        x: x as i32,
                        y: offset + row as i32,
                    })
                })
                .collect::<GeodomeResult<Vec<_>>>()?;
            columns.push(Column::new(offset, filled));
        }
        Ok(JaggedGrid::new(columns))
    }
}
