use bitflags::bitflags;

bitflags! {
    /// Per-cell state, one byte per cell.
    ///
    /// The four `*_OPEN` bits record carved passages and are always set in
    /// symmetric pairs: a cell with `EAST_OPEN` has an eastern neighbour
    /// with `WEST_OPEN`. `VISITING` and `VISITED` are lifecycle bits owned
    /// by whichever engine is driving generation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const EAST_OPEN = 0x01;
        const WEST_OPEN = 0x02;
        const NORTH_OPEN = 0x04;
        const SOUTH_OPEN = 0x08;
        const VISITING = 0x10;
        const VISITED = 0x20;
    }
}

impl CellFlags {
    /// Bits that mean "some passage touches this cell".
    pub const ANY_OPEN: CellFlags = CellFlags::EAST_OPEN
        .union(CellFlags::WEST_OPEN)
        .union(CellFlags::NORTH_OPEN)
        .union(CellFlags::SOUTH_OPEN);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl Direction {
    /// Probe order used when collecting neighbour candidates.
    pub(crate) const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// The passage bit set on the cell this direction leads *out of*.
    pub fn open_flag(self) -> CellFlags {
        match self {
            Direction::North => CellFlags::NORTH_OPEN,
            Direction::South => CellFlags::SOUTH_OPEN,
            Direction::East => CellFlags::EAST_OPEN,
            Direction::West => CellFlags::WEST_OPEN,
        }
    }

    /// Coordinates of the neighbour of `(row, col)` in this direction, or
    /// `None` when that neighbour falls outside `dims`.
    pub(crate) fn neighbor_of(
        self,
        row: usize,
        col: usize,
        dims: &Dimensions,
    ) -> Option<(usize, usize)> {
        match self {
            Direction::North if row > 0 => Some((row - 1, col)),
            Direction::South if row + 1 < dims.rows => Some((row + 1, col)),
            Direction::East if col + 1 < dims.columns => Some((row, col + 1)),
            Direction::West if col > 0 => Some((row, col - 1)),
            _ => None,
        }
    }
}

/// Fixed-size rectangular grid of cell flags.
///
/// One contiguous backing vector, addressed by bounds-checked `(row, col)`
/// pairs. The grid holds no algorithm state; engines mutate it through
/// `set_flags`/`clear_flags` and readers inspect it through `get`.
pub struct Grid {
    dims: Dimensions,
    cells: Vec<CellFlags>,
}

impl Grid {
    pub(crate) fn with_dims(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![CellFlags::empty(); rows * columns],
            dims: Dimensions { rows, columns },
        }
    }

    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.dims.rows && column < self.dims.columns
    }

    pub fn get(&self, row: usize, column: usize) -> CellFlags {
        self.cells[self.index_of(row, column)]
    }

    /// OR-assigns `flags` into the cell.
    pub(crate) fn set_flags(&mut self, row: usize, column: usize, flags: CellFlags) {
        let index = self.index_of(row, column);
        self.cells[index] |= flags;
    }

    /// AND-NOT-assigns `flags` out of the cell.
    pub(crate) fn clear_flags(&mut self, row: usize, column: usize, flags: CellFlags) {
        let index = self.index_of(row, column);
        self.cells[index] &= !flags;
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        // An out-of-range coordinate is an engine defect; clamping it would
        // silently corrupt the maze, so fail loudly instead.
        assert!(
            self.in_bounds(row, column),
            "cell ({}, {}) out of bounds of {}x{} grid",
            row,
            column,
            self.dims.rows,
            self.dims.columns,
        );
        (self.dims.columns * row) + column
    }
}
