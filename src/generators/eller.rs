use std::collections::BTreeMap;

use rand::Rng;

use crate::generators::carve_passage;
use crate::grid::{CellFlags, Direction, Grid};

/// Eller's row-by-row carver.
///
/// Finishes one full row per step. Each column of the current row carries a
/// set id; two columns share an id exactly when some path of already-carved
/// passages connects them. Ids are minted from a counter that only grows,
/// so an id can never collide with a live one from an earlier row, and
/// merges relabel whole groups (ids are never split).
pub struct Eller {
    row: Vec<usize>,
    cur_height: usize,
    height: usize,
    next_set_id: usize,
}

impl Eller {
    pub(crate) fn new(grid: &Grid) -> Self {
        let width = grid.dims().columns;
        Self {
            row: (1..=width).collect(),
            cur_height: 0,
            height: grid.dims().rows,
            next_set_id: width + 1,
        }
    }

    fn mint_id(&mut self) -> usize {
        let id = self.next_set_id;
        self.next_set_id += 1;
        id
    }

    /// Columns of the current row keyed by set id. A `BTreeMap` keeps the
    /// iteration order deterministic for a given RNG stream.
    fn groups(&self) -> BTreeMap<usize, Vec<usize>> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (col, &id) in self.row.iter().enumerate() {
            groups.entry(id).or_default().push(col);
        }
        groups
    }

    pub(crate) fn step<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) {
        if self.cur_height >= self.height {
            return;
        }

        let cur = self.cur_height;
        let width = grid.dims().columns;
        let last_row = cur + 1 == self.height;

        let mut groups = self.groups();

        // Horizontal merge pass, left to right. Adjacent columns in
        // different sets merge on a coin flip; on the last row the merge is
        // forced, otherwise separate sets could end the run disconnected.
        for col in 0..width.saturating_sub(1) {
            grid.set_flags(cur, col, CellFlags::VISITED);
            if self.row[col] != self.row[col + 1] && (rng.gen::<bool>() || last_row) {
                let keep = self.row[col];
                let absorbed = groups.remove(&self.row[col + 1]).unwrap_or_default();
                for &member in &absorbed {
                    self.row[member] = keep;
                }
                groups.entry(keep).or_default().extend(absorbed);
                carve_passage(grid, (cur, col), Direction::East, (cur, col + 1));
            }
        }
        grid.set_flags(cur, width - 1, CellFlags::VISITED);

        // Vertical pass, on the merged groups. Every group must send at
        // least one passage down or its cells would be stranded.
        let groups = self.groups();
        if !last_row {
            for members in groups.values() {
                let count = rng.gen_range(0..members.len()) + 1;
                for picked in rand::seq::index::sample(rng, members.len(), count).iter() {
                    let col = members[picked];
                    carve_passage(grid, (cur, col), Direction::South, (cur + 1, col));
                }
            }
        }

        // Row advance: columns a group carved down into share one fresh id,
        // every other column starts the next row as its own singleton.
        let mut next = vec![0usize; width]; // 0 is below any minted id
        for members in groups.values() {
            let down: Vec<usize> = members
                .iter()
                .copied()
                .filter(|&col| grid.get(cur, col).contains(CellFlags::SOUTH_OPEN))
                .collect();
            if down.is_empty() {
                continue;
            }
            let id = self.mint_id();
            for col in down {
                next[col] = id;
            }
        }
        for slot in next.iter_mut() {
            if *slot == 0 {
                *slot = self.mint_id();
            }
        }

        log::trace!("eller row {} carved, {} groups", cur, groups.len());
        self.row = next;
        self.cur_height += 1;
    }

    pub(crate) fn is_done(&self) -> bool {
        self.cur_height >= self.height
    }
}

#[cfg(test)]
mod test_eller {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Dsu(Vec<usize>);

    impl Dsu {
        fn new(len: usize) -> Self {
            Dsu((0..len).collect())
        }

        fn find(&mut self, x: usize) -> usize {
            if self.0[x] != x {
                let root = self.find(self.0[x]);
                self.0[x] = root;
            }
            self.0[x]
        }

        fn union(&mut self, a: usize, b: usize) {
            let (a, b) = (self.find(a), self.find(b));
            self.0[a] = b;
        }
    }

    /// Groups after this row's merge pass: columns sharing a pre-step id
    /// plus columns joined by an EAST passage carved into the row.
    fn merged_groups(grid: &Grid, row: usize, pre_ids: &[usize]) -> Dsu {
        let width = pre_ids.len();
        let mut dsu = Dsu::new(width);
        for a in 0..width {
            for b in (a + 1)..width {
                if pre_ids[a] == pre_ids[b] {
                    dsu.union(a, b);
                }
            }
        }
        for col in 0..width.saturating_sub(1) {
            if grid.get(row, col).contains(CellFlags::EAST_OPEN) {
                dsu.union(col, col + 1);
            }
        }
        dsu
    }

    #[test]
    fn three_by_five_completes_in_three_steps() {
        for seed in 0..16 {
            let mut grid = Grid::with_dims(3, 5);
            let mut engine = Eller::new(&grid);
            let mut rng = StdRng::seed_from_u64(seed);

            for expected in 1..=3 {
                assert!(!engine.is_done());
                engine.step(&mut grid, &mut rng);
                assert_eq!(engine.cur_height, expected);
            }

            assert!(engine.is_done());
            for row in 0..3 {
                for col in 0..5 {
                    assert!(grid.get(row, col).contains(CellFlags::VISITED));
                }
            }

            engine.step(&mut grid, &mut rng);
            assert_eq!(engine.cur_height, 3);
        }
    }

    #[test]
    fn every_group_sends_a_passage_down() {
        for seed in 0..16 {
            let mut grid = Grid::with_dims(3, 5);
            let mut engine = Eller::new(&grid);
            let mut rng = StdRng::seed_from_u64(seed * 31 + 1);

            while !engine.is_done() {
                let row = engine.cur_height;
                let pre_ids = engine.row.clone();
                engine.step(&mut grid, &mut rng);

                let mut dsu = merged_groups(&grid, row, &pre_ids);
                if row + 1 < engine.height {
                    for col in 0..5 {
                        let root = dsu.find(col);
                        let sent_down = (0..5)
                            .filter(|&other| dsu.find(other) == root)
                            .any(|other| grid.get(row, other).contains(CellFlags::SOUTH_OPEN));
                        assert!(sent_down, "group of column {} sent nothing down", col);
                    }
                } else {
                    // Forced merges leave exactly one group on the last row.
                    let root = dsu.find(0);
                    for col in 1..5 {
                        assert_eq!(dsu.find(col), root);
                    }
                }
            }
        }
    }

    #[test]
    fn row_ids_track_connectivity() {
        for seed in 0..8 {
            let rows = 6;
            let cols = 7;
            let mut grid = Grid::with_dims(rows, cols);
            let mut engine = Eller::new(&grid);
            let mut rng = StdRng::seed_from_u64(seed * 17 + 3);

            while !engine.is_done() {
                engine.step(&mut grid, &mut rng);
                let cur = engine.cur_height;
                if cur >= rows {
                    break;
                }

                // Two columns of the new current row share a set id exactly
                // when the passages carved so far connect them.
                let mut dsu = Dsu::new((cur + 1) * cols);
                for row in 0..=cur {
                    for col in 0..cols {
                        let flags = grid.get(row, col);
                        if flags.contains(CellFlags::EAST_OPEN) && col + 1 < cols {
                            dsu.union(row * cols + col, row * cols + col + 1);
                        }
                        if flags.contains(CellFlags::SOUTH_OPEN) && row + 1 <= cur {
                            dsu.union(row * cols + col, (row + 1) * cols + col);
                        }
                    }
                }
                for a in 0..cols {
                    for b in (a + 1)..cols {
                        let linked = dsu.find(cur * cols + a) == dsu.find(cur * cols + b);
                        let same_id = engine.row[a] == engine.row[b];
                        assert_eq!(same_id, linked, "columns {} and {} of row {}", a, b, cur);
                    }
                }
            }
        }
    }

    #[test]
    fn single_column_grid_carves_straight_down() {
        let mut grid = Grid::with_dims(4, 1);
        let mut engine = Eller::new(&grid);
        let mut rng = StdRng::seed_from_u64(11);

        while !engine.is_done() {
            engine.step(&mut grid, &mut rng);
        }

        for row in 0..3 {
            assert!(grid.get(row, 0).contains(CellFlags::SOUTH_OPEN));
            assert!(grid.get(row + 1, 0).contains(CellFlags::NORTH_OPEN));
        }
        assert!(grid.get(3, 0).contains(CellFlags::VISITED));
    }
}
