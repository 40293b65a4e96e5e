use rand::Rng;

/// One cell of the playground grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Border,
    Food,
}

/// Fixed-size rectangular grid addressed by linear index `y * width + x`.
///
/// The outermost ring is `Border` and never changes during a run. Everything
/// the engine knows about occupancy lives here; collision checks are a single
/// cell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playground {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Playground {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 3 && height >= 3, "playground too small for a border ring");

        let cells = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                    Cell::Border
                } else {
                    Cell::Empty
                }
            })
            .collect();

        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Draw uniform random interior positions until one lands on an `Empty`
    /// cell, mark it `Food` and return its index. The interior always has a
    /// free cell while a game is running, so the sampling terminates.
    pub fn place_food<R: Rng>(&mut self, rng: &mut R) -> usize {
        loop {
            let x = rng.gen_range(1..self.width - 1);
            let y = rng.gen_range(1..self.height - 1);
            let index = self.index(x, y);
            if self.cell(index) == Cell::Empty {
                self.set(index, Cell::Food);
                return index;
            }
        }
    }

    /// Number of cells currently holding `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_ring_occupies_exactly_the_outer_cells() {
        let pg = Playground::new(20, 15);

        for i in 0..20 * 15 {
            let expected = i / 20 == 0 || i / 20 == 14 || i % 20 == 0 || i % 20 == 19;
            assert_eq!(pg.cell(i) == Cell::Border, expected, "cell {}", i);
        }
    }

    #[test]
    fn interior_starts_empty() {
        let pg = Playground::new(20, 15);

        for y in 1..14 {
            for x in 1..19 {
                assert_eq!(pg.cell(pg.index(x, y)), Cell::Empty);
            }
        }
    }

    #[test]
    fn index_is_row_major() {
        let pg = Playground::new(20, 15);
        assert_eq!(pg.index(0, 0), 0);
        assert_eq!(pg.index(10, 7), 150);
        assert_eq!(pg.index(19, 14), 299);
    }

    #[test]
    fn food_lands_on_the_only_free_interior_cell() {
        let mut pg = Playground::new(6, 6);
        let free = pg.index(2, 3);

        // fill the interior except one cell, forcing the sampler onto it
        for y in 1..5 {
            for x in 1..5 {
                let index = pg.index(x, y);
                if index != free {
                    pg.set(index, Cell::Snake);
                }
            }
        }

        let placed = pg.place_food(&mut rand::thread_rng());
        assert_eq!(placed, free);
        assert_eq!(pg.cell(placed), Cell::Food);
        assert_eq!(pg.count(Cell::Food), 1);
    }
}
