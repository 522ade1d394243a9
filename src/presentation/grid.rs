//! Seat grid shown next to the solution slide's diagram
//!
//! The grid is never edited directly. It is a pure function of the diagram
//! step and the student queue, mirroring the scan-and-place policy of
//! `assignSeat`: the first free cell in row-major order gets the next student.

use std::fmt;

pub const ROWS: usize = 5;
pub const COLS: usize = 6;

/// Number of sub-steps on the solution slide
pub const MAX_DIAGRAM_STEPS: u8 = 5;

/// Diagram step at which the first student is seated
const FIRST_SEATED_STEP: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Seat {
    #[default]
    Empty,
    Taken(String),
}

impl Seat {
    pub fn is_empty(&self) -> bool {
        matches!(self, Seat::Empty)
    }

    pub fn student(&self) -> Option<&str> {
        match self {
            Seat::Empty => None,
            Seat::Taken(id) => Some(id),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Empty => write!(f, "EMPTY"),
            Seat::Taken(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    cells: [[Seat; COLS]; ROWS],
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl SeatGrid {
    pub fn empty() -> Self {
        SeatGrid {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Seat::Empty)),
        }
    }

    /// Derive the grid for a diagram step.
    ///
    /// Step 3 seats `queue[0]`, step 4 adds `queue[1]`, step 5 adds `queue[2]`,
    /// each in the next free cell of row 0. Missing queue entries are skipped.
    pub fn for_step<S: AsRef<str>>(step: u8, queue: &[S]) -> Self {
        let mut grid = Self::empty();
        let seated = seated_count(step).min(queue.len());
        for (idx, student) in queue.iter().take(seated).enumerate() {
            grid.cells[idx / COLS][idx % COLS] = Seat::Taken(student.as_ref().to_string());
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Seat> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Seat; COLS]> {
        self.cells.iter()
    }

    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|seat| !seat.is_empty())
            .count()
    }
}

fn seated_count(step: u8) -> usize {
    let step = step.min(MAX_DIAGRAM_STEPS);
    if step < FIRST_SEATED_STEP {
        0
    } else {
        (step - FIRST_SEATED_STEP + 1) as usize
    }
}

/// Student highlighted at `step`: the one seated most recently, if any.
pub fn current_student<S: AsRef<str>>(step: u8, queue: &[S]) -> Option<&str> {
    match seated_count(step) {
        0 => None,
        n => queue.get(n - 1).map(|s| s.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEUE: [&str; 3] = ["S_001", "S_002", "S_003"];

    #[test]
    fn test_steps_before_search_are_empty() {
        for step in 0..FIRST_SEATED_STEP {
            let grid = SeatGrid::for_step(step, &QUEUE);
            assert_eq!(grid, SeatGrid::empty());
            assert_eq!(current_student(step, &QUEUE), None);
        }
    }

    #[test]
    fn test_each_step_seats_next_student() {
        let grid = SeatGrid::for_step(3, &QUEUE);
        assert_eq!(grid.get(0, 0), Some(&Seat::Taken("S_001".into())));
        assert_eq!(grid.occupied(), 1);

        let grid = SeatGrid::for_step(4, &QUEUE);
        assert_eq!(grid.get(0, 1), Some(&Seat::Taken("S_002".into())));
        assert_eq!(grid.occupied(), 2);

        let grid = SeatGrid::for_step(5, &QUEUE);
        assert_eq!(grid.get(0, 2), Some(&Seat::Taken("S_003".into())));
        assert_eq!(grid.occupied(), 3);
        assert_eq!(current_student(5, &QUEUE), Some("S_003"));
    }

    #[test]
    fn test_other_cells_stay_empty() {
        let grid = SeatGrid::for_step(5, &QUEUE);
        for (r, row) in grid.rows().enumerate() {
            for (c, seat) in row.iter().enumerate() {
                if r == 0 && c < 3 {
                    continue;
                }
                assert!(seat.is_empty(), "seat ({r},{c}) should be empty");
            }
        }
    }

    #[test]
    fn test_out_of_range_lookup() {
        let grid = SeatGrid::empty();
        assert_eq!(grid.get(ROWS, 0), None);
        assert_eq!(grid.get(0, COLS), None);
    }
}
