use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::GridCoordinate;
use crate::grid::{DirectedNeighbours, Grid};

/// Apply the hunt and kill maze generation algorithm to the grid.
///
/// Starting from a random cell we walk randomly, carving a passage into an unvisited
/// neighbour at every step, until the walk reaches a cell with no unvisited neighbours.
/// Then we hunt: scan the grid (columns left to right, each column top to bottom) for the
/// first unvisited cell that borders the visited region, and resume walking from the
/// visited cell bordering it. Carving stops when the hunt finds nothing, at which point
/// every cell is part of the maze and the passages form a spanning tree.
///
/// All randomness is drawn from `rng`, so a seeded generator fully determines the maze.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let mut current = grid.random_cell(rng);
    let mut walks_count = 0usize;

    loop {
        let steps = walk(grid, rng, current);
        walks_count += 1;
        trace!("walk from ({}, {}) carved {} passages", current.x, current.y, steps);

        match hunt(grid) {
            Some(resume_coord) => {
                trace!("hunt resumes at ({}, {})", resume_coord.x, resume_coord.y);
                current = resume_coord;
            }
            None => break,
        }
    }

    debug!("carved {}x{} maze with {} walks and {} passages",
           grid.width(),
           grid.height(),
           walks_count,
           grid.links_count());
}

/// Carve the grid with a `XorShiftRng` seeded from `seed`.
pub fn carve_seeded(grid: &mut Grid, seed: u64) {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    carve(grid, &mut rng);
}

/// Randomly walk from `start`, carving a passage into a uniformly chosen unvisited neighbour
/// at each step, until no unvisited neighbour remains.
///
/// Returns the number of passages carved; a walk that starts boxed in carves none.
pub fn walk<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, start: GridCoordinate) -> usize {
    let mut current = start;
    let mut steps = 0;

    loop {
        let candidates = unvisited_neighbours(grid, current);
        match candidates.choose(rng) {
            Some(&(direction, next)) => {
                grid.carve_passage(current, direction, next);
                current = next;
                steps += 1;
            }
            None => return steps,
        }
    }
}

/// Find where a stuck walk should resume.
///
/// Scans cells with `x` ascending, then `y` ascending within each column. The first
/// unvisited cell with a visited neighbour (neighbours checked in discovery order) yields
/// the coordinate of that visited neighbour. None means there is nothing left to connect.
pub fn hunt(grid: &Grid) -> Option<GridCoordinate> {
    grid.iter_column_major()
        .filter(|coord| !grid.is_visited(*coord))
        .find_map(|coord| {
            grid.neighbours(coord)
                .into_iter()
                .find(|neighbour_coord| grid.is_visited(*neighbour_coord))
        })
}

fn unvisited_neighbours(grid: &Grid, coord: GridCoordinate) -> DirectedNeighbours {
    let mut neighbours = grid.neighbours_with_directions(coord);
    neighbours.retain(|(_, neighbour_coord)| !grid.is_visited(*neighbour_coord));
    neighbours
}
