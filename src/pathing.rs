use smallvec::SmallVec;

use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashMap;

/// Flood fill step counts from a start cell to every cell reachable through open passages.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Returns None if `start_coordinate` is not on the grid.
    pub fn new(grid: &Grid, start_coordinate: GridCoordinate) -> Option<Distances> {

        if !grid.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // Every link is one step, so the first time a cell is reached is also its shortest
        // distance; the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links = grid.links(*cell_coord).unwrap_or_default();
                for link_coordinate in links {
                    if !distances.contains_key(&link_coordinate) {
                        distances.insert(link_coordinate, distance_to_cell + 1);
                        new_frontier.push(link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// Number of cells reachable from the start, the start included.
    #[inline]
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// The cells at the maximum distance from the start, sorted.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[GridCoordinate; 8]>>();
        furthest.sort();
        furthest
    }
}

/// The path from the start of `distances` to `end_point`, both included, following
/// decreasing distances back from the end.
pub fn shortest_path(grid: &Grid,
                     distances: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {

    let mut current = end_point;
    let mut current_distance = distances.distance_from_start_to(end_point)?;
    let mut path = vec![current];

    while current_distance > 0 {
        let previous = grid.links(current)?
            .into_iter()
            .find(|link| distances.distance_from_start_to(*link) == Some(current_distance - 1))?;
        current = previous;
        current_distance -= 1;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// The longest path in a perfect maze.
///
/// A flood fill from any cell finds one end of the longest path as its furthest point; a
/// second flood fill from that end finds the other.
pub fn longest_path(grid: &Grid) -> Option<Vec<GridCoordinate>> {
    let arbitrary_start = grid.iter().next()?;
    let first_fill = Distances::new(grid, arbitrary_start)?;
    let path_start = *first_fill.furthest_points_on_grid().first()?;

    let second_fill = Distances::new(grid, path_start)?;
    let path_end = *second_fill.furthest_points_on_grid().first()?;
    shortest_path(grid, &second_fill, path_end)
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::generators;
    use crate::units::{Height, Width};

    static OUT_OF_GRID_COORDINATE: GridCoordinate = GridCoordinate {
        x: u32::MAX,
        y: u32::MAX,
    };

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let g = grid(3, 3);
        assert!(Distances::new(&g, OUT_OF_GRID_COORDINATE).is_none());
    }

    #[test]
    fn start() {
        let g = grid(3, 3);
        let start_coordinate = gc(1, 1);
        let distances = Distances::new(&g, start_coordinate).unwrap();
        assert_eq!(start_coordinate, distances.start());
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let g = grid(3, 3);
        let start_coordinate = gc(0, 0);
        let distances = Distances::new(&g, start_coordinate).unwrap();
        for coord in g.iter() {
            let d = distances.distance_from_start_to(coord);
            if coord != start_coordinate {
                assert!(d.is_none());
            } else {
                assert_eq!(d, Some(0));
            }
        }
        assert_eq!(distances.reached_count(), 1);
    }

    #[test]
    fn distances_on_linked_grid() {
        let mut g = grid(2, 2);
        let top_left = gc(0, 0);
        let top_right = gc(1, 0);
        let bottom_left = gc(0, 1);
        let bottom_right = gc(1, 1);
        g.link(top_left, top_right).expect("Link Failed");
        g.link(top_left, bottom_left).expect("Link Failed");
        g.link(top_right, bottom_right).expect("Link Failed");

        let distances = Distances::new(&g, top_left).unwrap();
        assert_eq!(distances.distance_from_start_to(top_left), Some(0));
        assert_eq!(distances.distance_from_start_to(top_right), Some(1));
        assert_eq!(distances.distance_from_start_to(bottom_left), Some(1));
        assert_eq!(distances.distance_from_start_to(bottom_right), Some(2));
        assert_eq!(distances.max(), 2);
        assert_eq!(&*distances.furthest_points_on_grid(), &[bottom_right]);
    }

    #[test]
    fn shortest_path_through_corridor() {
        let mut g = grid(3, 2);
        g.link(gc(0, 0), gc(1, 0)).unwrap();
        g.link(gc(1, 0), gc(2, 0)).unwrap();
        g.link(gc(2, 0), gc(2, 1)).unwrap();
        g.link(gc(2, 1), gc(1, 1)).unwrap();

        let distances = Distances::new(&g, gc(0, 0)).unwrap();
        assert_eq!(shortest_path(&g, &distances, gc(1, 1)),
                   Some(vec![gc(0, 0), gc(1, 0), gc(2, 0), gc(2, 1), gc(1, 1)]));
        assert_eq!(shortest_path(&g, &distances, gc(0, 0)), Some(vec![gc(0, 0)]));
        // (0,1) was never linked
        assert_eq!(shortest_path(&g, &distances, gc(0, 1)), None);
    }

    #[test]
    fn longest_path_spans_corridor() {
        let mut g = grid(4, 1);
        g.link(gc(0, 0), gc(1, 0)).unwrap();
        g.link(gc(1, 0), gc(2, 0)).unwrap();
        g.link(gc(2, 0), gc(3, 0)).unwrap();

        let path = longest_path(&g).unwrap();
        assert_eq!(path.len(), 4);
        let ends = {
            let mut ends = vec![path[0], path[3]];
            ends.sort();
            ends
        };
        assert_eq!(ends, vec![gc(0, 0), gc(3, 0)]);
    }

    #[test]
    fn quickcheck_carved_mazes_are_fully_reachable() {
        fn prop(w: u8, h: u8, seed: u64, start_x: u8, start_y: u8) -> TestResult {
            let (w, h) = (w as usize % 20 + 1, h as usize % 20 + 1);
            let mut g = grid(w, h);
            generators::carve_seeded(&mut g, seed);

            let start = gc(start_x as u32 % w as u32, start_y as u32 % h as u32);
            let distances = Distances::new(&g, start).unwrap();
            let reaches_all = distances.reached_count() == w * h;

            // In a tree the path to every cell is unique, so its length is its distance + 1
            let paths_agree = g.iter().all(|coord| {
                let d = distances.distance_from_start_to(coord).unwrap();
                shortest_path(&g, &distances, coord).map(|p| p.len()) == Some(d as usize + 1)
            });
            TestResult::from_bool(reaches_all && paths_agree)
        }
        quickcheck(prop as fn(u8, u8, u64, u8, u8) -> TestResult);
    }
}
