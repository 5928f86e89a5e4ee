use error_chain::bail;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use smallvec::SmallVec;
use std::fmt;

use crate::cells::{Direction, GridCoordinate, Passages};
use crate::errors::*;
use crate::grid_iterators::{BatchIter, CellIter};
use crate::units::{EdgesCount, Height, NodesCount, Width};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type DirectedNeighbours = SmallVec<[(Direction, GridCoordinate); 4]>;

// The widest grid whose tile projection, 3 tiles per cell plus a closing border tile,
// still has u32 addressable tile coordinates.
const MAX_DIMENSION: usize = (u32::MAX as usize - 1) / 3;

/// The most cells a grid may hold. One byte per cell plus a projected tile map of roughly
/// nine bits per cell keeps the largest grid within a few hundred megabytes.
pub const MAX_CELLS: usize = 1 << 28;

/// A rectangular maze grid holding the open passages of every cell.
///
/// Cells are stored row major. Passages are always carved on both sides of an edge at
/// once, so if a cell is open towards a neighbour that neighbour is open back towards it.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Passages>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, links: {:?}",
               self.width,
               self.height,
               self.links_count())
    }
}

impl Grid {
    /// Allocate a grid with every cell unvisited.
    ///
    /// Fails with `ErrorKind::InvalidDimensions` for a zero width or height, for
    /// dimensions too large to project onto a `u32` tile grid, or for more than
    /// `MAX_CELLS` cells.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        let invalid = w == 0 || h == 0 || w > MAX_DIMENSION || h > MAX_DIMENSION;
        let cells_count = w.checked_mul(h).filter(|count| *count <= MAX_CELLS);

        match cells_count {
            Some(count) if !invalid => {
                Ok(Grid {
                    width: w as u32,
                    height: h as u32,
                    cells: vec![Passages::empty(); count],
                })
            }
            _ => bail!(ErrorKind::InvalidDimensions(w, h)),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Node and edge counts of the grid's passage graph.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        (NodesCount(self.size()), EdgesCount(self.links_count()))
    }

    /// Number of carved edges, each counted once.
    pub fn links_count(&self) -> usize {
        self.cells
            .iter()
            .map(|passages| {
                passages.is_open(Direction::Right) as usize +
                passages.is_open(Direction::Down) as usize
            })
            .sum()
    }

    /// Is the grid coordinate within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// The open sides of the cell at `coord`, or None if the coordinate is outside the grid.
    #[inline]
    pub fn passages(&self, coord: GridCoordinate) -> Option<Passages> {
        self.grid_coordinate_to_index(coord).map(|index| self.cells[index])
    }

    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.passages(coord).map_or(false, Passages::is_visited)
    }

    /// True once every cell has been carved into the maze.
    ///
    /// A single cell grid has no neighbour to open a passage to, so it counts as a complete
    /// maze as it stands.
    pub fn is_fully_carved(&self) -> bool {
        self.size() == 1 || self.cells.iter().all(|passages| passages.is_visited())
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        coord.offset(direction)
             .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// In grid taxicab neighbours paired with the direction leading to them, in
    /// `Direction::DISCOVERY_ORDER`.
    pub fn neighbours_with_directions(&self, coord: GridCoordinate) -> DirectedNeighbours {
        Direction::DISCOVERY_ORDER
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir).map(|n| (*dir, n)))
            .collect()
    }

    /// Cells that are to the Left, Up, Down or Right of a particular cell (in that order), but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.neighbours_with_directions(coord)
            .into_iter()
            .map(|(_, neighbour_coord)| neighbour_coord)
            .collect()
    }

    /// Link two adjacent cells by carving a passage on both of them.
    ///
    /// Linking already linked cells is a no-op.
    pub fn link(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        for coord in &[a, b] {
            if !self.is_valid_coordinate(*coord) {
                bail!(ErrorKind::InvalidCoordinate(*coord));
            }
        }

        let direction = Direction::DISCOVERY_ORDER
            .iter()
            .cloned()
            .find(|dir| a.offset(*dir) == Some(b))
            .ok_or_else(|| Error::from(ErrorKind::NotAdjacent(a, b)))?;

        self.carve_passage(a, direction, b);
        Ok(())
    }

    /// Open `from` towards `direction` and `to` back the opposite way in one step.
    ///
    /// `to` must be the valid neighbour of `from` in `direction`. Debug builds panic when it
    /// is not; release builds leave the grid untouched rather than carve half a passage.
    pub(crate) fn carve_passage(&mut self,
                                from: GridCoordinate,
                                direction: Direction,
                                to: GridCoordinate) {
        debug_assert!(self.is_valid_coordinate(from), "carving from {:?} outside the grid", from);
        debug_assert!(self.is_valid_coordinate(to), "carving to {:?} outside the grid", to);
        debug_assert_eq!(self.neighbour_at_direction(from, direction), Some(to));
        if let (Some(from_index), Some(to_index)) = (self.grid_coordinate_to_index(from),
                                                     self.grid_coordinate_to_index(to)) {
            self.cells[from_index].open(direction);
            self.cells[to_index].open(direction.opposite());
        }
    }

    /// Are two cells in the grid linked?
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        self.passages(a).map_or(false, |passages| {
            passages.directions().any(|dir| self.neighbour_at_direction(a, dir) == Some(b))
        })
    }

    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: Direction) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() &&
        self.passages(coord).map_or(false, |passages| passages.is_open(direction))
    }

    /// Cells that are linked to a particular cell by a passage.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        self.passages(coord).map(|passages| {
            passages.directions()
                    .filter_map(|dir| self.neighbour_at_direction(coord, dir))
                    .collect()
        })
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::row_major(self.width, self.height)
    }

    /// Every coordinate with `x` ascending in the outer loop and `y` ascending in the inner.
    #[inline]
    pub fn iter_column_major(&self) -> CellIter {
        CellIter::column_major(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::rows(self.width, self.height)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::columns(self.width, self.height)
    }

    /// Each carved edge once, as a cell paired with its Right or Down linked neighbour.
    pub fn iter_links<'a>(&'a self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + 'a {
        self.iter().flat_map(move |coord| {
            let right = self.linked_neighbour(coord, Direction::Right);
            let down = self.linked_neighbour(coord, Direction::Down);
            right.into_iter().chain(down).map(move |neighbour_coord| (coord, neighbour_coord))
        })
    }

    fn linked_neighbour(&self, coord: GridCoordinate, direction: Direction) -> Option<GridCoordinate> {
        if self.is_neighbour_linked(coord, direction) {
            self.neighbour_at_direction(coord, direction)
        } else {
            None
        }
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridCoordinate {
        let x = rng.gen_range(0..self.width);
        let y = rng.gen_range(0..self.height);
        GridCoordinate::new(x, y)
    }

    /// The passage graph with one node per cell, node index being the row major cell index.
    pub fn to_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }

        for (a, b) in self.iter_links() {
            if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_to_index(a),
                                                     self.grid_coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }

        graph
    }
}
