//! Projection of a carved maze onto a display grid of tiles.
//!
//! Each maze cell covers a 4x4 block of tiles anchored at `(3x, 3y)`, sharing its border
//! row and column with the neighbouring blocks, so a `W x H` maze projects onto a
//! `(3W + 1) x (3H + 1)` tile grid. Pillar tiles are impassable; every other tile is floor.

use bit_set::BitSet;
use smallvec::SmallVec;
use std::fmt;

use crate::cells::{Direction, GridCoordinate, TileCoordinate};
use crate::grid::Grid;

pub type TileSmallVec = SmallVec<[TileCoordinate; 12]>;

/// Tiles a cell block spans along each axis; blocks overlap on their shared border.
pub const CELL_TILES: u32 = 4;
const CELL_STRIDE: u32 = CELL_TILES - 1;

/// Pillar tiles for the cell at `coord`.
///
/// The four block corners are always pillars. Each closed side adds the two tiles between
/// its corners, listed in the order Up, Down, Left, Right. An unvisited cell is closed on
/// every side. Coordinates outside the grid have no tiles.
pub fn wall_tiles(grid: &Grid, coord: GridCoordinate) -> TileSmallVec {
    let passages = match grid.passages(coord) {
        Some(passages) => passages,
        None => return TileSmallVec::new(),
    };

    let (xi, yi) = (coord.x * CELL_STRIDE, coord.y * CELL_STRIDE);
    let far = CELL_STRIDE;
    let t = |dx: u32, dy: u32| TileCoordinate::new(xi + dx, yi + dy);

    let mut tiles: TileSmallVec = [t(0, 0), t(far, 0), t(0, far), t(far, far)]
        .iter()
        .cloned()
        .collect();

    for dir in &[Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        if passages.is_open(*dir) {
            continue;
        }
        let side = match *dir {
            Direction::Up => [t(1, 0), t(2, 0)],
            Direction::Down => [t(1, far), t(2, far)],
            Direction::Left => [t(0, 1), t(0, 2)],
            Direction::Right => [t(far, 1), t(far, 2)],
        };
        tiles.extend(side.iter().cloned());
    }

    tiles
}

/// The union of every cell's pillar tiles over the whole display grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: u32,
    height: u32,
    pillars: BitSet,
}

impl TileMap {
    /// Only meaningful once the grid has been carved; unvisited cells project as closed boxes.
    pub fn from_grid(grid: &Grid) -> TileMap {
        let width = grid.width() * CELL_STRIDE + 1;
        let height = grid.height() * CELL_STRIDE + 1;
        let mut pillars = BitSet::with_capacity(width as usize * height as usize);

        for coord in grid.iter() {
            for tile in wall_tiles(grid, coord) {
                let _ = pillars.insert(tile.y as usize * width as usize + tile.x as usize);
            }
        }

        TileMap {
            width,
            height,
            pillars,
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
    pub fn is_valid_tile(&self, tile: TileCoordinate) -> bool {
        tile.x < self.width && tile.y < self.height
    }

    /// Is the tile impassable? Tiles outside the display grid are not pillars.
    pub fn is_pillar(&self, tile: TileCoordinate) -> bool {
        self.is_valid_tile(tile) && self.pillars.contains(self.tile_index(tile))
    }

    /// Is the tile open floor inside the display grid?
    pub fn is_floor(&self, tile: TileCoordinate) -> bool {
        self.is_valid_tile(tile) && !self.pillars.contains(self.tile_index(tile))
    }

    pub fn pillars_count(&self) -> usize {
        self.pillars.len()
    }

    /// Every pillar tile in row major order.
    pub fn pillars<'a>(&'a self) -> impl Iterator<Item = TileCoordinate> + 'a {
        let width = self.width as usize;
        self.pillars
            .iter()
            .map(move |index| TileCoordinate::new((index % width) as u32, (index / width) as u32))
    }

    #[inline]
    fn tile_index(&self, tile: TileCoordinate) -> usize {
        tile.y as usize * self.width as usize + tile.x as usize
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const PILLAR: char = '#';
        const FLOOR: char = '.';

        let mut output = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let tile = TileCoordinate::new(x, y);
                output.push(if self.is_pillar(tile) { PILLAR } else { FLOOR });
            }
            output.push('\n');
        }
        write!(f, "{}", output)
    }
}
