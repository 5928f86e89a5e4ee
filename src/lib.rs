//! **maze_tiles** generates perfect mazes with the hunt and kill algorithm and projects
//! them onto a tile grid of impassable pillars for a tile based dungeon.
//!
//! ```
//! use maze_tiles::{generators, grid::Grid, projection::TileMap, units::{Height, Width}};
//!
//! let mut grid = Grid::new(Width(8), Height(6)).unwrap();
//! generators::carve_seeded(&mut grid, 1);
//! assert!(grid.is_fully_carved());
//!
//! let tiles = TileMap::from_grid(&grid);
//! assert_eq!((tiles.width(), tiles.height()), (25, 19));
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod projection;
pub mod units;
mod utils;
