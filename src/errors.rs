//! Error types for maze construction and cell linking.
//!
//! Other modules `use crate::errors::*;` to get the `Error`, `ErrorKind`, `Result` and
//! `ResultExt` types that `error_chain!` creates.

use error_chain::error_chain;

use crate::cells::GridCoordinate;

error_chain! {
    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} x {}", width, height)
        }
        InvalidCoordinate(coord: GridCoordinate) {
            description("grid coordinate out of bounds")
            display("grid coordinate ({}, {}) is out of bounds", coord.x, coord.y)
        }
        NotAdjacent(a: GridCoordinate, b: GridCoordinate) {
            description("cells are not adjacent")
            display("cells ({}, {}) and ({}, {}) are not taxicab neighbours", a.x, a.y, b.x, b.y)
        }
    }
}
