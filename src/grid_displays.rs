use std::fmt;

use crate::cells::{Direction, GridCoordinate};
use crate::grid::{CoordinateSmallVec, Grid};
use crate::pathing::Distances;
use crate::utils;
use crate::utils::FnvHashSet;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

#[derive(Debug, Copy, Clone)]
pub struct EmptyDisplay;
impl GridDisplay for EmptyDisplay {}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {

        let contains_coordinate =
            |coordinates: &CoordinateSmallVec| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            String::from(" S ")

        } else if contains_coordinate(&self.end_coordinates) {

            String::from(" E ")

        } else {
            String::from("   ")
        }
    }
}

/// A grid paired with the display deciding what goes inside each cell.
pub struct GridRender<'a> {
    grid: &'a Grid,
    display: &'a dyn GridDisplay,
}

impl<'a> GridRender<'a> {
    pub fn new(grid: &'a Grid, display: &'a dyn GridDisplay) -> GridRender<'a> {
        GridRender { grid, display }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GridRender::new(self, &EmptyDisplay))
    }
}

impl<'a> fmt::Display for GridRender<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let grid = self.grid;
        let columns_count = grid.width() as usize;
        let rows_count = grid.height() as usize;

        // Start by special case rendering the text for the top most boundary
        let mut output = String::from(WALL_RD);
        if let Some(first_grid_row) = grid.iter_row().next() {
            for (index, coord) in first_grid_row.iter().enumerate() {
                output.push_str(WALL_LR_3);
                let is_right_open = grid.is_neighbour_linked(*coord, Direction::Right);
                if is_right_open {
                    output.push_str(WALL_LR);
                } else {
                    let is_last_cell = index == (columns_count - 1);
                    if is_last_cell {
                        output.push_str(WALL_LD);
                    } else {
                        output.push_str(WALL_LRD);
                    }
                }
            }
        }
        output.push('\n');

        for (index_row, row) in grid.iter_row().enumerate() {

            let is_last_row = index_row == (rows_count - 1);

            // Starts of by special case rendering the left most boundary of the row
            // The top section of the cell is done by the previous row.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for (index_column, cell_coord) in row.into_iter().enumerate() {

                let is_first_column = index_column == 0;
                let is_last_column = index_column == (columns_count - 1);
                let right_open = grid.is_neighbour_linked(cell_coord, Direction::Right);
                let down_open = grid.is_neighbour_linked(cell_coord, Direction::Down);

                // Each cell will simply use the bottom wall of the cell above
                // it as its own top wall, so we only need to worry about the cell’s body (room space),
                // its right boundary ('|'), and its bottom boundary ('---+') minus the bottom left corner.
                let right_boundary = if right_open { " " } else { WALL_UD };

                row_middle_section_render.push_str(&self.display.render_cell_body(cell_coord));
                row_middle_section_render.push_str(right_boundary);

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if down_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };

                }
                let bottom_boundary = if down_open { "   " } else { WALL_LR_3 };
                row_bottom_section_render.push_str(bottom_boundary);

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_corner_from_right =
                            grid.neighbour_at_direction(cell_coord, Direction::Right)
                                .map_or(false, |c| grid.is_neighbour_linked(c, Direction::Down));
                        let access_corner_from_below =
                            grid.neighbour_at_direction(cell_coord, Direction::Down)
                                .map_or(false, |c| grid.is_neighbour_linked(c, Direction::Right));
                        let show_right_section = !access_corner_from_right;
                        let show_down_section = !access_corner_from_below;
                        let show_up_section = !right_open;
                        let show_left_section = !down_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::generators;
    use crate::units::{Height, Width};

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn uncarved_single_cell() {
        let g = grid(1, 1);
        assert_eq!(format!("{}", g), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn open_corridor() {
        let mut g = grid(2, 1);
        g.link(gc(0, 0), gc(1, 0)).unwrap();
        assert_eq!(format!("{}", g), "┌───────┐\n│       │\n└───────┘\n");
    }

    #[test]
    fn step_rng_golden_maze_text() {
        let mut g = grid(3, 3);
        let mut rng = StepRng::new(0x1234_5678, 0x9E37_79B9_7F4A_7C15);
        generators::carve(&mut g, &mut rng);

        let expected = "┌───────────┐\n\
                        │           │\n\
                        │   ┌───┐   │\n\
                        │   │   │   │\n\
                        │   │   ╵   │\n\
                        │   │       │\n\
                        └───┴───────┘\n";
        assert_eq!(format!("{}", g), expected);
    }

    #[test]
    fn cell_bodies_come_from_display() {
        let mut g = grid(2, 1);
        g.link(gc(0, 0), gc(1, 0)).unwrap();
        let path = PathDisplay::new(&[gc(1, 0)]);
        assert_eq!(format!("{}", GridRender::new(&g, &path)), "┌───────┐\n│     . │\n└───────┘\n");

        let mut starts = CoordinateSmallVec::new();
        starts.push(gc(0, 0));
        let mut ends = CoordinateSmallVec::new();
        ends.push(gc(1, 0));
        let points = StartEndPointsDisplay::new(starts, ends);
        assert_eq!(format!("{}", GridRender::new(&g, &points)), "┌───────┐\n│ S   E │\n└───────┘\n");

        let distances = Distances::new(&g, gc(0, 0)).unwrap();
        assert_eq!(format!("{}", GridRender::new(&g, &distances)), "┌───────┐\n│ 0   1 │\n└───────┘\n");
    }
}
