use docopt::Docopt;
use log::{debug, info};
use rand::Rng;
use serde_derive::Deserialize;
use maze_tiles::{
    generators,
    grid::Grid,
    grid_displays::{GridRender, PathDisplay},
    pathing,
    projection::TileMap,
    units::{Height, Width},
};
use std::{
    fs::File,
    io::prelude::*,
};

const USAGE: &str = "Maze tiles

Usage:
    maze_tiles -h | --help
    maze_tiles [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--tiles] [--show-path] [--text-out=<path>] [--save-edges=<path>] [--verbose]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 10].
    --grid-height=<h>      The grid height in a w*h grid [default: 10].
    --seed=<s>             Seed for the random source; the same seed and size always give the same maze.
    --tiles                Print the pillar tile map ('#' pillar, '.' floor) instead of the box drawn maze.
    --show-path            Mark the longest path through the maze on the box drawn maze.
    --text-out=<path>      Output file path for the rendering instead of stdout.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --verbose              Log carving progress.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_tiles: bool,
    flag_show_path: bool,
    flag_text_out: String,
    flag_save_edges: String,
    flag_verbose: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::maze_tiles::errors::Error, ::maze_tiles::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Logger(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    init_logging(args.flag_verbose)?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("carving {}x{} maze with seed {}", width, height, seed);

    let mut maze_grid = Grid::new(Width(width), Height(height))
        .chain_err(|| "Failed to allocate the maze grid")?;
    generators::carve_seeded(&mut maze_grid, seed);

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze_grid, &args.flag_save_edges)?;
    }

    let rendering = if args.flag_tiles {
        let tile_map = TileMap::from_grid(&maze_grid);
        debug!("{} pillars on a {}x{} tile map",
               tile_map.pillars_count(),
               tile_map.width(),
               tile_map.height());
        format!("{}", tile_map)
    } else if args.flag_show_path {
        let path = pathing::longest_path(&maze_grid).unwrap_or_else(Vec::new);
        debug!("longest path visits {} cells", path.len());
        let display_path = PathDisplay::new(&path);
        format!("{}", GridRender::new(&maze_grid, &display_path))
    } else {
        format!("{}", maze_grid)
    };

    if args.flag_text_out.is_empty() {
        print!("{}", rendering);
    } else {
        write_text_to_file(&rendering, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Off};
    simplelog::TermLogger::init(
        if verbose { Debug } else { Info },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> std::io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    let vertices_count = maze_grid.size();
    let edges_count = maze_grid.links_count();
    graph_data.push_str(&format!("{} {}\n", vertices_count, edges_count));

    for (src, dst) in maze_grid.iter_links() {
        let indices = (maze_grid.grid_coordinate_to_index(src),
                       maze_grid.grid_coordinate_to_index(dst));
        if let (Some(index_a), Some(index_b)) = indices {
            graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
        }
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
