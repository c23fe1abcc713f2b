use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use nefasto::graph::report::{
    EdgeListing, PairListing, PathListing, TraversalListing, VertexListing,
};
use nefasto::{grid, AntennaGraph, AntennaList, GraphConfig, InterferenceMap};

#[derive(Parser)]
#[command(name = "nefasto")]
#[command(about = "Antenna network graph queries", long_about = None)]
struct Cli {
    /// Map file: one line per row, `.` for an empty cell
    map: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text listings
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Drop the antenna at ROW COL before listing antennas, nefastos or the matrix
    #[arg(long, global = true, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    remove: Option<Vec<i32>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Start {
    /// Start vertex index
    #[arg(required_unless_present = "at", conflicts_with = "at")]
    index: Option<usize>,

    /// Start at the vertex on this row and column
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    at: Option<Vec<i32>>,
}

#[derive(Subcommand)]
enum Commands {
    /// List vertices
    Vertices,
    /// List edges grouped by source vertex
    Edges,
    /// Depth-first traversal
    Dfs(Start),
    /// Breadth-first traversal
    Bfs(Start),
    /// Enumerate simple paths between two vertices
    Paths {
        /// Origin vertex index
        from: usize,
        /// Destination vertex index
        to: usize,
        /// Stop after this many paths
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Antenna pairs of two frequencies within a distance
    Close {
        /// First frequency symbol
        a: char,
        /// Second frequency symbol
        b: char,
        /// Maximum Euclidean distance
        max_distance: f64,
    },
    /// List the antennas as loaded, newest first
    Antennas,
    /// Interference points
    Nefastos,
    /// Draw antennas and interference points
    Matrix,
    /// Graph statistics
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GraphConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    let graph = AntennaGraph::from_path(&cli.map, config)
        .with_context(|| format!("loading map {}", cli.map.display()))?;

    run(&cli, &graph)
}

fn run(cli: &Cli, graph: &AntennaGraph) -> Result<()> {
    match &cli.command {
        Commands::Vertices => {
            let rows: Vec<_> = graph
                .vertices()
                .iter()
                .enumerate()
                .map(|(index, v)| json!({ "index": index, "antenna": v.antenna() }))
                .collect();
            emit(cli.json, &rows, VertexListing(graph))
        }
        Commands::Edges => {
            let rows: Vec<_> = graph
                .vertices()
                .iter()
                .enumerate()
                .map(|(index, v)| json!({ "index": index, "neighbors": v.neighbors() }))
                .collect();
            emit(cli.json, &rows, EdgeListing(graph))
        }
        Commands::Dfs(start) => {
            let order = graph.dfs(resolve_start(graph, start)?)?;
            emit_order(cli.json, graph, &order)
        }
        Commands::Bfs(start) => {
            let order = graph.bfs(resolve_start(graph, start)?)?;
            emit_order(cli.json, graph, &order)
        }
        Commands::Paths { from, to, limit } => {
            let paths: Vec<Vec<usize>> = graph
                .all_paths(*from, *to)?
                .take(limit.unwrap_or(usize::MAX))
                .collect();
            let antennas: Vec<Vec<_>> = paths
                .iter()
                .map(|p| p.iter().map(|&i| graph.vertices()[i].antenna()).collect())
                .collect();
            emit(cli.json, &antennas, PathListing { graph, paths: &paths })
        }
        Commands::Close { a, b, max_distance } => {
            let pairs = graph.close_pairs(*a, *b, *max_distance);
            emit(cli.json, &pairs, PairListing { graph, pairs: &pairs })
        }
        Commands::Antennas => {
            let list = antenna_list(cli, graph.config())?;
            let antennas: Vec<_> = list.iter().collect();
            emit(cli.json, &antennas, &list)
        }
        Commands::Nefastos => {
            let points = antenna_list(cli, graph.config())?.interference_points();
            let text: String = points.iter().map(|p| format!("{p}\n")).collect();
            emit(cli.json, &points, text)
        }
        Commands::Matrix => {
            let list = antenna_list(cli, graph.config())?;
            let points = list.interference_points();
            match InterferenceMap::render(&list, &points) {
                Some(map) => {
                    let rows: Vec<String> = map.lines().collect();
                    emit(cli.json, &rows, map)
                }
                None => {
                    tracing::warn!("nothing to draw, or the map is too large");
                    Ok(())
                }
            }
        }
        Commands::Stats => {
            let stats = graph.statistics();
            let text = format!(
                "vertices: {}\nedges: {}\ncomponents: {}\ndegree min/median/max: {}/{}/{}\naverage degree: {:.2}\n",
                stats.vertex_count,
                stats.edge_count,
                stats.component_count,
                stats.min_degree,
                stats.median_degree,
                stats.max_degree,
                stats.average_degree,
            );
            emit(cli.json, &stats, text)
        }
    }
}

/// The map's antennas, newest first, minus the one named by `--remove`.
fn antenna_list(cli: &Cli, config: &GraphConfig) -> Result<AntennaList> {
    let text = grid::read_grid(&cli.map).with_context(|| format!("reading map {}", cli.map.display()))?;
    Ok(antennas_without(&text, config, cli.remove.as_deref()))
}

fn antennas_without(text: &str, config: &GraphConfig, remove: Option<&[i32]>) -> AntennaList {
    let mut list = AntennaList::from_grid(text, config);
    if let Some(&[row, col]) = remove {
        if list.remove(row, col).is_none() {
            tracing::warn!(row, col, "no antenna to remove");
        }
    }
    list
}

fn resolve_start(graph: &AntennaGraph, start: &Start) -> Result<usize> {
    match (start.index, start.at.as_deref()) {
        (_, Some(&[row, col])) => graph
            .find_index_by_coordinates(row, col)
            .with_context(|| format!("no antenna at ({row}, {col})")),
        (Some(index), _) => Ok(index),
        _ => anyhow::bail!("a start index or --at ROW COL is required"),
    }
}

fn emit_order(json: bool, graph: &AntennaGraph, order: &[usize]) -> Result<()> {
    let antennas: Vec<_> = order.iter().map(|&i| graph.vertices()[i].antenna()).collect();
    emit(json, &antennas, TraversalListing { graph, order })
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl Display) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nefasto::Position;

    const MAP: &str = "A...\n..A.\n....\n....";

    #[test]
    fn test_removal_feeds_interference_and_matrix() {
        let config = GraphConfig::default();

        let full = antennas_without(MAP, &config, None);
        assert_eq!(full.len(), 2);
        assert_eq!(full.interference_points().len(), 2);

        let reduced = antennas_without(MAP, &config, Some(&[1, 2]));
        assert_eq!(reduced.len(), 1);
        assert!(reduced.interference_points().is_empty());

        let map = InterferenceMap::render(&reduced, &reduced.interference_points()).unwrap();
        assert_eq!(map.to_string(), "A\n");
        assert_eq!(map.get(Position::new(1, 2)), None);
    }

    #[test]
    fn test_removing_missing_antenna_keeps_list() {
        let list = antennas_without(MAP, &GraphConfig::default(), Some(&[3, 3]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["nefasto", "map.txt", "nefastos", "--remove", "1", "-2"]).unwrap();
        assert_eq!(cli.remove, Some(vec![1, -2]));
        assert!(matches!(cli.command, Commands::Nefastos));
    }
}
