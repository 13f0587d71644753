use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dijkstra_core::prelude::*;

/// Shortest-path demo on the classic six-node example graph.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start node index
    #[arg(default_value_t = 0)]
    start: usize,

    /// End node index
    #[arg(default_value_t = 4)]
    end: usize,

    /// Print every relaxation step
    #[arg(long)]
    trace: bool,

    /// Abort the solve after this many milliseconds
    #[arg(long, value_name = "ms")]
    deadline_ms: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = Graph::from_flat(
        6,
        &[
            0, 1, 7, //
            0, 5, 14, //
            0, 2, 9, //
            1, 2, 10, //
            1, 3, 15, //
            2, 3, 11, //
            2, 5, 2, //
            3, 4, 6, //
            4, 5, 9, //
        ],
    )?;

    let start = graph.node_at(cli.start)?;
    let end = graph.node_at(cli.end)?;

    let mut solver = Dijkstra::new(&graph);
    if let Some(ms) = cli.deadline_ms {
        solver = solver.with_deadline(Duration::from_millis(ms));
    }

    let result = if cli.trace {
        solver.solve_traced(start, end, |event| {
            println!(
                "iteration {}: from {} to {} via edge weight {}",
                event.iteration, event.current, event.neighbor, event.edge.weight
            );
        })?
    } else {
        solver.solve(start, end)?
    };

    let path = result
        .path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("dijkstra path: {} (weight {})", path, result.weight);

    println!("min weight paths to each node:");
    for (node, weight) in graph.nodes().zip(result.distances.iter()) {
        if *weight == UNREACHED {
            println!("node: {}, weight: ∞", node.name);
        } else {
            println!("node: {}, weight: {}", node.name, weight);
        }
    }
    println!("{}", solver.stats);

    Ok(())
}
