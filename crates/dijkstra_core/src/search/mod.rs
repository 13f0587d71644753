use crate::error::{Error, Result};
use crate::graph::NodeIndex;

pub mod dijkstra;
pub mod frontier;
pub mod path_result;

/// Walks predecessor links backward from `target` to `source` and
/// returns the path in source-to-target order.
///
/// Fails with [`Error::Unreachable`] if a node without a predecessor is
/// hit before `source`, instead of returning a silently truncated path.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    predecessor: &[Option<NodeIndex>],
) -> Result<Vec<NodeIndex>> {
    let mut path = vec![target];

    let mut current = target;
    while current != source {
        match predecessor[current.index()] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Err(Error::Unreachable(target)),
        }
    }
    path.reverse();
    Ok(path)
}
