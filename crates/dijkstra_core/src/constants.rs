/// Edge weight type
pub type Weight = f64;

/// Sentinel distance for nodes not yet reached from the source.
pub const UNREACHED: Weight = Weight::INFINITY;
