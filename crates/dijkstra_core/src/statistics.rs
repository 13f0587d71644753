use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Counters for a single solve, reset by [`init`](SearchStats::init)
/// and sealed by [`finish`](SearchStats::finish).
#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed in {:?}",
            self.nodes_settled, self.edges_relaxed, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_resets_counters() {
        let mut stats = SearchStats::default();
        stats.nodes_settled = 10;
        stats.edges_relaxed = 20;
        stats.duration = Some(Duration::from_millis(1));

        stats.init();
        assert_eq!(stats.nodes_settled, 0);
        assert_eq!(stats.edges_relaxed, 0);
        assert!(stats.duration.is_none());

        stats.finish();
        assert!(stats.duration.is_some());
    }
}
