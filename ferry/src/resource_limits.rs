/// Resource limits that bound puzzle loading and search
///
/// Breadth-first search over river states grows with the number of
/// distinguishable configurations, so the solver stops with
/// `ResourceLimitExceeded` instead of exhausting memory or time.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum size of a puzzle file in bytes
    /// Real usage: ~1KB, Limit: 1MB
    pub max_file_size_bytes: usize,

    /// Maximum nesting depth of a relation expression
    /// Real usage: ~3 levels, Limit: 64
    pub max_relation_depth: usize,

    /// Maximum number of passenger instances in one puzzle
    /// Real usage: ~8, Limit: 64
    pub max_passengers: usize,

    /// Maximum number of distinct states the solver may expand
    /// Real usage: a few hundred, Limit: 1M
    pub max_visited_states: usize,

    /// Maximum search time in milliseconds
    pub max_search_time_ms: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 1024 * 1024, // 1 MB
            max_relation_depth: 64,
            max_passengers: 64,
            max_visited_states: 1_000_000,
            max_search_time_ms: 30_000, // 30 seconds
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
