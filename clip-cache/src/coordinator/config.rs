//! Coordinator tuning.

/// Queue depth above which a refill is skipped. Also the batch size requested.
pub const DEFAULT_LOW_WATER_MARK: usize = 10;

/// Configuration for [`ClipCoordinator`](super::ClipCoordinator).
///
/// # Example
///
/// ```
/// use clip_cache::coordinator::CoordinatorConfig;
///
/// let config = CoordinatorConfig::new().with_low_water_mark(4);
/// assert_eq!(config.low_water_mark(), 4);
/// assert_eq!(config.batch_size(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorConfig {
    low_water_mark: usize,
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the refill threshold. Values below 1 are raised to 1.
    pub fn with_low_water_mark(mut self, low_water_mark: usize) -> Self {
        self.low_water_mark = low_water_mark.max(1);
        self
    }

    /// A refill runs only while the queue holds at most this many clips.
    pub fn low_water_mark(&self) -> usize {
        self.low_water_mark
    }

    /// Number of clips requested per refill.
    pub fn batch_size(&self) -> usize {
        self.low_water_mark
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            low_water_mark: DEFAULT_LOW_WATER_MARK,
        }
    }
}
