use crate::errors::GoalieError;

/// Points at which notifications fire. Counts below the lowest are ignored.
pub const DEFAULT_THRESHOLDS: [u64; 8] = [20, 50, 100, 150, 200, 250, 500, 1000];

/// Greatest threshold strictly below `count`, or 0 when none qualify.
pub fn highest_crossed(thresholds: &[u64], count: u64) -> u64 {
    thresholds
        .iter()
        .copied()
        .filter(|&level| level < count)
        .max()
        .unwrap_or(0)
}

/// Validated, immutable set of severity levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTable {
    levels: Vec<u64>,
}

impl ThresholdTable {
    /// Levels must be positive and strictly ascending.
    pub fn new(levels: Vec<u64>) -> Result<Self, GoalieError> {
        if levels.is_empty() {
            return Err(GoalieError::Config("thresholds must not be empty".into()));
        }
        if levels.contains(&0) {
            return Err(GoalieError::Config("thresholds must be positive".into()));
        }
        if let Some(pair) = levels.windows(2).find(|w| w[0] >= w[1]) {
            return Err(GoalieError::Config(format!(
                "thresholds must be strictly ascending: {} is followed by {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[u64] {
        &self.levels
    }

    pub fn highest_crossed(&self, count: u64) -> u64 {
        highest_crossed(&self.levels, count)
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self { levels: DEFAULT_THRESHOLDS.to_vec() }
    }
}
