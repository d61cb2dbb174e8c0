use super::constants::{DEFAULT_CENTER_BONUS, DEFAULT_DEPTH};

/// Tunable knobs of the bot's search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    /// Plies to look ahead
    pub depth: u32,
    /// Score for each piece standing in the central 4x4 block
    pub center_bonus: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            center_bonus: DEFAULT_CENTER_BONUS,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Self::default()
        }
    }
}
