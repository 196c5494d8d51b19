/// Board configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Number of rows and columns of the square board.
    pub dimension: usize,
}

impl BoardConfig {
    /// Standard playing field: 8 rows of 8 bubbles.
    pub const DEFAULT_DIMENSION: usize = 8;

    pub fn new() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
        }
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
