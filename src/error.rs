use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Invalid image dimensions: {0}")]
    Dimension(#[from] DimensionError),

    #[error("Invalid image shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Row {row} has zero or non-finite mean intensity")]
    DegenerateRow { row: usize },

    #[error("Image has no intensity range after gradient removal")]
    DegenerateRange,

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// An image axis with no samples on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("image must have at least one row")]
    EmptyRows,

    #[error("image must have at least one column")]
    EmptyColumns,
}

impl DimensionError {
    /// Check a `(rows, cols)` shape, reporting the row axis first.
    pub fn check(rows: usize, cols: usize) -> Result<(), Self> {
        if rows == 0 {
            Err(Self::EmptyRows)
        } else if cols == 0 {
            Err(Self::EmptyColumns)
        } else {
            Ok(())
        }
    }
}
