use std::error::Error;
use std::fmt;

/// Custom error type for figure construction failures
#[derive(Debug)]
pub enum PlotError {
    Render(String),      // Backend or draw failure, stringified
    MissingDataset(usize), // Row index lacking the facet column value
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotError::Render(msg) => write!(f, "Failed to render figure: {}", msg),
            PlotError::MissingDataset(row) => write!(
                f,
                "Row {} has no dataset value; faceted plots require one per row",
                row
            ),
        }
    }
}

impl Error for PlotError {}
