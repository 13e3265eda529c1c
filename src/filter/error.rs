//! Filter-specific error types

use thiserror::Error;

/// Errors raised while parsing filter input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Selector text is neither a keyword nor a folder id
    #[error("Invalid folder selector '{0}': expected 'all', 'uncategorized' or a folder id")]
    InvalidSelector(String),
}
