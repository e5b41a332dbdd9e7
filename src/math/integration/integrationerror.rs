use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationError
// ─────────────────────────────────────────────────────────────────────────────
//
// Shared by the 1D and 2D Simpson routines. Every variant is raised before
// any accumulation starts, so no partial value ever escapes.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// Subinterval count is not an even integer >= 2.
    #[error("number of subintervals should be even and at least 2 (n={0})")]
    InvalidSubintervals(i64),

    #[error("sample grid has {0} row(s); it must have at least 2")]
    InsufficientRows(usize),

    #[error("sample grid has {0} column(s); it must have at least 2")]
    InsufficientColumns(usize),

    /// Row `row` does not have the length of row 0.
    #[error("sample grid is not rectangular: row {row} has {found} value(s), expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize
    }
}
