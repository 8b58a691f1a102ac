pub mod scan;

// Re-export key operations for easier usage
pub use scan::{
    ScanError, Span, locate, longest_bounded, longest_bounded_span, numeric_prefix, occurrences,
    substr,
};
