pub mod bounded;
pub mod locate;
pub mod numeric;
pub mod occurs;
pub mod span;
pub mod substr;

pub use bounded::{longest_bounded, longest_bounded_span};
pub use locate::locate;
pub use numeric::numeric_prefix;
pub use occurs::occurrences;
pub use span::{Span, preview};
pub use substr::substr;

/// Errors from the position-addressed lookups.
///
/// The span scan and the counting helpers never fail; absence of a match is
/// an ordinary empty or zero result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A substring was requested starting past the end of the text.
    #[error("start position {start} is past the end of the text (length {len})")]
    StartPastEnd { start: usize, len: usize },
    /// An occurrence was requested that the text does not contain.
    #[error("occurrence {wanted} of {pattern:?} not found ({found} present)")]
    OccurrenceNotFound {
        pattern: String,
        wanted: usize,
        found: usize,
    },
}
