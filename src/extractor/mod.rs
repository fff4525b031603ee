mod errors;
mod pagination;

use std::time::Duration;

pub use errors::ExtractError;
pub use pagination::Extractor;

/// Optional ceilings on a run. The default runs until the feed reports no further pages.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Limits {
    pub max_pages: Option<usize>,
    pub deadline: Option<Duration>
}
