/// Scratch storage for the two match passes.
///
/// A session is reused across calls to avoid reallocating position buffers
/// for every query, and borrowed mutably for the duration of one match, so
/// it can never be shared by two matches at once. Batch runs keep one
/// session per worker.
#[derive(Debug, Default)]
pub struct MatchSession {
    pub(crate) simple: Vec<usize>,
    pub(crate) strict: Vec<usize>,
}

impl MatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes both buffers for queries up to `query_len` chars.
    pub fn with_capacity(query_len: usize) -> Self {
        Self {
            simple: Vec::with_capacity(query_len),
            strict: Vec::with_capacity(query_len),
        }
    }
}
