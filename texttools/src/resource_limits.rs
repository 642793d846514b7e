/// Resource limits enforced at the toolbox boundary
///
/// The tools themselves run in time linear in their input; these limits
/// bound memory and CPU per call and the size of history listings.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum input size in bytes
    /// Real usage: ~10KB, Limit: 1MB (100x)
    pub max_input_bytes: usize,

    /// Maximum number of records returned by a history listing
    pub max_history_records: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024, // 1 MB
            max_history_records: 1000,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }
}
