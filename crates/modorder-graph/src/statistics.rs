use serde::{Deserialize, Serialize};

/// Basic statistics about a scanned project, useful for logging.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphStatistics {
    pub file_count: usize,
    pub module_count: usize,
    pub edge_count: usize,
    pub external_reference_count: usize,
    pub duplicate_definition_count: usize,
}

impl GraphStatistics {
    pub fn new(
        file_count: usize,
        module_count: usize,
        edge_count: usize,
        external_reference_count: usize,
        duplicate_definition_count: usize,
    ) -> Self {
        Self {
            file_count,
            module_count,
            edge_count,
            external_reference_count,
            duplicate_definition_count,
        }
    }
}
