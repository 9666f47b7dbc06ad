//! Error handling utilities for MCP server

use rmcp::ErrorData;
use waymark_core::WaymarkError;

/// Helper to convert store errors to MCP errors
pub fn to_mcp_error(message: &str, error: &WaymarkError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// MCP error for a saved roadmap that does not exist
pub fn not_found(id: u64) -> ErrorData {
    to_mcp_error("Lookup failed", &WaymarkError::RoadmapNotFound { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = not_found(12);
        assert_eq!(error.message, "Lookup failed: Roadmap with ID 12 not found");
    }
}
