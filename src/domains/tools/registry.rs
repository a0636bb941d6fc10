//! Tool Registry - central listing of all tools.
//!
//! This module is the single source of truth for tool names and metadata.
//! The router builds its routes from the same definitions; a parity test in
//! `router.rs` keeps the two in sync.

use rmcp::model::Tool;

use super::definitions::{
    NftOwnersTool, TrendingCollectionsTool, UserCollectionsTool, UserTotalValueTool,
};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            NftOwnersTool::NAME,
            TrendingCollectionsTool::NAME,
            UserCollectionsTool::NAME,
            UserTotalValueTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            NftOwnersTool::to_tool(),
            TrendingCollectionsTool::to_tool(),
            UserCollectionsTool::to_tool(),
            UserTotalValueTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"get-nft-owners"));
        assert!(names.contains(&"get-top-selling-collections"));
        assert!(names.contains(&"get-user-collections"));
        assert!(names.contains(&"get-user-total-value"));
    }

    #[test]
    fn test_registry_metadata_has_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some());
        }
    }
}
