//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by the
//! upstream API they consume. Each tool is defined in its own file.

pub mod common;
pub mod insight;
pub mod magiceden;

pub use insight::{NftOwnersParams, NftOwnersTool};
pub use magiceden::{
    TrendingCollectionsParams, TrendingCollectionsTool, UserCollectionsParams,
    UserCollectionsTool, UserTotalValueParams, UserTotalValueTool,
};
