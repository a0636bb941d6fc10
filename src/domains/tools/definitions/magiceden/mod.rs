//! Magic Eden RTP API tools.

pub mod common;
pub mod total_value;
pub mod trending;
pub mod user_collections;

pub use total_value::{UserTotalValueParams, UserTotalValueTool};
pub use trending::{TrendingCollectionsParams, TrendingCollectionsTool};
pub use user_collections::{UserCollectionsParams, UserCollectionsTool};
