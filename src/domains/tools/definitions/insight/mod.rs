//! ThirdWeb Insight API tools.

pub mod owners;

pub use owners::{NftOwnersParams, NftOwnersTool};
