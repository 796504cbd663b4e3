pub mod dictionary;
pub mod indexer;
pub mod inverted;
pub mod posting;
pub mod registry;
pub mod stats;
pub mod store;
