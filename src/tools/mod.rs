// Shared types
pub mod types;

// Pipeline tools
pub mod adapter;
pub mod fetch;
pub mod identity;
pub mod normalize;
pub mod paginate;

// Post-processing
pub mod analyze;
pub mod export;
