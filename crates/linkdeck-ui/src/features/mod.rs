//! Feature slices. Each slice keeps its HTTP calls, state and views together.
pub mod archive;
pub mod links;
