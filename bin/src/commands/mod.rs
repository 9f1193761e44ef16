//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod serve;
pub(crate) mod table;
