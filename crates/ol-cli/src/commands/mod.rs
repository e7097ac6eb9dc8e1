//! CLI command implementations

pub(crate) mod categories;
pub(crate) mod common;
pub(crate) mod geo;
pub(crate) mod info;
pub(crate) mod orders;
pub(crate) mod payments;
pub(crate) mod rfm;
pub(crate) mod summary;
