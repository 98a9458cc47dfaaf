//! HTTP request handlers.

pub(crate) mod entries;
pub(crate) mod search;
