//! Shared wire and domain types for the supplier front-end.

pub mod domain;
