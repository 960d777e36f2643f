//! Commands invoked by the front end.

pub mod generator;
