//! memo: append, list and delete timestamped notes kept in a JSON file.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
