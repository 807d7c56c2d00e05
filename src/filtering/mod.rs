// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These predicates are used by the discovery stage (hidden names) and by the pipeline's optional recency pass. They are exposed publicly to
//! allow for their use in other contexts.

mod hidden;
mod recency;

pub use hidden::{has_hidden_file_name, is_hidden_name};
pub use recency::{
    days_since_modified, is_recently_modified, is_recently_modified_at, modification_age,
};
