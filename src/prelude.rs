//! The `repo-code-packager` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions.
//!
//! # Example
//!
//! ```
//! use repo_code_packager::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().input_path(".").dirs_only(true).build()?;
//! assert!(config.output.dirs_only);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, OutputDestination, OutputStyle};
pub use crate::core_types::{ContentBlock, PackagedContext, RecentChange, ReportData, Totals};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_hidden_name, is_recently_modified};
pub use crate::git::{git_info_text, GitInfo};
pub use crate::output::{build_summary, JsonFormatter, MarkdownFormatter, ReportFormatter};
pub use crate::processing::{aggregate_contents, guess_language};
pub use crate::{build_report, discover, discover_files, execute, render_tree, run};
