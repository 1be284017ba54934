//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Key paths for diagnostics                    |
//! | `handle` | Current config snapshot, swapped on reload   |
//! | `status` | Experimental and deprecated keys             |

mod error;
mod field;
mod handle;
mod status;

pub use error::{ConfigDiagnostics, ConfigError, Level};
pub use field::FieldPath;
pub use handle::{cfg, init_config, reload_config};
pub use status::{FieldStatus, check_field_status, check_section_status};
