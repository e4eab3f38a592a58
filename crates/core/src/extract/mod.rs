//! Declaration metadata extraction
//!
//! Recovers the capability contract of a user GUI declaration: which
//! lifecycle hooks it implements and the schema of its replicated state.

mod gui;
mod members;
mod state;

pub use gui::{classify_hooks, extract_gui_info};
pub use members::{Members, collect_members};
pub use state::{STATE_PROPERTY, kind_for_type, parse_state_schema};
