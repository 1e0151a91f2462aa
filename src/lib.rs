pub mod arch;
pub mod config;
pub mod error;
pub mod log_format;
pub mod logic;
pub mod palette;
pub mod patterns;
pub mod probe;
pub mod text;
pub mod timing;
pub mod utils;

pub use arch::{arch_from_machine, detect_arch, Arch};
pub use error::{Result, UtilsError};
pub use log_format::{BaseFormatter, LogFormatter, LogRecord, Severity, TaggedFormatter};
pub use logic::{check_empty, Fields, Logic};
pub use palette::Palette;
pub use patterns::{group_match, PatternGroup};
pub use probe::test_program;
pub use text::{join, laundry_list, split_nonempty, DEFAULT_SEPARATOR};
pub use timing::{time_this, timed};
