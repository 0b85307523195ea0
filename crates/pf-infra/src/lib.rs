//! # pf-infra
//!
//! Infrastructure adapters for PasteFile: the file-backed preferences
//! repository, the atomic file sink, and the system clock.

pub mod fs;
pub mod settings;
pub mod time;

pub use fs::AtomicFileSink;
pub use settings::FilePreferencesRepository;
pub use time::SystemClock;
