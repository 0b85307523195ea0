//! Smart-paste decision types.
mod outcome;

pub use outcome::{ContentKind, SkipReason, SmartPasteOutcome};
