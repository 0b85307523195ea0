//! # pf-platform
//!
//! OS adapters for PasteFile: the live pasteboard, Finder folder
//! scripting, user-directory lookup, alert dialogs, and the global
//! hotkey listener.

pub mod alerts;
pub mod finder;
pub mod hotkey;
pub mod pasteboard;
pub mod user_dirs;

pub use alerts::DialogAlerts;
pub use user_dirs::StandardUserDirs;
pub use finder::FinderFolderResolver;
pub use pasteboard::SystemPasteboard;
