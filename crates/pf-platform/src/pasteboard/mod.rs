mod reader;

pub use reader::SystemPasteboard;
