pub mod settings;
pub mod smart_paste;
