//! # pf-app
//!
//! Application layer for PasteFile: use cases orchestrating the domain
//! ports. No OS or filesystem specifics live here.

pub mod usecases;

pub use usecases::smart_paste::SmartPaste;
