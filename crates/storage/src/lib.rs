#![forbid(unsafe_code)]

mod mapping;
pub mod repository;
pub mod sqlite;

pub use mapping::{PROGRESS_KEY, decode_progress, encode_progress};
