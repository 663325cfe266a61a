#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod model;
pub mod scheduler;
pub mod time;

pub use error::Error;
pub use generator::{GeneratedQuestion, QuestionGenerator};
pub use scheduler::ReviewScheduler;
pub use time::Clock;
