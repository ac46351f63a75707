//! Application services.

mod alerts;
mod config;
mod library;
mod loading;
mod notifications;

pub use alerts::*;
pub use config::*;
pub use library::*;
pub use loading::*;
pub use notifications::*;
