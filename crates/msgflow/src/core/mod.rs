//! Core abstractions for message-flow processing
//!
//! This module defines the parser/renderer seams, the shared line canvas,
//! text helpers, errors and logging used by the pipeline in [`crate::flow`].

mod canvas;
mod error;
pub mod logging;
mod parser;
mod renderer;
mod text;

pub use canvas::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use text::*;
