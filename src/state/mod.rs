//! Application state module

mod forms;
mod lead;
mod notification;

pub use forms::*;
pub use lead::*;
pub use notification::*;
