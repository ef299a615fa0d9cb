pub mod args;
pub mod caller;
pub mod errors;
pub mod logger;
mod macros;

pub use caller::{CALLER_FRAME_OFFSET, CallerInfo, CallerLocator, StackCapture};
pub use logger::SmartLog;
