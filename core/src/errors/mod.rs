mod locate_error;
mod resolve_error;

pub use locate_error::LocateError;
pub use resolve_error::ResolveError;
