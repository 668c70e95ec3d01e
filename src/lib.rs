pub mod canonical;
pub mod detect;
pub mod error;
pub mod fold;
pub mod math;
pub mod net;
pub mod session;
pub mod validate;

pub use error::{NetfoldError, Result};
