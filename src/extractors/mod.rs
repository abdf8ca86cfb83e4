pub mod financial;
pub mod named;
pub mod obligations;
pub mod profanity;

pub use financial::*;
pub use named::*;
pub use obligations::*;
pub use profanity::*;
