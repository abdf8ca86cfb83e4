pub mod finding;
pub mod report;
pub mod span;

pub use finding::*;
pub use report::*;
pub use span::*;
