pub mod regex_pii;
pub mod statistical;

pub use regex_pii::*;
pub use statistical::*;
