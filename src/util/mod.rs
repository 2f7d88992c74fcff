pub mod pair;
pub mod status;

pub use pair::Pair;
pub use status::{Code, Result, Status};
