mod category;
mod example;
mod formula;
mod topic;

pub use category::*;
pub use example::*;
pub use formula::*;
pub use topic::*;
