pub mod categories;
pub mod examples;
pub mod formulas;
pub mod search;
pub mod slug;
pub mod topics;
