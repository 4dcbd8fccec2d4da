pub mod distance;
pub mod search;
