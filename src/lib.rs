pub mod config;
pub mod consts;
pub mod distance;
pub mod error;
pub mod expander;
pub mod grid;
pub mod search;
pub mod tabula;
// cmd and reports are binary modules, declared in main.rs.
