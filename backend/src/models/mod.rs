pub mod macros;
pub mod school;

pub use school::*;
