pub mod dyn_prog;
pub mod exhaustive;
pub mod experiment;
pub mod grid;
pub mod path;
