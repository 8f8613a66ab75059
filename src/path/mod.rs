mod generic_path;
pub use generic_path::*;

/// The Cost of a Path: the number of unit steps it takes
pub type Cost = usize;
