pub mod emit;
pub mod format;
pub mod fs;
pub mod scan;
