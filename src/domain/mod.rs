pub mod assemble;
pub mod weather;
