pub mod consts;
pub mod file;
pub mod interface;
pub mod memory;
#[cfg(test)]
pub mod tests;
