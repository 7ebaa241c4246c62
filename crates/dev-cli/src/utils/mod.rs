pub mod branch;
pub mod browser;
