pub mod nutrition;
pub mod weather;
