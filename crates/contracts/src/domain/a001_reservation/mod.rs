pub mod aggregate;
pub mod receipt;
