pub mod form;
pub mod success;
