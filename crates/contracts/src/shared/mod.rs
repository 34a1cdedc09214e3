pub mod serde_utils;
