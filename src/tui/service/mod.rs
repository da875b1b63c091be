pub mod fetch;
pub mod navigator;
