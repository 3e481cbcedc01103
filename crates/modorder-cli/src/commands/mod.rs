//! Command implementations for the modorder CLI.
//!
//! - [`order`] - scan sources and print the build order

pub mod order;

pub use order::execute as order_execute;
