//! Tests for the post quota policy

mod mocks;
mod service_tests;
