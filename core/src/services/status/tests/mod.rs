//! Tests for the status service

mod service_tests;
