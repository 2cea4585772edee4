//! Profile service tests

mod service_tests;
