//! Review service tests

mod service_tests;
