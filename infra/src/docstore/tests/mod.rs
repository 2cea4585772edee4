//! Document store tests

mod client_tests;
