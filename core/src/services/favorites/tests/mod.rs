//! Favorites service tests

mod service_tests;
