//! Currency service tests

mod mocks;
