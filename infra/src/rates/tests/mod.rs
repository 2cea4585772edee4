//! Exchange-rate client tests
