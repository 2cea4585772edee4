//! Review repository module.

mod r#trait;
pub use r#trait::{ReviewBatch, ReviewRepository};

mod mock;
pub use mock::MockReviewRepository;
