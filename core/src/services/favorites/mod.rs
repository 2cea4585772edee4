//! Favorites service module
//!
//! Maintains the set of listing ids a user has starred, persisted on the
//! user's profile document.

mod service;

#[cfg(test)]
mod tests;

pub use service::FavoritesService;
