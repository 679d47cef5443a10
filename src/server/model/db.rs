//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so service and controller signatures don't import from the
//! generated `entity` crate directly.

/// A registered visitor account. Owns comments and favorites.
pub type UserModel = entity::user::Model;

/// A city, the parent of zero or more attractions.
pub type CityModel = entity::city::Model;

/// A point-of-interest belonging to one city. `rating` is derived from
/// comment ratings; `popularity` is a view counter.
pub type AttractionModel = entity::attraction::Model;

/// An image or video attached to an attraction.
pub type MediaModel = entity::media::Model;

/// A visitor comment with a 1-5 rating, linked to one user and one attraction.
pub type CommentModel = entity::comment::Model;

/// A user-to-attraction bookmark, unique per (user, attraction) pair.
pub type FavoriteModel = entity::favorite::Model;
