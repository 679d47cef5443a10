pub use super::attraction::Entity as Attraction;
pub use super::city::Entity as City;
pub use super::comment::Entity as Comment;
pub use super::favorite::Entity as Favorite;
pub use super::media::Entity as Media;
pub use super::user::Entity as User;
