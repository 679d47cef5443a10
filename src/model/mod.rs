pub mod api;
pub mod attraction;
pub mod favorite;
pub mod guide;
