pub mod prelude;

pub mod attraction;
pub mod city;
pub mod comment;
pub mod favorite;
pub mod media;
pub mod user;
