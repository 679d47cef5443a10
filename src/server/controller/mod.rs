pub mod attraction;
pub mod city;
pub mod comment;
pub mod favorite;
pub mod guide;
