//! Server application core modules.
//!
//! This module contains all server-side functionality for the Wayfarer application, including
//! HTTP routing, database operations, the attraction/comment/favorite content services, and the
//! AI guide narration client. It provides the complete backend infrastructure for browsing
//! cities and attractions, submitting comments and ratings, and favoriting attractions.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
