//! Preference-capture service for the show recommendation quiz.
//!
//! The quiz collects genres, a length preference, and three reference shows,
//! then hands the finished profile to the recommendation stage through the
//! persistence boundary.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod workflow;
