// Course Console - API client library for the course management platform

pub mod auth;
pub mod calendar;
pub mod config;
pub mod dates;
pub mod error;
pub mod guards;
pub mod http_client;
pub mod models;
pub mod services;
