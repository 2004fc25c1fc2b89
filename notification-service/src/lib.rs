//! notification-service: renders employee-system notifications and delivers
//! them by email, or simulates delivery when SMTP is not configured.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
