//! HTTP handlers for the relay service.

pub mod chatbot;
pub mod health;
