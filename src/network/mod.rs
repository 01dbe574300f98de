//! Network layer for talking to search backends

mod client;
mod user_agent;

pub use client::{HttpClient, HttpResponse};
pub use user_agent::generate_user_agent;
