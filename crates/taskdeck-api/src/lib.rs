//! # taskdeck-api
//!
//! Authenticated HTTP client for the remote task API.
//!
//! [`ApiClient`] issues the auth, task, and subtask requests and maps
//! responses to typed successes or [`ApiError`] failures. Authenticated
//! calls read the bearer token fresh from the shared
//! [`SessionStore`](taskdeck_auth::SessionStore) before each request; a
//! missing token fails the call without touching the network.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;
pub mod types;

pub use client::{ApiClient, ApiConfig};
pub use errors::ApiError;
pub use types::{
    Credentials, LoginResponse, RegisterResponse, SubtaskCreate, SubtaskUpdate, TaskCreate,
    TaskUpdate,
};
