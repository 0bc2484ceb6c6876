//! # taskdeck-forms
//!
//! Form models for authentication: collect and validate user input, invoke
//! the API client, and hold the user-facing error/success messages a
//! rendering layer would display inline.
//!
//! Validation failures never reach the network. API failures set a
//! user-facing message and leave the typed error available to the caller.

#![deny(unsafe_code)]

pub mod errors;
pub mod login;
pub mod register;

pub use errors::FormError;
pub use login::LoginForm;
pub use register::RegisterForm;
