//! # YouTube Integration Module
//!
//! Client for Google OAuth and the three YouTube Data API resources the
//! service uses:
//!
//! - [`auth`] - authorization URL construction and the authorization-code
//!   token exchange against Google's OAuth endpoint.
//! - [`playlist`] - playlist creation and playlist-item insertion.
//! - [`search`] - video search and batched statistics lookup.
//!
//! Every operation takes the caller's bearer token; nothing is cached
//! between requests.

pub mod auth;
pub mod playlist;
pub mod search;
