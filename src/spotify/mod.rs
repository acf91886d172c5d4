//! # Spotify Integration Module
//!
//! Client for the two Spotify surfaces this service touches:
//!
//! - [`auth`] - the Accounts service: authorization URL construction and
//!   the authorization-code token exchange (client credentials via HTTP
//!   Basic auth).
//! - [`playlist`] - the Web API: current-user lookup, playlist listing and
//!   playlist track listing.
//!
//! All calls are one-shot `reqwest` requests; tokens are supplied by the
//! caller on every request and never stored.

pub mod auth;
pub mod playlist;
