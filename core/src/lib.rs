//! Small typed utilities, async delay helpers and a GitHub organization
//! client.
//!
//! # Overview
//! - `annotations`: independent pure helpers over numbers, strings,
//!   sequences and mappings.
//! - `nested`, `memo`, `http`: the building blocks of the client (key-path
//!   lookup, single-slot memoization, JSON fetch over a pluggable transport).
//! - `client`: `GithubOrgClient`, listing an organization's public
//!   repositories with an optional license filter.
//! - `delay` and `stream`: random sleeps on tokio, fanned out concurrently,
//!   and a random-number stream collected into a `Vec`.
//!
//! # Design
//! - The HTTP layer is host-does-IO: `get_json` builds a plain-data request
//!   and hands it to a `Transport`. `UreqTransport` talks to the network;
//!   tests swap in an in-memory transport.
//! - Each client fetches its organization and repository listing at most
//!   once, through `Memoized`.
//! - None of the modules share state.

pub mod annotations;
pub mod client;
pub mod delay;
pub mod error;
pub mod http;
pub mod memo;
pub mod nested;
pub mod stream;

pub use client::{GithubOrgClient, DEFAULT_BASE_URL};
pub use error::{ApiError, DelayError, MissingKey};
pub use http::{get_json, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use memo::Memoized;
pub use nested::access_nested_map;
