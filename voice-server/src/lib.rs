//! Voice-driven bus transit assistant server.
//!
//! A web application that answers spoken questions like "Majestic se KR
//! Market tak" with bus routes and a spoken reply, across six Indian
//! languages.

pub mod cache;
pub mod compose;
pub mod directions;
pub mod domain;
pub mod genai;
pub mod geocode;
pub mod interpret;
pub mod session;
pub mod speech;
pub mod web;
