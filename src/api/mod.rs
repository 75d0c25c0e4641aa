//! HTTP surface
//!
//! This module contains the axum router, the server-rendered page and the
//! presentation model shared by both.

pub mod endpoints;
pub mod page;
pub mod view;
