//! Core application modules
//!
//! This module contains configuration, constants, logging, the provider
//! layer and the recommendation requester.

pub mod config;
pub mod constants;
pub mod logging;
pub mod provider;
pub mod providers;
pub mod recommender;

#[cfg(test)]
pub(crate) mod test_support;
