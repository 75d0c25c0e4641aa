//! API data models
//!
//! This module contains the wire structures for the chat-completion provider.

pub mod openai;
