//! Data models for the relay and Gemini APIs.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound `/ask-gemini` API (`relay`)
//! - The upstream Google Gemini `generateContent` API (`gemini`)

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;
pub mod relay;

pub use gemini::{GenerateContentRequest, GenerateContentResponse, Content, InlineData, Part};
pub use relay::{AskRequest, AskResponse};
