//! anamnesis-assist
//!
//! Generative-AI assistance for the intake summary step: HOP follow-up
//! questions, a narrative history summary and a differential diagnosis list.
//!
//! The backend sits behind [`model::TextModel`]; [`model::BedrockModel`] is
//! the production implementation over the Bedrock Converse API.

pub mod error;
pub mod generate;
pub mod model;
pub mod parse;
pub mod prompts;
