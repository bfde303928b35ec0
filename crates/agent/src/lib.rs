//! Conversational runtime for EduVerse.
//!
//! This crate is the glue between a front-end and the deterministic core:
//! - **Intent classification** (`conversation`) - keyword tables in strict
//!   priority order map raw text to a discrete `Intent`
//! - **Slot extraction** (`conversation`) - first-match checks pull an
//!   experience level and topic out of a course request
//! - **Orchestration** (`runtime`) - `AgentRuntime::handle_utterance` runs
//!   classify -> extract -> recommend, mirrors enrollments to the optional LMS
//!   backend, and emits structured tracing events
//!
//! # Safety Principle
//!
//! Classification and extraction are total, deterministic functions. What to
//! recommend and what to persist are decisions made by the core engine, never
//! by the text-matching layer.

pub mod conversation;
pub mod runtime;

pub use conversation::{IntentClassifier, SlotExtractor};
pub use runtime::AgentRuntime;
