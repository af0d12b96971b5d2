//! Concrete model providers.

pub mod openai_compat;
