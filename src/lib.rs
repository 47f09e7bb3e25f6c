//! Fitplan: AI workout plans from a short fitness profile
//!
//! Collects gender, age, weight and a goal, renders them into a fixed two-message prompt and asks
//! a hosted chat completion service (Groq by default) for a personalized workout plan.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod profile;
pub mod prompt;
pub mod provider;
