//! Survey Game - Survey explorer and trivia engine
//!
//! This crate aggregates an exploded survey table by distinct respondent,
//! derives Higher/Lower and Guess-the-Number questions from it, and runs
//! caller-owned game sessions over the resulting question bank.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
