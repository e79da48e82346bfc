//! Core domain types: the short link entity and its repository contract.

pub mod entities;
pub mod repositories;
