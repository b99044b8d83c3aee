//! Tipos compartilhados do Ramo.

pub mod config;
pub mod errors;
