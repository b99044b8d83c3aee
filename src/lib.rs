//! # Ramo
//!
//! Árvores de elementos construídas por expressão.
//!
//! Ramo permite montar árvores de elementos de UI com chamadas de função
//! simples, delegando a construção real dos nós a um backend "creator"
//! plugável (um objeto tipo documento ou uma função de criação de três
//! argumentos).
//!
//! ## Módulos
//!
//! - [`element`] - Superfície de expressão (builder, formas de chamada, estilos)
//! - [`creator`] - Backends de criação de elementos
//! - [`memo`] - Memoização com cache limitado
//! - [`types`] - Tipos compartilhados

pub mod creator;
pub mod element;
pub mod memo;
pub mod types;

pub use types::config::Config;
pub use types::errors::{RamoError, RamoResult};
