//! Memoização com cache limitado.
//!
//! Este módulo implementa a memoização usada pelo swap de estilos:
//! um cache com limite de tamanho que é esvaziado por completo quando
//! o limite é ultrapassado, trocando memoização perfeita por memória
//! limitada.

mod capped;

pub use capped::{CappedMemo, ComputeFn, MemoStats, ResolverFn};
