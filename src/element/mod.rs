//! Superfície de expressão do Ramo.
//!
//! Este módulo contém o builder de elementos, as formas de chamada
//! aceitas (variantes explícitas, resolvidas uma única vez na borda)
//! e o registro de resolvedores de estilo.

mod args;
mod builder;
mod styled;

pub use args::{Child, ElementArgs};
pub use builder::ElementBuilder;
pub use styled::{StyleResolver, StyledRegistry};
