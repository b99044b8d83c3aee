//! Backends de criação de elementos.
//!
//! Este módulo contém o trait [`Creator`] e os dois backends de
//! referência: um tipo documento (nós com atributos e filhos anexados)
//! e um virtual (tuplas de três posições, no estilo das bibliotecas de
//! elementos virtuais).

mod base;
mod document;
mod vnode;

pub use base::{Creator, Props};
pub use document::DocumentCreator;
pub use vnode::VirtualCreator;
