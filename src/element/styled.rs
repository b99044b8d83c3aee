//! Registro de resolvedores de estilo.
//!
//! Um resolvedor de estilo troca a tag de um elemento a partir do valor
//! da prop `css`. A troca é relativamente cara para o backend, então
//! cada tag registrada ganha seu próprio memoizador limitado, com o
//! valor de `css` como chave de cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::memo::{CappedMemo, MemoStats};
use crate::{RamoError, RamoResult};

/// Resolvedor de estilo: mapeia o valor de `css` para a tag trocada.
pub type StyleResolver = Box<dyn Fn(&str) -> RamoResult<String>>;

/// Registro de resolvedores de estilo, um memoizador por tag.
///
/// Os memoizadores nunca são compartilhados entre tags: cada registro
/// cria e possui o seu, com o mesmo limite configurado.
#[derive(Default)]
pub struct StyledRegistry {
    cap: usize,
    memos: HashMap<String, RefCell<CappedMemo<String, String, String>>>,
}

impl StyledRegistry {
    /// Cria um registro vazio com o limite de memoização dado.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            memos: HashMap::new(),
        }
    }

    /// Registra um resolvedor para uma tag.
    ///
    /// O memoizador usa o próprio valor de `css` (primeiro argumento
    /// posicional da troca) como chave.
    pub fn register<S: Into<String>>(&mut self, tag: S, resolver: StyleResolver) {
        let memo = CappedMemo::new(
            Box::new(move |css: &String| resolver(css)),
            self.cap,
            Box::new(|css: &String| Ok(css.clone())),
        );
        self.memos.insert(tag.into(), RefCell::new(memo));
    }

    /// Verifica se alguma tag foi registrada.
    pub fn is_enabled(&self) -> bool {
        !self.memos.is_empty()
    }

    /// Resolve a tag trocada para um valor de `css`, memoizado.
    pub fn resolve(&self, tag: &str, css: &str) -> RamoResult<Rc<String>> {
        match self.memos.get(tag) {
            Some(memo) => memo.borrow_mut().call(css.to_string()),
            None => Err(RamoError::StyleNotRegistered(tag.to_string())),
        }
    }

    /// Estatísticas do memoizador de uma tag registrada.
    pub fn stats(&self, tag: &str) -> Option<MemoStats> {
        self.memos.get(tag).map(|memo| memo.borrow().stats())
    }
}
