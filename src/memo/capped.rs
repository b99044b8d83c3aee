//! Memoizador com cache limitado e reset total.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::RamoResult;

/// Função de cômputo memoizada.
///
/// Assumida pura: sem efeitos colaterais e determinística para
/// argumentos iguais.
pub type ComputeFn<A, V> = Box<dyn Fn(&A) -> RamoResult<V>>;

/// Resolvedor: mapeia os argumentos de chamada para a chave de cache.
pub type ResolverFn<A, K> = Box<dyn Fn(&A) -> RamoResult<K>>;

/// Estatísticas do cache de memoização.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Limite configurado.
    pub cap: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de faltas (cache misses), igual ao número de invocações
    /// da função de cômputo que retornaram com sucesso.
    pub misses: u64,

    /// Número de resets completos do cache.
    pub resets: u64,
}

impl MemoStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoizador com cache limitado.
///
/// Envolve um cômputo de resultado único com um cache indexado pela
/// chave produzida pelo resolvedor. Quando o tamanho do cache excede o
/// limite, o cache inteiro é descartado no início da chamada seguinte —
/// não há política LRU ou LFU, o reset é atômico.
///
/// Dentro de uma mesma geração (período entre dois resets), o cômputo
/// executa no máximo uma vez por chave; chamadas repetidas devolvem o
/// mesmo `Rc`, idêntico por identidade e não apenas por valor.
///
/// O cache pertence exclusivamente à instância. Uso síncrono e
/// single-thread: os valores são `Rc` e as funções não são `Send`.
pub struct CappedMemo<A, K, V>
where
    K: Eq + Hash,
{
    compute: ComputeFn<A, V>,
    resolver: ResolverFn<A, K>,
    cache: HashMap<K, Rc<V>>,
    cap: usize,
    hits: u64,
    misses: u64,
    resets: u64,
}

impl<A, K, V> CappedMemo<A, K, V>
where
    K: Eq + Hash,
{
    /// Cria um novo memoizador.
    ///
    /// # Argumentos
    /// - `compute`: cômputo puro e relativamente caro a ser memoizado
    /// - `cap`: limite de entradas antes do reset total
    /// - `resolver`: produz a chave de cache a partir dos argumentos
    pub fn new(compute: ComputeFn<A, V>, cap: usize, resolver: ResolverFn<A, K>) -> Self {
        Self {
            compute,
            resolver,
            cache: HashMap::new(),
            cap,
            hits: 0,
            misses: 0,
            resets: 0,
        }
    }

    /// Invoca o cômputo memoizado.
    ///
    /// A verificação de tamanho acontece no início da chamada, antes da
    /// resolução da chave. Por isso o cache pode conter transitoriamente
    /// `cap + 1` entradas entre uma inserção e a chamada seguinte.
    ///
    /// Falhas do resolvedor ou do cômputo propagam ao chamador sem
    /// modificar o cache: nenhuma entrada parcial é armazenada.
    pub fn call(&mut self, args: A) -> RamoResult<Rc<V>> {
        if self.cache.len() > self.cap {
            debug!(
                size = self.cache.len(),
                cap = self.cap,
                "cache de memoização excedeu o limite, descartando tudo"
            );
            self.cache.clear();
            self.resets += 1;
        }

        let key = (self.resolver)(&args)?;

        if let Some(value) = self.cache.get(&key) {
            trace!("hit de memoização");
            self.hits += 1;
            return Ok(Rc::clone(value));
        }

        trace!("miss de memoização");
        let value = Rc::new((self.compute)(&args)?);
        self.cache.insert(key, Rc::clone(&value));
        self.misses += 1;
        Ok(value)
    }

    /// Número atual de entradas no cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Limite configurado.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Verifica se uma chave está presente na geração atual.
    pub fn contains_key(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            size: self.cache.len(),
            cap: self.cap,
            hits: self.hits,
            misses: self.misses,
            resets: self.resets,
        }
    }
}
