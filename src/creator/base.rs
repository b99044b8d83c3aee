//! Trait base para backends de criação de elementos.

use serde_json::Value;

use crate::RamoResult;

/// Propriedades de um elemento, como objeto JSON.
pub type Props = serde_json::Map<String, Value>;

/// Trait para backends que constroem os nós de fato.
///
/// O builder normaliza a forma dos argumentos e delega toda a
/// construção ao backend. A semântica de cada nó (atributos, filhos,
/// reconciliação) pertence ao backend, não a esta crate.
pub trait Creator {
    /// Tipo de nó produzido pelo backend.
    type Element;

    /// Cria um elemento com a tag, as props e os filhos já convertidos.
    fn create_element(
        &self,
        tag: &str,
        props: &Props,
        children: Vec<Self::Element>,
    ) -> RamoResult<Self::Element>;

    /// Cria um nó de texto.
    fn create_text(&self, text: &str) -> RamoResult<Self::Element>;
}
