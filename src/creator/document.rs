//! Backend tipo documento.

use serde_json::{json, Map, Value};

use super::base::{Creator, Props};
use crate::RamoResult;

/// Backend que imita um documento: cada nó é um objeto com `type`,
/// `children` e `style`, e as props são aplicadas uma a uma.
///
/// Regras de aplicação de props:
/// - `style` (quando objeto) é mesclado no objeto de estilo do nó
/// - qualquer outra chave vira atributo, com o valor inalterado
///   (inclusive `null`)
///
/// Filhos de texto viram nós `{ "type": "text", "text": ... }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCreator;

impl DocumentCreator {
    /// Cria um novo backend tipo documento.
    pub fn new() -> Self {
        Self
    }
}

impl Creator for DocumentCreator {
    type Element = Value;

    fn create_element(
        &self,
        tag: &str,
        props: &Props,
        children: Vec<Value>,
    ) -> RamoResult<Value> {
        let mut style = Map::new();
        let mut node = Map::new();
        node.insert("type".to_string(), Value::String(tag.to_string()));
        node.insert("children".to_string(), Value::Array(children));

        for (key, value) in props {
            if key == "style" {
                if let Value::Object(entries) = value {
                    for (name, setting) in entries {
                        style.insert(name.clone(), setting.clone());
                    }
                }
            } else {
                node.insert(key.clone(), value.clone());
            }
        }

        node.insert("style".to_string(), Value::Object(style));
        Ok(Value::Object(node))
    }

    fn create_text(&self, text: &str) -> RamoResult<Value> {
        Ok(json!({ "type": "text", "text": text }))
    }
}
