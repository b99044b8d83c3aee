//! Backend de elementos virtuais (criação de três argumentos).

use serde_json::Value;

use super::base::{Creator, Props};
use crate::RamoResult;

/// Backend que imita uma função de criação de três argumentos: cada
/// nó é a tupla `[tag, props, children]`. Filhos de texto ficam como
/// strings simples dentro do array de filhos.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualCreator;

impl VirtualCreator {
    /// Cria um novo backend virtual.
    pub fn new() -> Self {
        Self
    }
}

impl Creator for VirtualCreator {
    type Element = Value;

    fn create_element(
        &self,
        tag: &str,
        props: &Props,
        children: Vec<Value>,
    ) -> RamoResult<Value> {
        Ok(Value::Array(vec![
            Value::String(tag.to_string()),
            Value::Object(props.clone()),
            Value::Array(children),
        ]))
    }

    fn create_text(&self, text: &str) -> RamoResult<Value> {
        Ok(Value::String(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_is_a_three_tuple() {
        let creator = VirtualCreator::new();
        let text = creator.create_text("header").unwrap();
        let node = creator.create_element("h1", &Props::new(), vec![text]).unwrap();
        assert_eq!(node, json!(["h1", {}, ["header"]]));
    }

    #[test]
    fn test_props_pass_through_unchanged() {
        let creator = VirtualCreator::new();
        let props: Props = json!({ "id": "hey", "excluded": null })
            .as_object()
            .unwrap()
            .clone();

        let node = creator.create_element("span", &props, vec![]).unwrap();
        assert_eq!(node, json!(["span", { "id": "hey", "excluded": null }, []]));
    }
}
