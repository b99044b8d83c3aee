//! Formas de chamada aceitas pelo builder.
//!
//! Em vez de inspecionar a forma dos argumentos em tempo de execução
//! ao longo de todo o caminho de chamada, as formas são variantes
//! explícitas resolvidas uma única vez em [`ElementArgs::into_parts`].

use serde_json::Value;

use crate::creator::Props;

/// Um filho de elemento: texto ou um nó já construído pelo backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<E> {
    /// Filho de texto, convertido pelo backend em nó de texto.
    Text(String),

    /// Nó já construído.
    Element(E),
}

impl<E> Child<E> {
    /// Cria um filho de texto.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Cria um filho a partir de um nó do backend.
    pub fn element(element: E) -> Self {
        Self::Element(element)
    }
}

impl<E> From<&str> for Child<E> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for Child<Value> {
    fn from(element: Value) -> Self {
        Self::Element(element)
    }
}

/// Forma dos argumentos de uma chamada de criação de elemento.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementArgs<E> {
    /// Apenas filhos.
    Children(Vec<Child<E>>),

    /// Apenas um filho de texto.
    Text(String),

    /// Props e filhos.
    PropsChildren(Props, Vec<Child<E>>),

    /// Apenas props, sem filhos.
    PropsOnly(Props),
}

impl<E> ElementArgs<E> {
    /// Normaliza a forma em props mais lista de filhos.
    ///
    /// Único ponto de normalização: depois daqui nenhum código precisa
    /// saber qual forma foi usada na chamada.
    pub fn into_parts(self) -> (Props, Vec<Child<E>>) {
        match self {
            Self::Children(children) => (Props::new(), children),
            Self::Text(text) => (Props::new(), vec![Child::Text(text)]),
            Self::PropsChildren(props, children) => (props, children),
            Self::PropsOnly(props) => (props, Vec::new()),
        }
    }
}

impl<E> From<&str> for ElementArgs<E> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<E> From<String> for ElementArgs<E> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<E> From<Vec<Child<E>>> for ElementArgs<E> {
    fn from(children: Vec<Child<E>>) -> Self {
        Self::Children(children)
    }
}

impl<E> From<Props> for ElementArgs<E> {
    fn from(props: Props) -> Self {
        Self::PropsOnly(props)
    }
}

impl<E> From<(Props, Vec<Child<E>>)> for ElementArgs<E> {
    fn from((props, children): (Props, Vec<Child<E>>)) -> Self {
        Self::PropsChildren(props, children)
    }
}

impl<E> From<(Props, &str)> for ElementArgs<E> {
    fn from((props, text): (Props, &str)) -> Self {
        Self::PropsChildren(props, vec![Child::Text(text.to_string())])
    }
}

impl<E> From<(Props, String)> for ElementArgs<E> {
    fn from((props, text): (Props, String)) -> Self {
        Self::PropsChildren(props, vec![Child::Text(text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_text_becomes_single_text_child() {
        let args: ElementArgs<Value> = "heyo".into();
        let (props, children) = args.into_parts();
        assert!(props.is_empty());
        assert_eq!(children, vec![Child::Text("heyo".to_string())]);
    }

    #[test]
    fn test_children_have_no_props() {
        let args: ElementArgs<Value> = vec![Child::text("a"), Child::text("b")].into();
        let (props, children) = args.into_parts();
        assert!(props.is_empty());
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_props_only_has_no_children() {
        let args: ElementArgs<Value> = props(json!({ "id": "hey" })).into();
        let (parts, children) = args.into_parts();
        assert_eq!(parts["id"], json!("hey"));
        assert!(children.is_empty());
    }

    #[test]
    fn test_props_with_text_normalizes_to_text_child() {
        let args: ElementArgs<Value> = (props(json!({ "id": "x" })), "description").into();
        let (parts, children) = args.into_parts();
        assert_eq!(parts["id"], json!("x"));
        assert_eq!(children, vec![Child::Text("description".to_string())]);
    }
}
