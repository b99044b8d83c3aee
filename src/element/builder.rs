//! Builder de elementos.

use serde_json::Value;
use tracing::trace;

use super::args::{Child, ElementArgs};
use super::styled::{StyleResolver, StyledRegistry};
use crate::creator::Creator;
use crate::memo::MemoStats;
use crate::types::config::Config;
use crate::{RamoError, RamoResult};

/// Builder de elementos ligado a um backend de criação.
///
/// Normaliza a forma dos argumentos uma única vez, aplica a troca de
/// estilo quando houver resolvedores registrados e delega a construção
/// do nó ao backend.
///
/// A prop `css` só é especial quando pelo menos um resolvedor de estilo
/// foi registrado; sem registro nenhum, ela passa ao backend como uma
/// prop qualquer.
pub struct ElementBuilder<C: Creator> {
    creator: C,
    styled: StyledRegistry,
}

impl<C: Creator> std::fmt::Debug for ElementBuilder<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementBuilder").finish_non_exhaustive()
    }
}

impl<C: Creator> ElementBuilder<C> {
    /// Cria um builder com a configuração padrão.
    pub fn new(creator: C) -> Self {
        Self {
            creator,
            // O cap padrão é sempre válido.
            styled: StyledRegistry::new(1000),
        }
    }

    /// Cria um builder com a configuração dada.
    ///
    /// Falha com [`RamoError::InvalidCap`] se o cap de memoização for
    /// negativo.
    pub fn with_config(creator: C, config: &Config) -> RamoResult<Self> {
        let cap = config.memo.validated_cap()?;
        Ok(Self {
            creator,
            styled: StyledRegistry::new(cap),
        })
    }

    /// Registra um resolvedor de estilo para uma tag.
    pub fn register_style<S: Into<String>>(&mut self, tag: S, resolver: StyleResolver) {
        self.styled.register(tag, resolver);
    }

    /// Estatísticas do memoizador de estilo de uma tag registrada.
    pub fn style_stats(&self, tag: &str) -> Option<MemoStats> {
        self.styled.stats(tag)
    }

    /// Cria um elemento.
    pub fn element(
        &self,
        tag: &str,
        args: impl Into<ElementArgs<C::Element>>,
    ) -> RamoResult<C::Element> {
        let (mut props, children) = args.into().into_parts();

        let swapped = if self.styled.is_enabled() {
            match props.remove("css") {
                Some(Value::String(css)) => {
                    trace!(tag, css = css.as_str(), "trocando tag por estilo");
                    Some(self.styled.resolve(tag, &css)?)
                }
                Some(other) => {
                    return Err(RamoError::other(format!(
                        "prop css deve ser string, recebido: {other}"
                    )));
                }
                None => None,
            }
        } else {
            None
        };
        let tag = swapped.as_deref().map(String::as_str).unwrap_or(tag);

        let mut built = Vec::with_capacity(children.len());
        for child in children {
            built.push(match child {
                Child::Text(text) => self.creator.create_text(&text)?,
                Child::Element(element) => element,
            });
        }

        self.creator.create_element(tag, &props, built)
    }
}

/// Tabela de elementos nomeados, um método por tag.
impl<C: Creator> ElementBuilder<C> {
    pub fn script(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("script", args)
    }

    pub fn html(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("html", args)
    }

    pub fn body(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("body", args)
    }

    pub fn section(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("section", args)
    }

    pub fn article(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("article", args)
    }

    pub fn span(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("span", args)
    }

    pub fn div(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("div", args)
    }

    pub fn img(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("img", args)
    }

    pub fn h1(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("h1", args)
    }

    pub fn h2(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("h2", args)
    }

    pub fn h3(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("h3", args)
    }

    pub fn h4(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("h4", args)
    }

    pub fn h5(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("h5", args)
    }

    pub fn h6(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("h6", args)
    }

    pub fn a(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("a", args)
    }

    pub fn p(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("p", args)
    }

    pub fn b(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("b", args)
    }

    pub fn q(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("q", args)
    }

    pub fn i(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("i", args)
    }

    pub fn ul(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("ul", args)
    }

    pub fn ol(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("ol", args)
    }

    pub fn li(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("li", args)
    }

    pub fn textarea(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("textarea", args)
    }

    pub fn button(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("button", args)
    }

    pub fn iframe(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("iframe", args)
    }

    pub fn blockquote(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("blockquote", args)
    }

    pub fn br(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("br", args)
    }

    pub fn code(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("code", args)
    }

    pub fn pre(&self, args: impl Into<ElementArgs<C::Element>>) -> RamoResult<C::Element> {
        self.element("pre", args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creator::{Props, VirtualCreator};
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_css_is_a_plain_prop_without_styles() {
        let builder = ElementBuilder::new(VirtualCreator::new());
        let el = builder.h1(props(json!({ "css": "h2" }))).unwrap();
        assert_eq!(el, json!(["h1", { "css": "h2" }, []]));
    }

    #[test]
    fn test_css_swaps_tag_when_registered() {
        let mut builder = ElementBuilder::new(VirtualCreator::new());
        builder.register_style("h1", Box::new(|css| Ok(css.to_string())));

        let el = builder.h1((props(json!({ "css": "h2" })), "header")).unwrap();
        assert_eq!(el, json!(["h2", {}, ["header"]]));
    }

    #[test]
    fn test_css_on_unregistered_tag_fails_when_styles_enabled() {
        let mut builder = ElementBuilder::new(VirtualCreator::new());
        builder.register_style("h1", Box::new(|css| Ok(css.to_string())));

        let err = builder.p(props(json!({ "css": "h3" }))).unwrap_err();
        assert!(matches!(err, RamoError::StyleNotRegistered(tag) if tag == "p"));
    }

    #[test]
    fn test_non_string_css_is_rejected() {
        let mut builder = ElementBuilder::new(VirtualCreator::new());
        builder.register_style("h1", Box::new(|css| Ok(css.to_string())));

        let err = builder.h1(props(json!({ "css": 2 }))).unwrap_err();
        assert!(matches!(err, RamoError::Other(_)));
    }

    #[test]
    fn test_with_config_rejects_negative_cap() {
        let mut config = Config::default_config();
        config.memo.cap = -1;

        let err = ElementBuilder::with_config(VirtualCreator::new(), &config).unwrap_err();
        assert!(matches!(err, RamoError::InvalidCap(-1)));
    }
}
