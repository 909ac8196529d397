//! Polymorphic host element shared by every component.

use leptos::ev::MouseEvent;
use leptos::html::{self, Custom};
use leptos::*;

use crate::{merge_style, Style};

/// Forwarded reference to the host element a component renders.
pub type ElementRef = NodeRef<Custom>;

/// Everything a caller-supplied render target needs to stand in for the default element.
pub struct RenderProps {
    /// Composed class attribute.
    pub class: Signal<String>,
    /// Forwarded and component-required attributes.
    pub attributes: Vec<(&'static str, Attribute)>,
    /// Reference that must end up on the rendered host element.
    pub node_ref: ElementRef,
    /// Click handler the component needs wired, if any.
    pub on_click: Option<Callback<MouseEvent>>,
    /// Component children.
    pub children: Option<Children>,
}

#[derive(Clone, Copy)]
/// Element or component a component renders as.
pub enum RenderTarget {
    /// Render this tag instead of the component's default.
    Element(&'static str),
    /// Hand the composed props to a caller component.
    Component(Callback<RenderProps, View>),
}

impl From<&'static str> for RenderTarget {
    fn from(tag: &'static str) -> Self {
        Self::Element(tag)
    }
}

impl From<Callback<RenderProps, View>> for RenderTarget {
    fn from(render: Callback<RenderProps, View>) -> Self {
        Self::Component(render)
    }
}

/// Converts any attribute value into the forwarded-attribute representation.
pub(crate) fn attr(value: impl IntoAttribute) -> Attribute {
    value.into_attribute()
}

/// Host description assembled by each component before rendering.
pub(crate) struct Host {
    pub(crate) default_tag: &'static str,
    pub(crate) class: Signal<String>,
    pub(crate) render_as: Option<RenderTarget>,
    pub(crate) node_ref: ElementRef,
    pub(crate) on_click: Option<Callback<MouseEvent>>,
    pub(crate) attributes: Vec<(&'static str, Attribute)>,
    pub(crate) required_style: &'static [(&'static str, &'static str)],
    pub(crate) style: Option<Style>,
    pub(crate) forwarded: Vec<(&'static str, Attribute)>,
    pub(crate) forwarded_class: Option<Attribute>,
    pub(crate) forwarded_style: Option<Attribute>,
    pub(crate) children: Option<Children>,
}

impl Host {
    pub(crate) fn new(default_tag: &'static str, class: impl Into<Signal<String>>) -> Self {
        Self {
            default_tag,
            class: class.into(),
            render_as: None,
            node_ref: ElementRef::default(),
            on_click: None,
            attributes: Vec::new(),
            required_style: &[],
            style: None,
            forwarded: Vec::new(),
            forwarded_class: None,
            forwarded_style: None,
            children: None,
        }
    }

    pub(crate) fn render_as(mut self, render_as: Option<RenderTarget>) -> Self {
        self.render_as = render_as;
        self
    }

    pub(crate) fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.node_ref = node_ref;
        self
    }

    pub(crate) fn on_click(mut self, on_click: Callback<MouseEvent>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    /// Component-required attributes. Rendered before forwarded ones.
    pub(crate) fn attribute(mut self, name: &'static str, value: Attribute) -> Self {
        self.attributes.push((name, value));
        self
    }

    /// Inline style: `required` declarations first, then the caller's.
    pub(crate) fn style(
        mut self,
        required: &'static [(&'static str, &'static str)],
        caller: Option<Style>,
    ) -> Self {
        self.required_style = required;
        self.style = caller;
        self
    }

    /// Caller `attr:*` pairs. `class` is appended to the composed class list and
    /// `style` is merged under the required declarations.
    pub(crate) fn forward(mut self, attributes: Vec<(&'static str, Attribute)>) -> Self {
        for (name, value) in attributes {
            match name {
                "class" => self.forwarded_class = Some(value),
                "style" => self.forwarded_style = Some(value),
                _ => self.forwarded.push((name, value)),
            }
        }
        self
    }

    pub(crate) fn children(mut self, children: Option<Children>) -> Self {
        self.children = children;
        self
    }

    /// Renders the default tag, or `render_as` when supplied.
    pub(crate) fn render(self) -> View {
        let Self {
            default_tag,
            class,
            render_as,
            node_ref,
            on_click,
            mut attributes,
            required_style,
            style,
            forwarded,
            forwarded_class,
            forwarded_style,
            children,
        } = self;

        let class = match forwarded_class {
            Some(extra) => Signal::derive(move || append_class(class.get(), &extra)),
            None => class,
        };
        if !required_style.is_empty() || style.is_some() || forwarded_style.is_some() {
            let style = move || {
                let mut caller = style.clone().unwrap_or_default();
                if let Some(extra) = forwarded_style.as_ref().and_then(attribute_text) {
                    caller = caller.overlay(Style::parse(&extra));
                }
                merge_style(required_style, Some(&caller))
            };
            attributes.push(("style", attr(style)));
        }
        attributes.extend(forwarded);

        match render_as.unwrap_or(RenderTarget::Element(default_tag)) {
            RenderTarget::Element(tag) => {
                let mut element = html::custom(Custom::new(tag))
                    .attr("class", move || class.get())
                    .node_ref(node_ref);
                for (name, value) in attributes {
                    element = element.attr(name, value);
                }
                if let Some(on_click) = on_click {
                    element = element.on(ev::click, move |ev| on_click.call(ev));
                }
                if let Some(children) = children {
                    element = element.child(children().into_view());
                }
                element.into_view()
            }
            RenderTarget::Component(render) => render.call(RenderProps {
                class,
                attributes,
                node_ref,
                on_click,
                children,
            }),
        }
    }
}

fn attribute_text(value: &Attribute) -> Option<String> {
    value
        .as_nameless_value_string()
        .map(|text| text.to_string())
        .filter(|text| !text.trim().is_empty())
}

/// Caller classes go last and are never themed.
fn append_class(base: String, extra: &Attribute) -> String {
    match attribute_text(extra) {
        Some(extra) if base.is_empty() => extra,
        Some(extra) => format!("{base} {}", extra.trim()),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tag_converts_into_element_target() {
        assert!(matches!(RenderTarget::from("a"), RenderTarget::Element("a")));
    }

    #[test]
    fn host_keeps_required_attributes_apart_from_forwarded_ones() {
        let _ = create_runtime();
        let host = Host::new("div", Signal::derive(String::new))
            .attribute("role", attr("button"))
            .forward(vec![("id", attr("menu"))]);
        let required = host.attributes.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        let forwarded = host.forwarded.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        assert_eq!(required, vec!["role"]);
        assert_eq!(forwarded, vec!["id"]);
    }

    #[test]
    fn forwarded_class_and_style_are_held_back_for_merging() {
        let _ = create_runtime();
        let host = Host::new("div", Signal::derive(String::new)).forward(vec![
            ("class", attr("landing")),
            ("style", attr("margin: 10px")),
            ("title", attr("hi")),
        ]);
        assert!(host.forwarded_class.is_some());
        assert!(host.forwarded_style.is_some());
        assert_eq!(host.forwarded.len(), 1);
    }

    #[test]
    fn forwarded_class_is_appended_after_generated_ones() {
        assert_eq!(append_class("hero is-info".into(), &attr("landing")), "hero is-info landing");
        assert_eq!(append_class(String::new(), &attr("landing")), "landing");
        assert_eq!(append_class("hero".into(), &attr("")), "hero");
    }
}
