//! Bulma `progress` element.

use super::*;
use crate::ProgressSize;

/// Default `max` attribute.
pub const PROGRESS_DEFAULT_MAX: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Modifier properties of [`Progress`].
pub struct ProgressModifiers {
    /// Palette color.
    pub color: Option<Modifier<Color>>,
    /// Bar height.
    pub size: Option<Modifier<ProgressSize>>,
}

impl ProgressModifiers {
    /// `progress`, `is-{color}`, `is-{size}`.
    pub fn classes(&self) -> ClassList {
        ClassList::new("Progress", "progress")
            .modifier("is-", self.color.as_ref())
            .modifier("is-", self.size.as_ref())
    }
}

#[component]
/// Native progress bar. `max` and `value` are forwarded without clamping.
pub fn Progress(
    /// Palette color.
    #[prop(optional, into)] color: Option<Modifier<Color>>,
    /// Size modifier.
    #[prop(optional, into)] size: Option<Modifier<ProgressSize>>,
    /// Maximum value. Defaults to 100.
    #[prop(into, default = MaybeSignal::Static(PROGRESS_DEFAULT_MAX))] max: MaybeSignal<f64>,
    /// Current value. Indeterminate when unset.
    #[prop(optional, into)] value: Option<MaybeSignal<f64>>,
    /// Extra classes, appended after the generated ones.
    #[prop(optional, into)] class: Option<String>,
    /// Tag or component rendered instead of the default element.
    #[prop(optional, into)] render_as: Option<RenderTarget>,
    /// Reference to the rendered element.
    #[prop(optional)] node_ref: ElementRef,
    /// `attr:*` attributes forwarded to the rendered element.
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    /// Content.
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let theme = use_theme();
    let modifiers = ProgressModifiers {
        color: themed_color(color, &theme),
        size,
    };
    let list = modifiers.classes().custom(class.as_deref());
    list.report();
    let class = list.render(&theme);

    let mut host = Host::new("progress", Signal::derive(move || class.clone()))
        .render_as(render_as)
        .node_ref(node_ref)
        .attribute("max", attr(move || max.get().to_string()));
    if let Some(value) = value {
        host = host.attribute("value", attr(move || value.get().to_string()));
    }
    host.forward(attrs).children(children).render()
}
