//! Bulma dropdown: a container owning the open state, a trigger, and menu parts.

use super::*;
use crate::DropdownAlign;

const CONTAINER: &str = "Dropdown";

#[derive(Clone, Copy)]
/// Open state and dismiss policy a [`Dropdown`] shares with its parts.
pub struct DropdownContext {
    /// Whether the menu is open.
    pub active: Signal<bool>,
    /// Requests an open-state transition.
    pub set_active: Callback<bool>,
    /// Close on pointer activity outside the dropdown and on item clicks.
    pub close_on_blur: bool,
    /// Close on Escape.
    pub close_on_esc: bool,
}

impl DropdownContext {
    /// Builds a context around `state`, notifying `on_change` on real transitions.
    pub fn from_state(
        state: OpenState,
        policy: DismissPolicy,
        on_change: Option<Callback<bool>>,
    ) -> Self {
        Self {
            active: state.signal(),
            set_active: Callback::new(move |next: bool| {
                if state.set(next) {
                    if let Some(on_change) = on_change {
                        on_change.call(next);
                    }
                }
            }),
            close_on_blur: policy.close_on_blur,
            close_on_esc: policy.close_on_esc,
        }
    }

    /// Context used by parts rendered outside a [`Dropdown`]: closed, transitions ignored.
    pub fn initial() -> Self {
        Self {
            active: Signal::derive(|| false),
            set_active: Callback::new(|_: bool| {}),
            close_on_blur: true,
            close_on_esc: true,
        }
    }

    /// Dismiss policy carried by this context.
    pub fn policy(&self) -> DismissPolicy {
        DismissPolicy {
            close_on_blur: self.close_on_blur,
            close_on_esc: self.close_on_esc,
        }
    }

    /// Opens the menu.
    pub fn open(&self) {
        self.set_active.call(true);
    }

    /// Closes the menu.
    pub fn close(&self) {
        self.set_active.call(false);
    }

    /// Flips the menu.
    pub fn toggle(&self) {
        self.set_active.call(!self.active.get_untracked());
    }
}

fn use_dropdown_context(component: &'static str, explicit: Option<DropdownContext>) -> DropdownContext {
    resolve_context(explicit, component, CONTAINER, DropdownContext::initial)
}

/// Trigger click: caller handler, then toggle.
pub fn trigger_click<E: 'static>(context: DropdownContext, on_click: Option<Callback<E>>, event: E) {
    run_click_sequence(event, on_click, || context.toggle());
}

/// Item click: caller handler, then close when the policy dismisses on interaction.
pub fn item_click<E: 'static>(context: DropdownContext, on_click: Option<Callback<E>>, event: E) {
    run_click_sequence(event, on_click, || {
        if context.close_on_blur {
            context.close();
        }
    });
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Modifier properties of [`Dropdown`].
pub struct DropdownModifiers {
    /// Palette color.
    pub color: Option<Modifier<Color>>,
    /// Open on hover instead of click.
    pub hoverable: bool,
    /// Menu alignment.
    pub align: Option<Modifier<DropdownAlign>>,
    /// Open upwards.
    pub up: bool,
}

impl DropdownModifiers {
    /// `dropdown`, `is-active`, `is-{color}`, `is-hoverable`, `is-{align}`, `is-up`.
    pub fn classes(&self, active: bool) -> ClassList {
        ClassList::new(CONTAINER, "dropdown")
            .flag("is-active", active)
            .modifier("is-", self.color.as_ref())
            .flag("is-hoverable", self.hoverable)
            .modifier("is-", self.align.as_ref())
            .flag("is-up", self.up)
    }
}

#[component]
/// Dropdown root. Owns the open state and closes on outside pointer activity or Escape.
pub fn DropdownContainer(
    /// Initial open state. A reactive value keeps the dropdown in sync with it.
    #[prop(optional, into)]
    active: Option<MaybeSignal<bool>>,
    /// Palette color.
    #[prop(optional, into)] color: Option<Modifier<Color>>,
    /// Open on hover.
    #[prop(optional)] hoverable: bool,
    /// Menu alignment.
    #[prop(optional, into)] align: Option<Modifier<DropdownAlign>>,
    /// Open upwards.
    #[prop(optional)] up: bool,
    /// Close on pointer activity outside the dropdown and on item clicks.
    #[prop(default = true)] close_on_blur: bool,
    /// Close on Escape.
    #[prop(default = true)] close_on_esc: bool,
    /// Notified after every open-state transition the dropdown makes.
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
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
    let state = OpenState::new(
        active
            .as_ref()
            .map(|active| active.get_untracked())
            .unwrap_or(false),
    );
    if let Some(active) = active {
        create_effect(move |_| {
            state.set(active.get());
        });
    }

    let policy = DismissPolicy {
        close_on_blur,
        close_on_esc,
    };
    let context = DropdownContext::from_state(state, policy, on_change);
    provide_context(context);
    install_dismiss_listeners(
        policy,
        Some(node_ref),
        Callback::new(move |()| context.close()),
    );

    let modifiers = DropdownModifiers {
        color: themed_color(color, &theme),
        hoverable,
        align,
        up,
    };
    modifiers.classes(false).report();
    let class = Signal::derive(move || {
        modifiers
            .classes(state.is_open())
            .custom(class.as_deref())
            .render(&theme)
    });

    Host::new("div", class)
        .render_as(render_as)
        .node_ref(node_ref)
        .forward(attrs)
        .children(children)
        .render()
}

pub use self::{DropdownContainer as Dropdown, DropdownContainerProps as DropdownProps};

#[component]
/// Focusable element that toggles the enclosing [`Dropdown`].
pub fn DropdownTrigger(
    /// Called on click, before any state change.
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Inline style. `outline: none` is always kept.
    #[prop(optional, into)] style: Option<Style>,
    /// Explicit context; defaults to the enclosing [`Dropdown`].
    #[prop(optional)]
    context: Option<DropdownContext>,
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
    let context = use_dropdown_context("DropdownTrigger", context);
    let list = ClassList::new("DropdownTrigger", "dropdown-trigger").custom(class.as_deref());
    let class = list.render(&use_theme());
    let active = context.active;

    Host::new("div", Signal::derive(move || class.clone()))
        .render_as(render_as)
        .node_ref(node_ref)
        .attribute("role", attr("button"))
        .attribute("tabindex", attr("0"))
        .attribute("aria-haspopup", attr("true"))
        .attribute("aria-expanded", attr(move || active.get().to_string()))
        .style(FOCUS_STYLE, style)
        .on_click(Callback::new(move |ev| trigger_click(context, on_click, ev)))
        .forward(attrs)
        .children(children)
        .render()
}

#[component]
/// Positioned wrapper around the dropdown content.
pub fn DropdownMenu(
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
    let mut attrs = attrs;
    attrs.insert(0, ("role", attr("menu")));
    render_static(
        ClassList::new("DropdownMenu", "dropdown-menu").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Box holding dropdown items.
pub fn DropdownContent(
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
    render_static(
        ClassList::new("DropdownContent", "dropdown-content").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Dropdown entry. Clicking it closes the enclosing [`Dropdown`] when that dismisses on blur.
pub fn DropdownItem(
    /// Highlight as the current entry.
    #[prop(optional, into)] active: MaybeSignal<bool>,
    /// Called on click, before any state change.
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Explicit context; defaults to the enclosing [`Dropdown`].
    #[prop(optional)]
    context: Option<DropdownContext>,
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
    let context = use_dropdown_context("DropdownItem", context);
    let theme = use_theme();
    let class = Signal::derive(move || {
        ClassList::new("DropdownItem", "dropdown-item")
            .flag("is-active", active.get())
            .custom(class.as_deref())
            .render(&theme)
    });

    Host::new("a", class)
        .render_as(render_as)
        .node_ref(node_ref)
        .on_click(Callback::new(move |ev| item_click(context, on_click, ev)))
        .forward(attrs)
        .children(children)
        .render()
}

#[component]
/// Horizontal rule between dropdown items.
pub fn DropdownDivider(
    /// Extra classes, appended after the generated ones.
    #[prop(optional, into)] class: Option<String>,
    /// Tag or component rendered instead of the default element.
    #[prop(optional, into)] render_as: Option<RenderTarget>,
    /// Reference to the rendered element.
    #[prop(optional)] node_ref: ElementRef,
    /// `attr:*` attributes forwarded to the rendered element.
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    render_static(
        ClassList::new("DropdownDivider", "dropdown-divider").custom(class.as_deref()),
        "hr",
        render_as,
        node_ref,
        attrs,
        None,
    )
}
