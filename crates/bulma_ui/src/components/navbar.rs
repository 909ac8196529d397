//! Bulma navbar: a container owning the mobile-menu state, the burger, and menu parts.

use super::*;
use crate::{ModifierToken, NavbarDropdownAlign, NavbarFixed};

const CONTAINER: &str = "Navbar";

#[derive(Clone, Copy)]
/// Mobile-menu state a [`Navbar`] shares with its burger and menu.
pub struct NavbarContext {
    /// Whether the menu is expanded.
    pub active: Signal<bool>,
    /// Requests a menu-state transition.
    pub set_active: Callback<bool>,
}

impl NavbarContext {
    /// Builds a context around `state`, notifying `on_change` on real transitions.
    pub fn from_state(state: OpenState, on_change: Option<Callback<bool>>) -> Self {
        Self {
            active: state.signal(),
            set_active: Callback::new(move |next: bool| {
                if state.set(next) {
                    if let Some(on_change) = on_change {
                        on_change.call(next);
                    }
                }
            }),
        }
    }

    /// Context used by parts rendered outside a [`Navbar`]: collapsed, transitions ignored.
    pub fn initial() -> Self {
        Self {
            active: Signal::derive(|| false),
            set_active: Callback::new(|_: bool| {}),
        }
    }
}

fn use_navbar_context(component: &'static str, explicit: Option<NavbarContext>) -> NavbarContext {
    resolve_context(explicit, component, CONTAINER, NavbarContext::initial)
}

/// Burger click: caller handler, then flip the menu.
pub fn burger_click<E: 'static>(context: NavbarContext, on_click: Option<Callback<E>>, event: E) {
    run_click_sequence(event, on_click, || {
        context.set_active.call(!context.active.get_untracked());
    });
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Modifier properties of [`Navbar`].
pub struct NavbarModifiers {
    /// Palette color.
    pub color: Option<Modifier<Color>>,
    /// Fixed placement.
    pub fixed: Option<Modifier<NavbarFixed>>,
    /// Transparent hover and active items.
    pub transparent: bool,
}

impl NavbarModifiers {
    /// `navbar`, `is-{color}`, `is-fixed-{fixed}`, `is-transparent`.
    pub fn classes(&self) -> ClassList {
        ClassList::new(CONTAINER, "navbar")
            .modifier("is-", self.color.as_ref())
            .modifier("is-fixed-", self.fixed.as_ref())
            .flag("is-transparent", self.transparent)
    }

    /// Class Bulma expects on `<html>` while a fixed navbar is mounted.
    pub fn document_class(&self) -> Option<String> {
        self.fixed
            .as_ref()
            .and_then(Modifier::known)
            .map(|fixed| format!("has-navbar-fixed-{}", fixed.token()))
    }
}

#[component]
/// Navbar root. Owns the mobile-menu state toggled by [`NavbarBurger`].
pub fn NavbarContainer(
    /// Initial menu state. A reactive value keeps the navbar in sync with it.
    #[prop(optional, into)]
    active: Option<MaybeSignal<bool>>,
    /// Palette color.
    #[prop(optional, into)] color: Option<Modifier<Color>>,
    /// Pin the navbar to the top or bottom of the viewport.
    #[prop(optional, into)] fixed: Option<Modifier<NavbarFixed>>,
    /// Transparent hover and active items.
    #[prop(optional)] transparent: bool,
    /// Collapse the menu on pointer activity outside the navbar.
    #[prop(optional)]
    close_on_blur: bool,
    /// Collapse the menu on Escape.
    #[prop(optional)]
    close_on_esc: bool,
    /// Notified after every menu-state transition the navbar makes.
    #[prop(optional)]
    on_active_change: Option<Callback<bool>>,
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

    let context = NavbarContext::from_state(state, on_active_change);
    provide_context(context);
    install_dismiss_listeners(
        DismissPolicy {
            close_on_blur,
            close_on_esc,
        },
        Some(node_ref),
        Callback::new(move |()| context.set_active.call(false)),
    );

    let modifiers = NavbarModifiers {
        color: themed_color(color, &theme),
        fixed,
        transparent,
    };
    if let Some(document_class) = modifiers.document_class() {
        sync_document_class(theme.transform(&document_class), Signal::derive(|| true));
    }
    let list = modifiers.classes().custom(class.as_deref());
    list.report();
    let class = list.render(&theme);

    Host::new("nav", Signal::derive(move || class.clone()))
        .render_as(render_as)
        .node_ref(node_ref)
        .attribute("role", attr("navigation"))
        .forward(attrs)
        .children(children)
        .render()
}

pub use self::{NavbarContainer as Navbar, NavbarContainerProps as NavbarProps};

#[component]
/// Hamburger button that expands the navbar menu on touch devices.
pub fn NavbarBurger(
    /// Called on click, before any state change.
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Inline style. `outline: none` is always kept.
    #[prop(optional, into)] style: Option<Style>,
    /// Explicit context; defaults to the enclosing [`Navbar`].
    #[prop(optional)]
    context: Option<NavbarContext>,
    /// Extra classes, appended after the generated ones.
    #[prop(optional, into)] class: Option<String>,
    /// Tag or component rendered instead of the default element.
    #[prop(optional, into)] render_as: Option<RenderTarget>,
    /// Reference to the rendered element.
    #[prop(optional)] node_ref: ElementRef,
    /// `attr:*` attributes forwarded to the rendered element.
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    /// Burger lines. Defaults to three spans.
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let context = use_navbar_context("NavbarBurger", context);
    let theme = use_theme();
    let active = context.active;
    let class = Signal::derive(move || {
        ClassList::new("NavbarBurger", "navbar-burger")
            .flag("is-active", active.get())
            .custom(class.as_deref())
            .render(&theme)
    });
    let children: Children = children.unwrap_or_else(|| {
        Box::new(|| {
            view! {
                <span aria-hidden="true"></span>
                <span aria-hidden="true"></span>
                <span aria-hidden="true"></span>
            }
        })
    });

    Host::new("div", class)
        .render_as(render_as)
        .node_ref(node_ref)
        .attribute("role", attr("button"))
        .attribute("tabindex", attr("0"))
        .attribute("aria-label", attr("menu"))
        .attribute("aria-expanded", attr(move || active.get().to_string()))
        .style(FOCUS_STYLE, style)
        .on_click(Callback::new(move |ev| burger_click(context, on_click, ev)))
        .forward(attrs)
        .children(Some(children))
        .render()
}

#[component]
/// Collapsible menu revealed by [`NavbarBurger`].
pub fn NavbarMenu(
    /// Explicit context; defaults to the enclosing [`Navbar`].
    #[prop(optional)]
    context: Option<NavbarContext>,
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
    let active = use_navbar_context("NavbarMenu", context).active;
    let theme = use_theme();
    let class = Signal::derive(move || {
        ClassList::new("NavbarMenu", "navbar-menu")
            .flag("is-active", active.get())
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

#[component]
/// Always-visible left part of the navbar, usually the logo and burger.
pub fn NavbarBrand(
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
        ClassList::new("NavbarBrand", "navbar-brand").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Left side of the navbar menu.
pub fn NavbarStart(
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
        ClassList::new("NavbarStart", "navbar-start").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Right side of the navbar menu.
pub fn NavbarEnd(
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
        ClassList::new("NavbarEnd", "navbar-end").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Modifier properties of [`NavbarItem`].
pub struct NavbarItemModifiers {
    /// Current page.
    pub active: bool,
    /// Item wraps a [`NavbarLink`] and [`NavbarDropdown`].
    pub dropdown: bool,
    /// Dropdown opens upwards. Needs `dropdown`.
    pub up: bool,
    /// Dropdown opens on hover. Needs `dropdown`.
    pub hoverable: bool,
    /// Item grows to fill the available space.
    pub expanded: bool,
    /// Tab-style underline.
    pub tab: bool,
}

impl NavbarItemModifiers {
    /// `navbar-item`, `is-active`, `has-dropdown`, `has-dropdown-up`, `is-hoverable`,
    /// `is-expanded`, `is-tab`.
    pub fn classes(&self) -> ClassList {
        ClassList::new("NavbarItem", "navbar-item")
            .flag("is-active", self.active)
            .flag("has-dropdown", self.dropdown)
            .flag("has-dropdown-up", self.dropdown && self.up)
            .flag("is-hoverable", self.dropdown && self.hoverable)
            .flag("is-expanded", self.expanded)
            .flag("is-tab", self.tab)
    }

    /// Dropdown items wrap other items, so they render as `div` rather than `a`.
    pub fn default_tag(&self) -> &'static str {
        if self.dropdown {
            "div"
        } else {
            "a"
        }
    }
}

#[component]
/// Navbar entry: a link, or a dropdown holder when `dropdown` is set.
pub fn NavbarItem(
    /// Highlight as the current entry.
    #[prop(optional)] active: bool,
    /// Item holds a [`NavbarLink`] and a [`NavbarDropdown`].
    #[prop(optional)] dropdown: bool,
    /// Dropdown opens upwards. Needs `dropdown`.
    #[prop(optional)] up: bool,
    /// Dropdown opens on hover. Needs `dropdown`.
    #[prop(optional)] hoverable: bool,
    /// Grow to fill the available space.
    #[prop(optional)] expanded: bool,
    /// Tab-style underline.
    #[prop(optional)] tab: bool,
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
    let modifiers = NavbarItemModifiers {
        active,
        dropdown,
        up,
        hoverable,
        expanded,
        tab,
    };
    render_static(
        modifiers.classes().custom(class.as_deref()),
        modifiers.default_tag(),
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Dropdown label inside a `dropdown` [`NavbarItem`].
pub fn NavbarLink(
    /// Hide the dropdown arrow.
    #[prop(optional)] arrowless: bool,
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
        ClassList::new("NavbarLink", "navbar-link")
            .flag("is-arrowless", arrowless)
            .custom(class.as_deref()),
        "a",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Dropdown panel inside a `dropdown` [`NavbarItem`].
pub fn NavbarDropdown(
    /// Boxed dropdown, for transparent navbars.
    #[prop(optional)] boxed: bool,
    /// Panel alignment.
    #[prop(optional, into)] align: Option<Modifier<NavbarDropdownAlign>>,
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
        navbar_dropdown_classes(boxed, align.as_ref()).custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

/// `navbar-dropdown`, `is-boxed`, `is-{align}`.
pub fn navbar_dropdown_classes(
    boxed: bool,
    align: Option<&Modifier<NavbarDropdownAlign>>,
) -> ClassList {
    ClassList::new("NavbarDropdown", "navbar-dropdown")
        .flag("is-boxed", boxed)
        .modifier("is-", align)
}

#[component]
/// Horizontal rule between navbar dropdown items.
pub fn NavbarDivider(
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
        ClassList::new("NavbarDivider", "navbar-divider").custom(class.as_deref()),
        "hr",
        render_as,
        node_ref,
        attrs,
        None,
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn burger_click_calls_handler_then_activates() {
        let _ = create_runtime();
        for has_on_click in [false, true] {
            let log = Rc::new(RefCell::new(Vec::new()));
            let context = {
                let log = Rc::clone(&log);
                NavbarContext {
                    active: Signal::derive(|| false),
                    set_active: Callback::new(move |next: bool| {
                        log.borrow_mut().push(format!("set_active({next})"))
                    }),
                }
            };
            let on_click = has_on_click.then(|| {
                let log = Rc::clone(&log);
                Callback::new(move |()| log.borrow_mut().push("on_click".to_string()))
            });

            burger_click(context, on_click, ());

            let expected = if has_on_click {
                vec!["on_click", "set_active(true)"]
            } else {
                vec!["set_active(true)"]
            };
            assert_eq!(*log.borrow(), expected);
        }
    }

    #[test]
    fn burger_click_on_active_menu_collapses_it() {
        let _ = create_runtime();
        let state = OpenState::new(true);
        let context = NavbarContext::from_state(state, None);

        burger_click(context, None::<Callback<()>>, ());

        assert!(!state.is_open_untracked());
    }

    #[test]
    fn state_backed_context_notifies_transitions() {
        let _ = create_runtime();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let changes = Rc::clone(&changes);
            Callback::new(move |next: bool| changes.borrow_mut().push(next))
        };
        let context = NavbarContext::from_state(OpenState::default(), Some(on_change));

        context.set_active.call(false);
        context.set_active.call(true);
        context.set_active.call(true);

        assert_eq!(*changes.borrow(), vec![true]);
        assert!(context.active.get_untracked());
    }

    #[test]
    fn navbar_classes_and_document_class() {
        let modifiers = NavbarModifiers {
            color: Some(Color::Dark.into()),
            fixed: Some(NavbarFixed::Top.into()),
            transparent: true,
        };
        assert_eq!(
            modifiers.classes().tokens(),
            vec!["navbar", "is-dark", "is-fixed-top", "is-transparent"]
        );
        assert_eq!(
            modifiers.document_class().as_deref(),
            Some("has-navbar-fixed-top")
        );
    }

    #[test]
    fn invalid_fixed_placement_has_no_document_class() {
        let modifiers = NavbarModifiers {
            fixed: Some("left".into()),
            ..NavbarModifiers::default()
        };
        assert_eq!(modifiers.classes().tokens(), vec!["navbar"]);
        assert_eq!(modifiers.classes().errors().len(), 1);
        assert_eq!(modifiers.document_class(), None);
    }

    #[test]
    fn colors_never_leak_other_modifiers() {
        for color in Color::ALL {
            let tokens = NavbarModifiers {
                color: Some((*color).into()),
                ..NavbarModifiers::default()
            }
            .classes()
            .tokens();
            assert_eq!(tokens, vec!["navbar".to_string(), format!("is-{}", color.token())]);
        }
    }

    #[test]
    fn item_dropdown_modifiers_need_dropdown() {
        let plain = NavbarItemModifiers {
            up: true,
            hoverable: true,
            active: true,
            ..NavbarItemModifiers::default()
        };
        assert_eq!(plain.classes().tokens(), vec!["navbar-item", "is-active"]);
        assert_eq!(plain.default_tag(), "a");

        let dropdown = NavbarItemModifiers {
            dropdown: true,
            ..plain
        };
        assert_eq!(
            dropdown.classes().tokens(),
            vec![
                "navbar-item",
                "is-active",
                "has-dropdown",
                "has-dropdown-up",
                "is-hoverable"
            ]
        );
        assert_eq!(dropdown.default_tag(), "div");
    }

    #[test]
    fn navbar_dropdown_alignment() {
        assert_eq!(
            navbar_dropdown_classes(true, Some(&NavbarDropdownAlign::Right.into())).tokens(),
            vec!["navbar-dropdown", "is-boxed", "is-right"]
        );
    }

    #[test]
    fn missing_context_falls_back_to_collapsed_menu() {
        let _ = create_runtime();
        let context = use_navbar_context("NavbarMenu", None);
        context.set_active.call(true);
        assert!(!context.active.get_untracked());
    }
}
