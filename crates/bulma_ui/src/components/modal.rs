//! Bulma modal: an overlay container, its backdrop and close button, and card parts.

use super::*;
use crate::ModalCloseSize;

const CONTAINER: &str = "Modal";

#[derive(Clone, Copy)]
/// Close capability and dismiss policy a [`Modal`] shares with its parts.
pub struct ModalContext {
    /// Whether the modal is shown.
    pub active: Signal<bool>,
    /// Closes the modal.
    pub close: Callback<()>,
    /// Close when the background is clicked.
    pub close_on_blur: bool,
    /// Close on Escape.
    pub close_on_esc: bool,
}

impl ModalContext {
    /// Builds a context around `state`. `on_close` fires once per real close.
    pub fn from_state(
        state: OpenState,
        policy: DismissPolicy,
        on_close: Option<Callback<()>>,
    ) -> Self {
        Self {
            active: state.signal(),
            close: Callback::new(move |()| {
                if state.close() {
                    if let Some(on_close) = on_close {
                        on_close.call(());
                    }
                }
            }),
            close_on_blur: policy.close_on_blur,
            close_on_esc: policy.close_on_esc,
        }
    }

    /// Context used by parts rendered outside a [`Modal`]: hidden, close ignored.
    pub fn initial() -> Self {
        Self {
            active: Signal::derive(|| false),
            close: Callback::new(|()| {}),
            close_on_blur: false,
            close_on_esc: true,
        }
    }
}

fn use_modal_context(component: &'static str, explicit: Option<ModalContext>) -> ModalContext {
    resolve_context(explicit, component, CONTAINER, ModalContext::initial)
}

/// Background click: caller handler, then close when the modal dismisses on blur.
pub fn background_click<E: 'static>(context: ModalContext, on_click: Option<Callback<E>>, event: E) {
    run_click_sequence(event, on_click, || {
        if context.close_on_blur {
            context.close.call(());
        }
    });
}

/// Close-button click: caller handler, then close.
pub fn close_click<E: 'static>(context: ModalContext, on_click: Option<Callback<E>>, event: E) {
    run_click_sequence(event, on_click, || context.close.call(()));
}

/// Class put on `<html>` while a clipping modal is shown.
pub fn modal_document_class(clipped: bool) -> Option<&'static str> {
    clipped.then_some("is-clipped")
}

/// `modal`, `is-active`.
pub fn modal_classes(active: bool) -> ClassList {
    ClassList::new(CONTAINER, "modal").flag("is-active", active)
}

#[component]
/// Modal root. Shows while `active`, closes on Escape and optionally on background clicks.
pub fn ModalContainer(
    /// Whether the modal is shown. A reactive value keeps the modal in sync with it.
    #[prop(optional, into)]
    active: MaybeSignal<bool>,
    /// Close when the background is clicked.
    #[prop(optional)] close_on_blur: bool,
    /// Close on Escape.
    #[prop(default = true)] close_on_esc: bool,
    /// Stop the page behind the modal from scrolling while it is shown.
    #[prop(default = true)]
    clipped: bool,
    /// Called once each time the modal closes itself.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
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
    let state = OpenState::new(active.get_untracked());
    create_effect(move |_| {
        state.set(active.get());
    });

    let policy = DismissPolicy {
        close_on_blur,
        close_on_esc,
    };
    let context = ModalContext::from_state(state, policy, on_close);
    provide_context(context);
    // The background handles blur; only Escape needs a document listener.
    install_dismiss_listeners(policy, None, context.close);
    if let Some(document_class) = modal_document_class(clipped) {
        sync_document_class(theme.transform(document_class), state.signal());
    }

    let class = Signal::derive(move || {
        modal_classes(state.is_open())
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

pub use self::{ModalContainer as Modal, ModalContainerProps as ModalProps};

#[component]
/// Backdrop behind the modal content.
pub fn ModalBackground(
    /// Called on click, before any state change.
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Explicit context; defaults to the enclosing [`Modal`].
    #[prop(optional)]
    context: Option<ModalContext>,
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
    let context = use_modal_context("ModalBackground", context);
    let list = ClassList::new("ModalBackground", "modal-background").custom(class.as_deref());
    let class = list.render(&use_theme());

    Host::new("div", Signal::derive(move || class.clone()))
        .render_as(render_as)
        .node_ref(node_ref)
        .on_click(Callback::new(move |ev| background_click(context, on_click, ev)))
        .forward(attrs)
        .children(children)
        .render()
}

#[component]
/// Close button in the modal's top-right corner.
pub fn ModalClose(
    /// Button size. Defaults to large.
    #[prop(optional, into)] size: Option<Modifier<ModalCloseSize>>,
    /// Called on click, before any state change.
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Explicit context; defaults to the enclosing [`Modal`].
    #[prop(optional)]
    context: Option<ModalContext>,
    /// Extra classes, appended after the generated ones.
    #[prop(optional, into)] class: Option<String>,
    /// Tag or component rendered instead of the default element.
    #[prop(optional, into)] render_as: Option<RenderTarget>,
    /// Reference to the rendered element.
    #[prop(optional)] node_ref: ElementRef,
    /// `attr:*` attributes forwarded to the rendered element.
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let context = use_modal_context("ModalClose", context);
    let size = size.unwrap_or(Modifier::Known(ModalCloseSize::Large));
    let list = ClassList::new("ModalClose", "modal-close")
        .modifier("is-", Some(&size))
        .custom(class.as_deref());
    list.report();
    let class = list.render(&use_theme());

    Host::new("button", Signal::derive(move || class.clone()))
        .render_as(render_as)
        .node_ref(node_ref)
        .attribute("type", attr("button"))
        .attribute("aria-label", attr("close"))
        .on_click(Callback::new(move |ev| close_click(context, on_click, ev)))
        .forward(attrs)
        .render()
}

#[component]
/// Free-form modal content box.
pub fn ModalContent(
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
        ClassList::new("ModalContent", "modal-content").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Card-style modal body with head, body and foot sections.
pub fn ModalCard(
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
        ClassList::new("ModalCard", "modal-card").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Title bar of a [`ModalCard`].
pub fn ModalCardHead(
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
        ClassList::new("ModalCardHead", "modal-card-head").custom(class.as_deref()),
        "header",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Title text inside a [`ModalCardHead`].
pub fn ModalCardTitle(
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
        ClassList::new("ModalCardTitle", "modal-card-title").custom(class.as_deref()),
        "p",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Scrollable body of a [`ModalCard`].
pub fn ModalCardBody(
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
        ClassList::new("ModalCardBody", "modal-card-body").custom(class.as_deref()),
        "section",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Action row of a [`ModalCard`].
pub fn ModalCardFoot(
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
        ClassList::new("ModalCardFoot", "modal-card-foot").custom(class.as_deref()),
        "footer",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counting_context(closes: &Rc<Cell<usize>>, close_on_blur: bool) -> ModalContext {
        let closes = Rc::clone(closes);
        ModalContext {
            active: Signal::derive(|| true),
            close: Callback::new(move |()| closes.set(closes.get() + 1)),
            close_on_blur,
            close_on_esc: true,
        }
    }

    #[test]
    fn container_classes_track_active_state() {
        assert_eq!(modal_classes(false).tokens(), vec!["modal"]);
        assert_eq!(modal_classes(true).tokens(), vec!["modal", "is-active"]);
    }

    #[test]
    fn clipping_modal_marks_the_document() {
        assert_eq!(modal_document_class(true), Some("is-clipped"));
        assert_eq!(modal_document_class(false), None);
        assert_eq!(
            Theme::default().with_prefix("bulma-").transform("is-clipped"),
            "bulma-is-clipped"
        );
    }

    #[test]
    fn background_click_matrix() {
        let _ = create_runtime();
        for has_on_click in [false, true] {
            for close_on_blur in [false, true] {
                let clicks = Rc::new(Cell::new(0));
                let closes = Rc::new(Cell::new(0));
                let on_click = has_on_click.then(|| {
                    let clicks = Rc::clone(&clicks);
                    Callback::new(move |()| clicks.set(clicks.get() + 1))
                });

                background_click(counting_context(&closes, close_on_blur), on_click, ());

                assert_eq!(clicks.get(), usize::from(has_on_click));
                assert_eq!(closes.get(), usize::from(close_on_blur));
            }
        }
    }

    #[test]
    fn background_click_runs_handler_before_close() {
        let _ = create_runtime();
        let log = Rc::new(RefCell::new(Vec::new()));
        let context = {
            let log = Rc::clone(&log);
            ModalContext {
                active: Signal::derive(|| true),
                close: Callback::new(move |()| log.borrow_mut().push("close")),
                close_on_blur: true,
                close_on_esc: true,
            }
        };
        let on_click = {
            let log = Rc::clone(&log);
            Callback::new(move |()| log.borrow_mut().push("on_click"))
        };

        background_click(context, Some(on_click), ());

        assert_eq!(*log.borrow(), vec!["on_click", "close"]);
    }

    #[test]
    fn close_button_always_closes() {
        let _ = create_runtime();
        let closes = Rc::new(Cell::new(0));
        close_click(counting_context(&closes, false), None::<Callback<()>>, ());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn state_backed_close_notifies_once() {
        let _ = create_runtime();
        let notified = Rc::new(Cell::new(0));
        let on_close = {
            let notified = Rc::clone(&notified);
            Callback::new(move |()| notified.set(notified.get() + 1))
        };
        let state = OpenState::new(true);
        let context = ModalContext::from_state(
            state,
            DismissPolicy {
                close_on_blur: true,
                close_on_esc: true,
            },
            Some(on_close),
        );

        context.close.call(());
        context.close.call(());

        assert_eq!(notified.get(), 1);
        assert!(!context.active.get_untracked());
    }

    #[test]
    fn escape_ignored_when_disabled() {
        let _ = create_runtime();
        let state = OpenState::new(true);
        let policy = DismissPolicy {
            close_on_blur: false,
            close_on_esc: false,
        };
        let context = ModalContext::from_state(state, policy, None);

        assert!(!policy.handle_key("Escape", || context.close.call(())));
        assert!(state.is_open_untracked());
    }

    #[test]
    fn initial_context_keeps_defaults() {
        let _ = create_runtime();
        let context = ModalContext::initial();
        assert!(!context.close_on_blur);
        assert!(context.close_on_esc);
        assert!(!context.active.get_untracked());
    }
}
