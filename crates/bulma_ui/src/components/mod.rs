//! Bulma component families.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::disclosure::install_dismiss_listeners;
use crate::generic::{attr, Host};
use crate::{
    report, run_click_sequence, use_theme, ClassList, Color, DismissPolicy,
    ElementRef, Modifier, OpenState, PropError, RenderTarget, Style, Theme,
};

pub mod dropdown;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod progress;

/// Inline style every focusable compound trigger carries.
const FOCUS_STYLE: &[(&str, &str)] = &[("outline", "none")];

/// Caller color, falling back to the theme's default palette color.
pub(crate) fn themed_color(color: Option<Modifier<Color>>, theme: &Theme) -> Option<Modifier<Color>> {
    color.or_else(|| theme.default_color.map(Modifier::Known))
}

/// Explicitly injected context, else the provided one, else `initial`.
pub(crate) fn resolve_context<T: Clone + 'static>(
    explicit: Option<T>,
    component: &'static str,
    container: &'static str,
    initial: impl FnOnce() -> T,
) -> T {
    if let Some(context) = explicit {
        return context;
    }
    use_context::<T>().unwrap_or_else(|| {
        report(&PropError::MissingContext {
            component,
            container,
        });
        initial()
    })
}

/// Keeps `class` on `<html>` while `present` holds, and removes it on cleanup.
pub(crate) fn sync_document_class(class: String, present: Signal<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let Some(root) = document().document_element() else {
            return;
        };
        let tokens = root.class_list();
        let held = Rc::new(Cell::new(false));
        create_effect({
            let tokens = tokens.clone();
            let class = class.clone();
            let held = Rc::clone(&held);
            move |_| {
                let wanted = present.get();
                if wanted == held.get() {
                    return;
                }
                let result = if wanted {
                    tokens.add_1(&class)
                } else {
                    tokens.remove_1(&class)
                };
                match result {
                    Ok(()) => held.set(wanted),
                    Err(err) => logging::warn!("document class `{class}` update failed: {err:?}"),
                }
            }
        });
        on_cleanup(move || {
            if held.get() {
                if let Err(err) = tokens.remove_1(&class) {
                    logging::warn!("document class `{class}` remove failed: {err:?}");
                }
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (class, present);
}

/// Renders a component whose class list never changes after the first render.
pub(crate) fn render_static(
    list: ClassList,
    default_tag: &'static str,
    render_as: Option<RenderTarget>,
    node_ref: ElementRef,
    attrs: Vec<(&'static str, Attribute)>,
    children: Option<Children>,
) -> View {
    list.report();
    let class = list.render(&use_theme());
    Host::new(default_tag, Signal::derive(move || class.clone()))
        .render_as(render_as)
        .node_ref(node_ref)
        .forward(attrs)
        .children(children)
        .render()
}
