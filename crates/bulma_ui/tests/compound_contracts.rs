use std::cell::RefCell;
use std::rc::Rc;

use bulma_ui::dropdown::{trigger_click, DropdownContext, DropdownModifiers};
use bulma_ui::modal::{background_click, ModalContext};
use bulma_ui::navbar::{burger_click, NavbarContext};
use bulma_ui::progress::ProgressModifiers;
use bulma_ui::{
    active_listener_count, merge_style, Color, DismissListeners, DismissPolicy, ElementRef,
    Modifier, OpenState, PropError, Style, Theme,
};
use leptos::{create_runtime, Callable, Callback, SignalGetUntracked};
use pretty_assertions::assert_eq;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Callback<()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let make = {
        let log = Rc::clone(&log);
        move |entry: &str| {
            let log = Rc::clone(&log);
            let entry = entry.to_string();
            Callback::new(move |()| log.borrow_mut().push(entry.clone()))
        }
    };
    (log, make)
}

#[test]
fn navbar_burger_scenario() {
    let _ = create_runtime();
    let (log, make) = recorder();
    let state = OpenState::new(false);
    let context = NavbarContext::from_state(state, Some({
        let log = Rc::clone(&log);
        Callback::new(move |next: bool| log.borrow_mut().push(format!("set_active({next})")))
    }));

    burger_click(context, Some(make("on_click")), ());

    assert_eq!(*log.borrow(), vec!["on_click", "set_active(true)"]);
    assert!(context.active.get_untracked());
}

#[test]
fn modal_background_with_blur_closes_exactly_once_after_handler() {
    let _ = create_runtime();
    let (log, make) = recorder();
    let state = OpenState::new(true);
    let context = ModalContext::from_state(
        state,
        DismissPolicy {
            close_on_blur: true,
            close_on_esc: true,
        },
        Some(make("on_close")),
    );

    background_click(context, Some(make("on_click")), ());
    background_click(context, None, ());

    assert_eq!(*log.borrow(), vec!["on_click", "on_close"]);
    assert!(!state.is_open_untracked());
}

#[test]
fn dropdown_trigger_toggles_state_backed_context() {
    let _ = create_runtime();
    let state = OpenState::default();
    let context = DropdownContext::from_state(state, DismissPolicy::default(), None);

    trigger_click(context, None::<Callback<()>>, ());
    assert!(state.is_open_untracked());
    trigger_click(context, None::<Callback<()>>, ());
    assert!(!state.is_open_untracked());
}

#[test]
fn progress_classes_pass_through_theme() {
    let modifiers = ProgressModifiers {
        color: Some("primary".into()),
        size: None,
    };
    assert_eq!(modifiers.classes().render(&Theme::default()), "progress is-primary");
    assert_eq!(
        modifiers.classes().render(&Theme::default().with_prefix("bulma-")),
        "bulma-progress bulma-is-primary"
    );
}

#[test]
fn invalid_values_warn_and_are_omitted_consistently() {
    let build = || {
        DropdownModifiers {
            color: Some(Modifier::<Color>::from("magenta")),
            ..DropdownModifiers::default()
        }
        .classes(false)
    };
    let first = build();
    let second = build();

    assert_eq!(first.tokens(), vec!["dropdown"]);
    assert_eq!(first, second);
    assert!(matches!(
        first.errors(),
        [PropError::InvalidValue { component: "Dropdown", prop: "color", .. }]
    ));
}

#[test]
fn mount_unmount_cycles_do_not_leak_listeners() {
    let _ = create_runtime();
    let before = active_listener_count();
    let close = Callback::new(|()| {});

    for _ in 0..10 {
        let dropdown = DismissListeners::install(
            DismissPolicy {
                close_on_blur: true,
                close_on_esc: true,
            },
            Some(ElementRef::default()),
            close,
        );
        let modal = DismissListeners::install(
            DismissPolicy {
                close_on_blur: true,
                close_on_esc: true,
            },
            None,
            close,
        );
        assert_eq!(active_listener_count(), before + 3);
        drop(modal);
        drop(dropdown);
    }

    assert_eq!(active_listener_count(), before);
    close.call(());
}

#[test]
fn required_focus_style_survives_caller_style() {
    let style = Style::from("margin: 10px; outline: 1px dashed");
    let merged = merge_style(&[("outline", "none")], Some(&style));
    let parsed = Style::parse(&merged);

    assert_eq!(parsed.get("margin"), Some("10px"));
    assert_eq!(parsed.get("outline"), Some("none"));
}
