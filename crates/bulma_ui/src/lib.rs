//! Typed Leptos components for the Bulma CSS framework.
//!
//! Every component maps typed modifier properties onto Bulma's class
//! vocabulary through [`ClassList`], forwards `attr:*` attributes and a
//! [`ElementRef`] to its host element, and can render as another tag or
//! component through [`RenderTarget`].
//!
//! Compound families ([`dropdown`], [`modal`], [`navbar`]) own their open
//! state in a container that publishes a `Copy` context handle to its parts.
//! Parts also accept that handle explicitly, and fall back to an inert
//! initial value when rendered on their own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod components;
mod disclosure;
mod error;
mod generic;
mod modifiers;
mod theme;

pub use classes::{classes, merge_style, ClassList, Style};
pub use components::{dropdown, hero, modal, navbar, progress};
pub use disclosure::{
    active_listener_count, run_click_sequence, DismissListeners, DismissPolicy, OpenState,
};
pub use error::{report, PropError};
pub use generic::{ElementRef, RenderProps, RenderTarget};
pub use modifiers::{
    Color, DropdownAlign, HeroSize, ModalCloseSize, Modifier, ModifierToken, NavbarDropdownAlign,
    NavbarFixed, ProgressSize,
};
pub use theme::{use_theme, Theme, ThemeError, ThemeProvider};

/// Convenience imports for applications composing Bulma components.
pub mod prelude {
    pub use crate::dropdown::{
        Dropdown, DropdownContainer, DropdownContent, DropdownContext, DropdownDivider,
        DropdownItem, DropdownMenu, DropdownTrigger,
    };
    pub use crate::hero::{Hero, HeroBody, HeroFoot, HeroHead};
    pub use crate::modal::{
        Modal, ModalBackground, ModalCard, ModalCardBody, ModalCardFoot, ModalCardHead,
        ModalCardTitle, ModalClose, ModalContainer, ModalContent, ModalContext,
    };
    pub use crate::navbar::{
        Navbar, NavbarBrand, NavbarBurger, NavbarContainer, NavbarContext, NavbarDivider,
        NavbarDropdown, NavbarEnd, NavbarItem, NavbarLink, NavbarMenu, NavbarStart,
    };
    pub use crate::progress::Progress;
    pub use crate::{
        Color, DropdownAlign, ElementRef, HeroSize, ModalCloseSize, Modifier,
        NavbarDropdownAlign, NavbarFixed, ProgressSize, RenderTarget, Style, Theme,
        ThemeProvider,
    };
}
