//! Enumerated modifier domains and the boundary type that validates them.

use serde::{Deserialize, Serialize};

use crate::PropError;

/// A closed set of values that maps one-to-one onto Bulma modifier tokens.
pub trait ModifierToken: Copy + PartialEq + 'static {
    /// Property name used in diagnostics.
    const PROP: &'static str;
    /// Every accepted value, in documentation order.
    const ALL: &'static [Self];

    /// Bulma token for this value, without any `is-` style prefix.
    fn token(self) -> &'static str;

    /// Looks up a value by its token.
    fn from_token(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.token() == raw)
    }

    /// Comma-separated token list for diagnostics.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|value| value.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A modifier property value as received at the component boundary.
///
/// Typed callers always produce [`Modifier::Known`]. String callers (markup
/// generated from data, JSON configuration) are parsed and land in
/// [`Modifier::Unknown`] when the token is not part of the domain.
pub enum Modifier<T> {
    /// A recognized value.
    Known(T),
    /// A value outside the domain. It contributes no class.
    Unknown(String),
}

impl<T: ModifierToken> Modifier<T> {
    /// Parses a raw token. Matching is exact: no trimming, no case folding.
    pub fn parse(raw: &str) -> Self {
        match T::from_token(raw) {
            Some(value) => Self::Known(value),
            None => Self::Unknown(raw.to_string()),
        }
    }

    /// Returns the recognized value, if any.
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unknown(_) => None,
        }
    }

    /// Validates the value on behalf of `component`.
    pub fn validate(&self, component: &'static str) -> Result<T, PropError> {
        match self {
            Self::Known(value) => Ok(*value),
            Self::Unknown(raw) => Err(PropError::InvalidValue {
                component,
                prop: T::PROP,
                value: raw.clone(),
                expected: T::expected(),
            }),
        }
    }
}

impl<T: ModifierToken> From<T> for Modifier<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: ModifierToken> From<&str> for Modifier<T> {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<T: ModifierToken> From<String> for Modifier<T> {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Bulma color palette.
pub enum Color {
    /// `is-primary`
    Primary,
    /// `is-link`
    Link,
    /// `is-info`
    Info,
    /// `is-success`
    Success,
    /// `is-warning`
    Warning,
    /// `is-danger`
    Danger,
    /// `is-white`
    White,
    /// `is-black`
    Black,
    /// `is-light`
    Light,
    /// `is-dark`
    Dark,
}

impl ModifierToken for Color {
    const PROP: &'static str = "color";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Link,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::White,
        Self::Black,
        Self::Light,
        Self::Dark,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Link => "link",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::White => "white",
            Self::Black => "black",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Progress bar sizes.
pub enum ProgressSize {
    /// `is-small`
    Small,
    /// `is-medium`
    Medium,
    /// `is-large`
    Large,
}

impl ModifierToken for ProgressSize {
    const PROP: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Hero section heights.
pub enum HeroSize {
    /// `is-medium`
    Medium,
    /// `is-large`
    Large,
    /// `is-fullheight`
    Fullheight,
    /// `is-fullheight-with-navbar`
    FullheightWithNavbar,
}

impl ModifierToken for HeroSize {
    const PROP: &'static str = "size";
    const ALL: &'static [Self] = &[
        Self::Medium,
        Self::Large,
        Self::Fullheight,
        Self::FullheightWithNavbar,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Fullheight => "fullheight",
            Self::FullheightWithNavbar => "fullheight-with-navbar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fixed navbar placement.
pub enum NavbarFixed {
    /// `is-fixed-top`
    Top,
    /// `is-fixed-bottom`
    Bottom,
}

impl ModifierToken for NavbarFixed {
    const PROP: &'static str = "fixed";
    const ALL: &'static [Self] = &[Self::Top, Self::Bottom];

    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dropdown menu alignment.
pub enum DropdownAlign {
    /// `is-right`
    Right,
}

impl ModifierToken for DropdownAlign {
    const PROP: &'static str = "align";
    const ALL: &'static [Self] = &[Self::Right];

    fn token(self) -> &'static str {
        match self {
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Navbar dropdown alignment.
pub enum NavbarDropdownAlign {
    /// `is-right`
    Right,
}

impl ModifierToken for NavbarDropdownAlign {
    const PROP: &'static str = "align";
    const ALL: &'static [Self] = &[Self::Right];

    fn token(self) -> &'static str {
        match self {
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Modal close button sizes.
pub enum ModalCloseSize {
    /// `is-small`
    Small,
    /// `is-medium`
    Medium,
    /// `is-large`
    Large,
}

impl ModifierToken for ModalCloseSize {
    const PROP: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_color_token_parses_back_to_itself() {
        for color in Color::ALL {
            assert_eq!(Modifier::<Color>::parse(color.token()), Modifier::Known(*color));
        }
    }

    #[test]
    fn hyphenated_hero_size_parses() {
        assert_eq!(
            Modifier::<HeroSize>::from("fullheight-with-navbar").known(),
            Some(HeroSize::FullheightWithNavbar)
        );
    }

    #[test]
    fn unknown_value_is_kept_verbatim_and_fails_validation() {
        let color = Modifier::<Color>::from("chartreuse");
        assert_eq!(color.known(), None);

        let err = color.validate("Progress").expect_err("chartreuse is not a color");
        match err {
            PropError::InvalidValue {
                component,
                prop,
                value,
                expected,
            } => {
                assert_eq!(component, "Progress");
                assert_eq!(prop, "color");
                assert_eq!(value, "chartreuse");
                assert!(expected.starts_with("primary, link, info"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn padded_or_cased_tokens_are_unknown() {
        assert_eq!(
            Modifier::<Color>::parse(" primary "),
            Modifier::Unknown(" primary ".to_string())
        );
        assert_eq!(Modifier::<Color>::parse("Primary").known(), None);
    }

    #[test]
    fn sizes_are_not_shared_across_domains() {
        assert_eq!(Modifier::<ProgressSize>::from("fullheight").known(), None);
        assert_eq!(Modifier::<HeroSize>::from("small").known(), None);
    }

    #[test]
    fn color_serializes_as_lowercase_token() {
        let raw = serde_json::to_string(&Color::Danger).expect("serialize color");
        assert_eq!(raw, "\"danger\"");
    }
}
