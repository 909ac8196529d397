//! Bulma `hero` layout section and its parts.

use super::*;
use crate::HeroSize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Modifier properties of [`Hero`].
pub struct HeroModifiers {
    /// Palette color.
    pub color: Option<Modifier<Color>>,
    /// Gradient background (`is-bold`).
    pub gradient: bool,
    /// Section height.
    pub size: Option<Modifier<HeroSize>>,
}

impl HeroModifiers {
    /// `hero`, `is-bold`, `is-{color}`, `is-{size}`.
    pub fn classes(&self) -> ClassList {
        ClassList::new("Hero", "hero")
            .flag("is-bold", self.gradient)
            .modifier("is-", self.color.as_ref())
            .modifier("is-", self.size.as_ref())
    }
}

#[component]
/// Full-width banner section.
pub fn Hero(
    /// Palette color.
    #[prop(optional, into)] color: Option<Modifier<Color>>,
    /// Bold gradient background.
    #[prop(optional)] gradient: bool,
    /// Height modifier.
    #[prop(optional, into)] size: Option<Modifier<HeroSize>>,
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
    let modifiers = HeroModifiers {
        color: themed_color(color, &theme),
        gradient,
        size,
    };
    render_static(
        modifiers.classes().custom(class.as_deref()),
        "section",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Top slot of a [`Hero`], usually holding a navbar.
pub fn HeroHead(
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
        ClassList::new("HeroHead", "hero-head").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Main slot of a [`Hero`].
pub fn HeroBody(
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
        ClassList::new("HeroBody", "hero-body").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Bottom slot of a [`Hero`].
pub fn HeroFoot(
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
        ClassList::new("HeroFoot", "hero-foot").custom(class.as_deref()),
        "div",
        render_as,
        node_ref,
        attrs,
        children,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ModifierToken;

    #[test]
    fn gradient_renders_bold_before_palette_classes() {
        let modifiers = HeroModifiers {
            color: Some(Color::Primary.into()),
            gradient: true,
            size: Some(HeroSize::FullheightWithNavbar.into()),
        };
        assert_eq!(
            modifiers.classes().tokens(),
            vec!["hero", "is-bold", "is-primary", "is-fullheight-with-navbar"]
        );
    }

    #[test]
    fn every_size_maps_to_its_modifier() {
        for size in HeroSize::ALL {
            let tokens = HeroModifiers {
                size: Some((*size).into()),
                ..HeroModifiers::default()
            }
            .classes()
            .tokens();
            assert_eq!(tokens, vec!["hero".to_string(), format!("is-{}", size.token())]);
        }
    }

    #[test]
    fn unknown_color_leaves_only_base_class() {
        let list = HeroModifiers {
            color: Some("rainbow".into()),
            ..HeroModifiers::default()
        }
        .classes();
        assert_eq!(list.tokens(), vec!["hero"]);
        assert_eq!(list.errors().len(), 1);
    }

    #[test]
    fn prefixed_theme_renders_hero_classes() {
        let theme = Theme::default().with_prefix("bulma-");
        let rendered = HeroModifiers {
            color: Some(Color::Info.into()),
            ..HeroModifiers::default()
        }
        .classes()
        .custom(Some("landing"))
        .render(&theme);
        assert_eq!(rendered, "bulma-hero bulma-is-info landing");
    }
}
