//! Browser showcase composing every `bulma_ui` component family.

use bulma_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};

/// Build-variant presets offered by the showcase dropdown.
pub const PRESETS: [&str; 3] = ["stable", "beta", "nightly"];

/// Theme applied when the host page does not pass its own JSON.
pub const DEFAULT_THEME_JSON: &str = r#"{ "default_color": "primary" }"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Persistable state of the showcase page.
pub struct ShowcaseState {
    /// Selected entry of [`PRESETS`].
    pub preset: String,
    /// Progress bar value, out of the default max of 100.
    pub progress: u8,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            preset: PRESETS[0].to_string(),
            progress: 40,
        }
    }
}

impl ShowcaseState {
    /// Restores state from a JSON snapshot, falling back to defaults.
    pub fn restore(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(raw) {
            Ok(mut state) => {
                state.progress = state.progress.min(100);
                state
            }
            Err(err) => {
                logging::warn!("showcase state ignored: {err}");
                Self::default()
            }
        }
    }

    /// Advances the progress bar, wrapping back to zero past 100.
    pub fn step_progress(&mut self) {
        self.progress = if self.progress >= 100 {
            0
        } else {
            (self.progress + 20).min(100)
        };
    }
}

fn load_theme(raw: Option<String>) -> Theme {
    let raw = raw.unwrap_or_else(|| DEFAULT_THEME_JSON.to_string());
    Theme::from_json(&raw).unwrap_or_else(|err| {
        logging::warn!("showcase theme rejected: {err}");
        Theme::default()
    })
}

#[component]
/// Showcase page: navbar, hero, progress, dropdown and modal demos.
pub fn Showcase(
    /// Theme configuration JSON; see [`Theme::from_json`].
    #[prop(optional, into)]
    theme_json: Option<String>,
    /// Serialized [`ShowcaseState`] restored on mount.
    #[prop(optional, into)]
    restored_state: Option<String>,
) -> impl IntoView {
    let theme = load_theme(theme_json);
    let state = create_rw_signal(ShowcaseState::restore(restored_state.as_deref()));
    let modal_open = create_rw_signal(false);
    let menu_open = create_rw_signal(false);

    create_effect(move |_| {
        if let Ok(snapshot) = serde_json::to_string(&state.get()) {
            logging::log!("showcase state: {snapshot}");
        }
    });

    let progress = Signal::derive(move || f64::from(state.get().progress));

    view! {
        <ThemeProvider theme=theme>
            <Navbar
                color=Color::Dark
                fixed=NavbarFixed::Top
                close_on_esc=true
                on_active_change=Callback::new(move |open: bool| menu_open.set(open))
            >
                <NavbarBrand>
                    <NavbarItem attr:href="#">
                        <strong>"bulma_ui"</strong>
                    </NavbarItem>
                    <NavbarBurger />
                </NavbarBrand>
                <NavbarMenu>
                    <NavbarStart>
                        <NavbarItem active=true attr:href="#">"Components"</NavbarItem>
                        <NavbarItem dropdown=true hoverable=true>
                            <NavbarLink>"More"</NavbarLink>
                            <NavbarDropdown boxed=true>
                                <NavbarItem attr:href="#">"Theme"</NavbarItem>
                                <NavbarDivider />
                                <NavbarItem attr:href="#">"Changelog"</NavbarItem>
                            </NavbarDropdown>
                        </NavbarItem>
                    </NavbarStart>
                    <NavbarEnd>
                        <NavbarItem>
                            {move || if menu_open.get() { "menu open" } else { "menu closed" }}
                        </NavbarItem>
                    </NavbarEnd>
                </NavbarMenu>
            </Navbar>

            <Hero color=Color::Info gradient=true size=HeroSize::Medium>
                <HeroBody>
                    <p class="title">"Bulma components"</p>
                    <p class="subtitle">"Typed modifiers, compound parts, theme-aware classes."</p>
                </HeroBody>
            </Hero>

            <section class="section">
                <Progress color=Color::Primary size=ProgressSize::Small value=progress />
                <button
                    class="button is-small"
                    on:click=move |_| state.update(ShowcaseState::step_progress)
                >
                    "Step progress"
                </button>

                <Dropdown class="ml-3">
                    <DropdownTrigger>
                        <span class="button">
                            {move || format!("Preset: {}", state.get().preset)}
                        </span>
                    </DropdownTrigger>
                    <DropdownMenu>
                        <DropdownContent>
                            {PRESETS
                                .into_iter()
                                .map(|preset| {
                                    view! {
                                        <DropdownItem
                                            active=Signal::derive(move || state.get().preset == preset)
                                            on_click=Callback::new(move |_| {
                                                state.update(|s| s.preset = preset.to_string())
                                            })
                                        >
                                            {preset}
                                        </DropdownItem>
                                    }
                                })
                                .collect_view()}
                            <DropdownDivider />
                            <DropdownItem>"Custom..."</DropdownItem>
                        </DropdownContent>
                    </DropdownMenu>
                </Dropdown>

                <button class="button is-link ml-3" on:click=move |_| modal_open.set(true)>
                    "Open modal"
                </button>

                <Modal
                    active=modal_open
                    close_on_blur=true
                    on_close=Callback::new(move |()| modal_open.set(false))
                >
                    <ModalBackground />
                    <ModalCard>
                        <ModalCardHead>
                            <ModalCardTitle>"Modal card"</ModalCardTitle>
                        </ModalCardHead>
                        <ModalCardBody>
                            "Press Escape or click the background to close."
                        </ModalCardBody>
                        <ModalCardFoot>
                            <button class="button" on:click=move |_| modal_open.set(false)>
                                "Done"
                            </button>
                        </ModalCardFoot>
                    </ModalCard>
                    <ModalClose />
                </Modal>
            </section>
        </ThemeProvider>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the showcase into the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <Showcase /> });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn restore_falls_back_on_missing_or_malformed_snapshot() {
        assert_eq!(ShowcaseState::restore(None), ShowcaseState::default());
        assert_eq!(
            ShowcaseState::restore(Some("{not json")),
            ShowcaseState::default()
        );
    }

    #[test]
    fn restore_clamps_progress() {
        let state = ShowcaseState::restore(Some(r#"{"preset":"beta","progress":250}"#));
        assert_eq!(state.preset, "beta");
        assert_eq!(state.progress, 100);
    }

    #[test]
    fn step_progress_wraps_after_full() {
        let mut state = ShowcaseState {
            progress: 90,
            ..ShowcaseState::default()
        };
        state.step_progress();
        assert_eq!(state.progress, 100);
        state.step_progress();
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn default_theme_json_is_accepted() {
        let theme = load_theme(None);
        assert_eq!(theme.default_color, Some(Color::Primary));
    }

    #[test]
    fn rejected_theme_falls_back_to_default() {
        let theme = load_theme(Some(r#"{ "default_color": "magenta" }"#.to_string()));
        assert_eq!(theme, Theme::default());
    }
}
