use log::warn;
use stylist::GlobalStyle;
use yew::prelude::*;

use super::palette::{Palette, BRAND_GRADIENT, SURFACE_TRANSITION};
use super::{ColorMode, ThemeController};

/// What themed components get from `use_theme`.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ColorMode,
    pub palette: Palette,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    fn detached(mode: ColorMode) -> Self {
        Self {
            mode,
            palette: Palette::for_mode(mode),
            toggle: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn global_css(palette: &Palette) -> String {
    format!(
        r#"
        :root {{ {vars} }}
        body {{
            margin: 0;
            background-color: {bg};
            color: {text};
            transition: {transition};
            font-family: "Inter", "Roboto", "Helvetica", "Arial", sans-serif;
        }}
        .brand-gradient {{ background-image: {gradient}; }}
        "#,
        vars = palette.css_variables(),
        bg = palette.background,
        text = palette.text_primary,
        transition = SURFACE_TRANSITION,
        gradient = BRAND_GRADIENT,
    )
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let controller = use_state(ThemeController::browser);
    let mode = use_state(|| None::<ColorMode>);

    // Resolve the mode once the page is interactive and follow later toggles.
    {
        let controller = (*controller).clone();
        let setter = mode.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = controller.subscribe(move |mode| setter.set(Some(mode)));
                controller.initialize();
                move || drop(subscription)
            },
            (),
        );
    }

    // Swap the global stylesheet whenever the mode changes.
    use_effect_with_deps(
        move |mode| {
            let style = (*mode).and_then(|mode| {
                GlobalStyle::new(global_css(&Palette::for_mode(mode)))
                    .map_err(|err| warn!("Failed to mount theme styles: {}", err))
                    .ok()
            });
            move || {
                if let Some(style) = style {
                    style.unregister();
                }
            }
        },
        *mode,
    );

    // Nothing themed renders before the mode is known.
    let mode = match *mode {
        Some(mode) => mode,
        None => return html! {},
    };

    let toggle = {
        let controller = (*controller).clone();
        Callback::from(move |_| controller.toggle())
    };

    let context = ThemeContext {
        mode,
        palette: Palette::for_mode(mode),
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    match use_context::<ThemeContext>() {
        Some(context) => context,
        None => {
            warn!("use_theme called outside ThemeProvider");
            ThemeContext::detached(ColorMode::default())
        }
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle.emit(());
        })
    };

    html! {
        <>
            <button class="theme-toggle" aria-label="toggle light/dark theme" {onclick}>
                { theme.palette.toggle_icon() }
            </button>
            <style>
                {r#"
                .theme-toggle {
                    margin-left: 8px;
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 50%;
                    background: transparent;
                    color: inherit;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }
                .theme-toggle:hover {
                    background-color: var(--hover);
                }
                "#}
            </style>
        </>
    }
}
