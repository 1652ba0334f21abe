use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::pages::content::{BRAND, NAV_ITEMS};
use crate::scroll::dom::scroll_to_section;
use crate::theme::provider::ThemeToggle;

fn nav_link(label: &'static str, section: &'static str, class: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section, config::NAV_HEIGHT);
    });

    html! {
        <a href={format!("#{}", section)} class={class} {onclick}>{ label }</a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let drawer_open = use_bool_toggle(false);
    let (width, _) = use_window_size();
    let is_mobile = width < config::MOBILE_BREAKPOINT;

    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.toggle())
    };

    html! {
        <>
            <nav class="top-nav">
                <div class="nav-content">
                    <div class="nav-logo">
                        <span class="nav-logo-icon">{"🌐"}</span>
                        <span class="nav-logo-text">{ BRAND }</span>
                    </div>
                    <ThemeToggle />
                    {
                        if is_mobile {
                            html! {
                                <button class="burger-menu" aria-label="open drawer" onclick={toggle_drawer.clone()}>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </button>
                            }
                        } else {
                            html! {
                                <div class="nav-right">
                                    { for NAV_ITEMS.iter().enumerate().map(|(i, item)| html! {
                                        <div class="nav-item" style={format!("animation-delay: {}ms", i * 100)}>
                                            { nav_link(item.label, item.section, "nav-link") }
                                        </div>
                                    }) }
                                </div>
                            }
                        }
                    }
                </div>
            </nav>

            // Any click inside the drawer closes it, like the backdrop.
            <div class={classes!("drawer-backdrop", (*drawer_open).then(|| "open"))} onclick={toggle_drawer.clone()} />
            <aside class={classes!("drawer", (*drawer_open).then(|| "open"))} onclick={toggle_drawer}>
                <h3 class="drawer-title">{ BRAND }</h3>
                <hr />
                <ul>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <li>{ nav_link(item.label, item.section, "drawer-link") }</li>
                    }) }
                </ul>
            </aside>

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 1100;
                    background-color: var(--app-bar);
                    color: var(--text);
                    box-shadow: 0 2px 4px var(--shadow);
                    transition: background-color 0.3s ease, color 0.3s ease;
                }
                .nav-content {
                    max-width: 1200px;
                    height: 64px;
                    margin: 0 auto;
                    padding: 0 24px;
                    display: flex;
                    align-items: center;
                }
                .nav-logo {
                    flex-grow: 1;
                    display: flex;
                    align-items: center;
                    font-size: 1.25rem;
                    font-weight: 500;
                }
                .nav-logo-icon {
                    margin-right: 8px;
                }
                .nav-logo-text {
                    animation: fadeIn 0.5s ease-out both;
                }
                .nav-right {
                    display: flex;
                }
                .nav-item {
                    animation: dropIn 0.4s ease-out both;
                }
                .nav-link {
                    display: inline-block;
                    margin: 0 8px;
                    padding: 6px 8px;
                    color: inherit;
                    text-decoration: none;
                    border-radius: 8px;
                }
                .nav-link:hover {
                    background-color: var(--hover);
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4px;
                    width: 40px;
                    height: 40px;
                    margin-left: 8px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background-color: var(--text);
                }
                .drawer-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.225s ease;
                    z-index: 1200;
                }
                .drawer-backdrop.open {
                    opacity: 1;
                    pointer-events: auto;
                }
                .drawer {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: 240px;
                    background-color: var(--paper);
                    color: var(--text);
                    text-align: center;
                    transform: translateX(100%);
                    transition: transform 0.225s ease;
                    z-index: 1300;
                }
                .drawer.open {
                    transform: translateX(0);
                }
                .drawer-title {
                    margin: 16px 0;
                }
                .drawer hr {
                    border: none;
                    border-top: 1px solid var(--divider);
                }
                .drawer ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .drawer-link {
                    display: block;
                    padding: 8px 0;
                    color: inherit;
                    text-decoration: none;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes dropIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </>
    }
}
