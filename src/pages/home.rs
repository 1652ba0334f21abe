use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::sections;
use crate::components::nav::Nav;
use crate::components::scroll_top::ScrollTop;
use crate::config::ScrollConfig;
use crate::scroll::hooks::use_scroll_activator;

const HERO_ENTRANCE_DELAY_MS: u32 = 50;

const PAGE_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background-color: var(--bg);
        color: var(--text);
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 24px;
    }
    .container.narrow {
        max-width: 900px;
    }
    .page-section {
        padding: 64px 0;
    }
    .page-section.alt {
        background-color: var(--section-alt);
    }
    .section-header {
        text-align: center;
        margin-bottom: 48px;
    }
    .section-header h2,
    .cta h2 {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 0.35em;
    }
    .section-subtitle {
        max-width: 800px;
        margin: 0 auto;
        font-size: 1.25rem;
        color: var(--text-secondary);
    }
    .muted {
        color: var(--text-secondary);
    }
    .centered {
        text-align: center;
        margin-top: 32px;
    }
    .grid {
        display: grid;
        gap: 32px;
    }
    .grid.four {
        grid-template-columns: repeat(4, 1fr);
    }
    .grid.three {
        grid-template-columns: repeat(3, 1fr);
    }
    .paper {
        background-color: var(--paper);
        border-radius: 8px;
        box-shadow: 0 3px 3px var(--shadow);
        transition: background-color 0.3s ease;
    }
    .lift {
        transition: transform 0.3s ease-in-out, box-shadow 0.3s ease-in-out;
    }
    .lift:hover {
        transform: translateY(-8px);
        box-shadow: 0 6px 10px var(--shadow);
    }

    .hero {
        color: white;
        padding: 96px 0;
        text-align: center;
    }
    .hero-content {
        max-width: 900px;
        margin: 0 auto;
        padding: 0 24px;
    }
    .hero-title {
        font-size: 3.75rem;
        font-weight: 700;
        margin: 0 0 0.35em;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        max-width: 800px;
        margin: 0 auto 32px;
    }
    .hero-title,
    .hero-subtitle,
    .hero-cta-group {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .hero.entered .hero-title,
    .hero.entered .hero-subtitle,
    .hero.entered .hero-cta-group {
        opacity: 1;
        transform: translateY(0);
    }
    .hero.entered .hero-subtitle {
        transition-delay: 0.3s;
    }
    .hero.entered .hero-cta-group {
        transition-delay: 0.6s;
    }
    .hero-cta {
        display: inline-block;
        padding: 10px 24px;
        font-size: 1rem;
        border-radius: 8px;
        cursor: pointer;
        text-decoration: none;
        margin: 0 8px;
    }
    .hero-cta.solid {
        background-color: white;
        color: #764ba2;
        font-weight: bold;
        border: none;
    }
    .hero-cta.solid:hover {
        background-color: rgba(255, 255, 255, 0.9);
    }
    .hero-cta.outlined {
        background: transparent;
        color: white;
        border: 1px solid white;
    }
    .hero-cta.outlined:hover {
        border-color: rgba(255, 255, 255, 0.9);
        background-color: rgba(255, 255, 255, 0.1);
    }

    .service-card {
        padding: 24px;
        height: 100%;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        box-sizing: border-box;
    }
    .service-icon {
        color: var(--primary);
        font-size: 2rem;
        margin-bottom: 16px;
    }
    .project-card {
        overflow: hidden;
        display: flex;
        flex-direction: column;
    }
    .project-card img {
        width: 100%;
        height: 200px;
        object-fit: cover;
    }
    .project-body {
        padding: 16px;
        flex-grow: 1;
    }
    .chips {
        display: flex;
        flex-wrap: wrap;
        gap: 8px;
    }
    .chip {
        background-color: var(--chip);
        border-radius: 16px;
        padding: 3px 10px;
        font-size: 0.8125rem;
    }
    .outlined-button {
        padding: 10px 24px;
        font-size: 1rem;
        border-radius: 8px;
        border: 1px solid var(--primary);
        color: var(--primary);
        background: transparent;
        cursor: pointer;
    }
    .phase {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 24px;
    }
    .phase-step {
        background-color: var(--primary);
        color: white;
        width: 60px;
        height: 60px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 16px;
        font-size: 1.5rem;
        font-weight: bold;
    }
    .testimonial-card {
        padding: 24px;
        height: 100%;
        box-sizing: border-box;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        margin-bottom: 16px;
    }
    .testimonial-author h3 {
        margin: 0;
    }
    .testimonial-author p {
        margin: 0;
    }
    .avatar {
        width: 56px;
        height: 56px;
        border-radius: 50%;
        margin-right: 16px;
        object-fit: cover;
    }
    .cta {
        color: white;
        text-align: center;
    }
    .cta p {
        font-size: 1.25rem;
        max-width: 800px;
        margin: 0 auto 32px;
    }

    .site-footer {
        background-color: var(--paper);
        padding: 48px 0;
    }
    .social-links {
        display: flex;
        gap: 16px;
        margin: 8px 0;
    }
    .text-button {
        background: none;
        border: none;
        color: var(--primary);
        cursor: pointer;
        padding: 4px 5px;
        text-transform: uppercase;
        font-size: 0.8125rem;
    }
    .copyright {
        margin-top: 32px;
        text-align: center;
    }

    .scroll-animate {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .scroll-animate.from-left {
        transform: translateX(-20px);
    }
    .scroll-animate.from-right {
        transform: translateX(20px);
    }
    .scroll-animate.animate {
        opacity: 1;
        transform: none;
    }
    .lift.scroll-animate.animate:hover {
        transform: translateY(-8px);
    }

    @media (max-width: 900px) {
        .grid.four {
            grid-template-columns: repeat(2, 1fr);
        }
        .grid.three {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 2.5rem;
        }
        .section-header h2,
        .cta h2 {
            font-size: 2.25rem;
        }
    }
    @media (max-width: 600px) {
        .grid.four {
            grid-template-columns: 1fr;
        }
    }
    "#;

#[function_component(Home)]
pub fn home() -> Html {
    let hero_visible = use_state(|| false);

    // One-shot hero entrance; the pending timeout is cancelled if we unmount first.
    {
        let setter = hero_visible.setter();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_ENTRANCE_DELAY_MS, move || setter.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let scroll_top_visible = use_scroll_activator(ScrollConfig::default());

    html! {
        <div class="landing-page">
            <Nav />
            { sections::hero(*hero_visible) }
            { sections::services() }
            { sections::portfolio() }
            { sections::process() }
            { sections::testimonials() }
            { sections::call_to_action() }
            { sections::footer() }
            <ScrollTop visible={scroll_top_visible} />
            <style>{ PAGE_CSS }</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_position(rule: &str) -> usize {
        PAGE_CSS
            .find(rule)
            .unwrap_or_else(|| panic!("missing rule {}", rule))
    }

    fn rule_body(rule: &str) -> &'static str {
        let start = rule_position(rule);
        let end = start + PAGE_CSS[start..].find('}').unwrap();
        &PAGE_CSS[start..end]
    }

    #[test]
    fn slide_directions_start_offset_sideways() {
        assert!(rule_body(".scroll-animate.from-left {").contains("transform: translateX(-20px);"));
        assert!(rule_body(".scroll-animate.from-right {").contains("transform: translateX(20px);"));
    }

    #[test]
    fn revealed_rule_overrides_slide_offsets() {
        let revealed = rule_position(".scroll-animate.animate {");
        assert!(rule_position(".scroll-animate.from-left {") < revealed);
        assert!(rule_position(".scroll-animate.from-right {") < revealed);
        assert!(rule_body(".scroll-animate.animate {").contains("transform: none;"));
    }
}
