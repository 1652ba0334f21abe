use chrono::Datelike;
use yew::prelude::*;

use super::content::{
    BRAND, CONTACT_LINES, PHASES, PROJECTS, SERVICES, SOCIAL_LINKS, TESTIMONIALS,
};
use crate::config;
use crate::scroll::dom::scroll_to_section;

fn go_to(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section, config::NAV_HEIGHT);
    })
}

/// Direction a revealed block slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slide {
    Up,
    FromLeft,
    FromRight,
}

impl Slide {
    /// Process phases alternate sides, starting from the left.
    fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::FromLeft
        } else {
            Self::FromRight
        }
    }

    fn class(self) -> Option<&'static str> {
        match self {
            Self::Up => None,
            Self::FromLeft => Some("from-left"),
            Self::FromRight => Some("from-right"),
        }
    }
}

/// Classes for a card the scroll activator reveals, staggered by `index`.
fn revealed_card(base: &'static str, slide: Slide) -> Classes {
    classes!(base, config::REVEAL_CLASS, slide.class())
}

fn stagger(index: usize) -> String {
    format!("transition-delay: {}ms", index * 100)
}

/// Section title block, revealed on scroll like the cards below it.
fn section_header(title: &str, subtitle: &str) -> Html {
    html! {
        <div class={classes!("section-header", config::REVEAL_CLASS)}>
            <h2>{ title }</h2>
            <p class="section-subtitle">{ subtitle }</p>
        </div>
    }
}

pub fn hero(visible: bool) -> Html {
    html! {
        <header id="home" class={classes!("hero", "brand-gradient", visible.then(|| "entered"))}>
            <div class="hero-content">
                <h1 class="hero-title">{"Crafting Digital Experiences"}</h1>
                <p class="hero-subtitle">
                    {"I build fast, responsive, and beautiful websites that help businesses grow. \
                      Using modern technologies for outstanding digital experiences."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta solid" onclick={go_to("portfolio")}>{"View My Work"}</button>
                    <button class="hero-cta outlined" onclick={go_to("contact")}>{"Get In Touch"}</button>
                </div>
            </div>
        </header>
    }
}

pub fn services() -> Html {
    html! {
        <section id="services" class="page-section alt">
            <div class="container">
                { section_header("Services", "End-to-end web development solutions to help your business thrive online") }
                <div class="grid four">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class={revealed_card("paper service-card lift", Slide::Up)} style={stagger(i)}>
                            <div class="service-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p class="muted">{ service.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

pub fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="page-section">
            <div class="container">
                { section_header("Featured Projects", "A selection of my recent work showcasing my expertise and skills") }
                <div class="grid three">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <div class={revealed_card("paper project-card lift", Slide::Up)} style={stagger(i)}>
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="project-body">
                                <h3>{ project.title }</h3>
                                <p class="muted">{ project.description }</p>
                                <div class="chips">
                                    { for project.tech.iter().map(|tech| html! {
                                        <span class="chip">{ *tech }</span>
                                    }) }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="centered">
                    <button class="outlined-button">{"View All Projects"}</button>
                </div>
            </div>
        </section>
    }
}

pub fn process() -> Html {
    html! {
        <section id="process" class="page-section alt">
            <div class="container">
                { section_header("My Development Process", "A structured approach to creating exceptional websites") }
                <div class="grid three">
                    { for PHASES.iter().enumerate().map(|(i, phase)| html! {
                        <div class={revealed_card("phase", Slide::alternating(i))} style={stagger(i)}>
                            <div class="phase-step">{ phase.step.to_string() }</div>
                            <h3>{ phase.title }</h3>
                            <p class="muted">{ phase.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="page-section">
            <div class="container">
                { section_header("Client Testimonials", "What my clients say about working with me") }
                <div class="grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <div class={revealed_card("paper testimonial-card", Slide::Up)} style={stagger(i)}>
                            <div class="testimonial-author">
                                <img class="avatar" src={testimonial.avatar} alt={testimonial.name} />
                                <div>
                                    <h3>{ testimonial.name }</h3>
                                    <p class="muted">{ testimonial.company }</p>
                                </div>
                            </div>
                            <p>{ format!("\"{}\"", testimonial.comment) }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

pub fn call_to_action() -> Html {
    html! {
        <section id="contact" class="page-section brand-gradient cta">
            <div class={revealed_card("container narrow", Slide::Up)}>
                <h2>{"Ready to Start Your Project?"}</h2>
                <p>{"Let's work together to bring your vision to life. Get in touch for a free consultation."}</p>
                <a class="hero-cta solid" href="mailto:hello@webcraftpro.com">{"Contact Me"}</a>
            </div>
        </section>
    }
}

pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="grid three">
                    <div>
                        <h3 class="footer-brand">{ BRAND }</h3>
                        <p class="muted">{"Creating beautiful, functional websites that help businesses succeed online."}</p>
                    </div>
                    <div>
                        <h3>{"Contact"}</h3>
                        { for CONTACT_LINES.iter().map(|line| html! { <p class="muted">{ *line }</p> }) }
                    </div>
                    <div>
                        <h3>{"Follow Me"}</h3>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <button class="text-button">{ *social }</button>
                            }) }
                        </div>
                    </div>
                </div>
                <p class="muted copyright">{ format!("© {} {}. All rights reserved.", year, BRAND) }</p>
            </div>
        </footer>
    }
}
