use log::info;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::glow_sphere::GlowSphere;
use crate::components::magnetic_button::MagneticButton;
use crate::components::particle_field::ParticleField;
use crate::components::reveal::Reveal;
use crate::components::tilt_card::TiltCard;
use crate::content::{ABOUT, AGENTS, SERVICES, STATS};
use crate::hooks::use_section_tracker::{use_section_tracker, SectionNav};
use crate::tracker::SectionList;
use crate::Nav;

#[function_component(Home)]
pub fn home() -> Html {
    let sections = use_context::<SectionList>();

    match sections {
        Some(sections) => html! { <TrackedHome {sections} /> },
        None => {
            log::error!("Home rendered without a section list");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct TrackedHomeProps {
    sections: SectionList,
}

#[function_component(TrackedHome)]
fn tracked_home(props: &TrackedHomeProps) -> Html {
    let nav = use_section_tracker(props.sections);

    use_effect_with_deps(
        move |_| {
            info!("Home page mounted");
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<SectionNav> context={nav}>
            <Nav />
            <div class="landing-page">
                <Hero />
                <Services />
                <Agents />
                <About />
                <Contact />
                <Footer />
            </div>
            <style>{STYLES}</style>
        </ContextProvider<SectionNav>>
    }
}

#[hook]
fn use_go_to(id: &'static str) -> Callback<MouseEvent> {
    let nav = use_context::<SectionNav>();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(nav) = &nav {
            nav.navigate.emit(id);
        }
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    let to_contact = use_go_to("contact");
    let to_services = use_go_to("services");

    html! {
        <header id="home" class="hero">
            <ParticleField class="hero-particles" />
            <div class="hero-content">
                <div class="hero-copy">
                    <p class="eyebrow">{"AI automation studio"}</p>
                    <h1>{"Put your busywork on autopilot."}</h1>
                    <p class="hero-subtitle">
                        {"Brightwire designs and ships AI agents that answer the inbox, chase the invoices and keep the CRM tidy, so your team can get back to the work that needs a human."}
                    </p>
                    <div class="hero-cta-group">
                        <MagneticButton class="primary-cta" onclick={to_contact}>
                            {"Book a free call"}
                        </MagneticButton>
                        <MagneticButton class="ghost-cta" onclick={to_services} strength={0.15}>
                            {"See what we build"}
                        </MagneticButton>
                    </div>
                </div>
                <div class="hero-visual">
                    <GlowSphere />
                </div>
            </div>
        </header>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="services">
            <Reveal>
                <h2>{"What we do"}</h2>
                <p class="section-lead">{"Four ways we take repetitive work off your plate."}</p>
            </Reveal>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <Reveal delay_ms={i as u32 * 90}>
                        <TiltCard class="service-card">
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                            <ul>
                                { for service.points.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                        </TiltCard>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(Agents)]
fn agents() -> Html {
    html! {
        <section id="agents" class="agents">
            <Reveal>
                <h2>{"Meet the agents"}</h2>
                <p class="section-lead">{"A few of the workers we have deployed for clients."}</p>
            </Reveal>
            <div class="agents-grid">
                { for AGENTS.iter().enumerate().map(|(i, agent)| html! {
                    <Reveal delay_ms={i as u32 * 120}>
                        <article class="agent-card" style={format!("--accent: {};", agent.accent)}>
                            <div class="agent-header">
                                <span class="agent-dot"></span>
                                <div>
                                    <h3>{agent.name}</h3>
                                    <p class="agent-role">{agent.role}</p>
                                </div>
                            </div>
                            <p>{agent.description}</p>
                            <div class="agent-tags">
                                { for agent.tags.iter().map(|tag| html! { <span class="agent-tag">{*tag}</span> }) }
                            </div>
                        </article>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <Reveal class="about-copy">
                <h2>{"Small team, real engineering"}</h2>
                { for ABOUT.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            </Reveal>
            <div class="about-stats">
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <Reveal delay_ms={i as u32 * 100} class="stat">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <Reveal>
                <h2>{"Let's talk"}</h2>
                <p class="section-lead">{"Tell us what slows your team down. We reply within one business day."}</p>
            </Reveal>
            <Reveal delay_ms={120}>
                <ContactForm />
            </Reveal>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = web_sys::js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {} Brightwire Automation. All rights reserved.", year)}</p>
        </footer>
    }
}

const STYLES: &str = r#"
    .landing-page {
        background: #0d0f14;
        color: #e8ecf3;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page section {
        padding: 7rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .landing-page h2 {
        font-size: 2.5rem;
        margin-bottom: 0.75rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-lead {
        color: #999;
        font-size: 1.15rem;
        margin-bottom: 3rem;
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        padding: 0 2rem;
    }
    .particle-field {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        z-index: 0;
        pointer-events: none;
    }
    .hero-content {
        position: relative;
        z-index: 1;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 3rem;
        max-width: 1200px;
        margin: 0 auto;
        width: 100%;
    }
    .hero-copy {
        max-width: 620px;
    }
    .eyebrow {
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: #7EB2FF;
        font-size: 0.85rem;
    }
    .hero h1 {
        font-size: 3.6rem;
        line-height: 1.1;
        margin: 1rem 0 1.5rem;
    }
    .hero-subtitle {
        color: #b5bccb;
        font-size: 1.2rem;
        line-height: 1.6;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        margin-top: 2.5rem;
        flex-wrap: wrap;
    }
    .magnetic-button {
        border: none;
        border-radius: 999px;
        padding: 0.95rem 2rem;
        font-size: 1rem;
        cursor: pointer;
        will-change: transform;
        transition: box-shadow 0.3s ease;
    }
    .primary-cta {
        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
        color: #fff;
        box-shadow: 0 8px 24px rgba(30, 144, 255, 0.3);
    }
    .primary-cta:hover {
        box-shadow: 0 12px 32px rgba(30, 144, 255, 0.45);
    }
    .ghost-cta {
        background: transparent;
        color: #e8ecf3;
        border: 1px solid rgba(126, 178, 255, 0.4);
    }
    .glow-sphere-wrap {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        will-change: transform;
    }
    .glow-sphere {
        border-radius: 50%;
        animation: sphereSpin 18s linear infinite;
        box-shadow: inset -20px -30px 60px rgba(0, 0, 0, 0.6);
    }
    .glow-sphere-halo {
        position: absolute;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(30, 144, 255, 0.25) 0%, transparent 65%);
        filter: blur(30px);
    }
    @keyframes sphereSpin {
        from { filter: hue-rotate(0deg); transform: rotate(0deg); }
        to { filter: hue-rotate(40deg); transform: rotate(360deg); }
    }
    .services-grid, .agents-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .tilt-card, .agent-card {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.12);
        border-radius: 20px;
        padding: 2rem;
        height: 100%;
        will-change: transform;
    }
    .service-icon {
        font-size: 2rem;
    }
    .tilt-card ul {
        padding-left: 1.2rem;
        color: #999;
    }
    .agent-header {
        display: flex;
        gap: 1rem;
        align-items: center;
    }
    .agent-dot {
        width: 14px;
        height: 14px;
        border-radius: 50%;
        background: var(--accent);
        box-shadow: 0 0 16px var(--accent);
    }
    .agent-role {
        color: var(--accent);
        margin: 0;
    }
    .agent-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .agent-tag {
        font-size: 0.8rem;
        padding: 0.25rem 0.75rem;
        border-radius: 999px;
        background: rgba(126, 178, 255, 0.1);
    }
    .about {
        display: grid;
        grid-template-columns: 3fr 2fr;
        gap: 3rem;
    }
    .about-copy p {
        color: #b5bccb;
        line-height: 1.7;
    }
    .about-stats {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .stat {
        display: flex;
        flex-direction: column;
    }
    .stat-value {
        font-size: 2.5rem;
        font-weight: 700;
        color: #7EB2FF;
    }
    .stat-label {
        color: #999;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
        max-width: 720px;
    }
    .contact-form label {
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
        flex: 1;
    }
    .form-row {
        display: flex;
        gap: 1.25rem;
    }
    .contact-form input, .contact-form textarea {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(126, 178, 255, 0.2);
        border-radius: 12px;
        padding: 0.85rem 1rem;
        color: #fff;
        font: inherit;
    }
    .form-error {
        color: #ff7b7b;
    }
    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.7s ease, transform 0.7s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    .site-footer {
        text-align: center;
        padding: 3rem 1rem;
        color: #666;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    @media (max-width: 768px) {
        .hero-content {
            flex-direction: column;
            padding-top: 6rem;
        }
        .hero h1 {
            font-size: 2.4rem;
        }
        .about {
            grid-template-columns: 1fr;
        }
        .form-row {
            flex-direction: column;
        }
    }
"#;
