use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{error, info};
use web_sys::MouseEvent;

mod config;
mod content;
mod contact;
mod error;
mod particles;
mod pointer;
mod spring;
mod tracker;
mod hooks {
    pub mod dom;
    pub mod use_pointer_follower;
    pub mod use_section_tracker;
}
mod components {
    pub mod contact_form;
    pub mod glow_sphere;
    pub mod magnetic_button;
    pub mod notification;
    pub mod particle_field;
    pub mod reveal;
    pub mod tilt_card;
}
mod pages {
    pub mod home;
}

use hooks::use_section_tracker::SectionNav;
use pages::home::Home;
use tracker::SectionList;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let nav = use_context::<SectionNav>();
    let sections = use_context::<SectionList>();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_AFTER;

    let (Some(nav), Some(sections)) = (nav, sections) else {
        error!("Nav rendered outside the section tracker");
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let navigate = nav.navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigate.emit(id);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to(sections.first().id)}>
                    {"brightwire"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for sections.iter().map(|section| html! {
                        <a
                            href={format!("#{}", section.id)}
                            class={classes!("nav-link", (nav.active == section.id).then(|| "active"))}
                            onclick={go_to(section.id)}
                        >
                            {section.label}
                        </a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(13, 15, 20, 0.85);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #b5bccb;
                        text-decoration: none;
                        position: relative;
                        transition: color 0.2s ease;
                    }
                    .nav-link.active {
                        color: #7EB2FF;
                    }
                    .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -6px;
                        height: 2px;
                        background: #7EB2FF;
                        border-radius: 2px;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            padding: 1.5rem 2rem;
                            background: rgba(13, 15, 20, 0.97);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[derive(Properties, PartialEq)]
struct AppProps {
    sections: SectionList,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SectionList> context={props.sections}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SectionList>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let sections = match SectionList::new(config::SECTIONS) {
        Ok(sections) => sections,
        Err(e) => {
            error!("Invalid section configuration: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { sections }).render();
}
