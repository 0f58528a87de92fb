use log::{info, warn, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod components {
    pub mod clock;
    pub mod reveal;
    pub mod rotation;
    pub mod scroll_spy;
    pub mod visibility;
}
mod contact {
    pub mod controller;
    pub mod emailjs;
}
mod pages {
    pub mod about;
    pub mod clients;
    pub mod contact;
    pub mod hero;
    pub mod quote_modal;
    pub mod services;
}

use components::scroll_spy::use_active_section;
use config::{EmailJsConfig, NAV_LINKS};
use pages::{
    about::About,
    clients::Clients,
    contact::Contact,
    hero::Hero,
    quote_modal::QuoteModal,
    services::Services,
};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_quote: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_bool_toggle(false);
    let (active, set_active) = use_active_section();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let link = |label: &'static str, id: &'static str| {
        let set_active = set_active.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            set_active.emit(label.to_string());
            if *menu_open {
                menu_open.toggle();
            }
        });
        html! {
            <a
                href={format!("#{}", id)}
                class={classes!("nav-link", (active == label).then_some("active"))}
                {onclick}
            >
                {label}
            </a>
        }
    };

    let open_quote = {
        let on_quote = props.on_quote.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *menu_open {
                menu_open.toggle();
            }
            on_quote.emit(());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src="/assets/logo.png" alt="Najmat Al Zahra Steel Logo" />
                    <div>
                        <span class="brand-name">{"NAJMAT AL ZAHRA"}</span>
                        <span class="brand-sub">{"STEEL"}</span>
                    </div>
                </a>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(label, id)| link(*label, *id)) }
                    <button class="nav-quote" onclick={open_quote}>{"Get a Quote"}</button>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub emailjs: Option<EmailJsConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let quote_open = use_bool_toggle(false);

    let toggle_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_: ()| quote_open.toggle())
    };

    html! {
        <>
            <style>
                {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    color: #111827;
                    scroll-behavior: smooth;
                }
                section, footer { scroll-margin-top: 5rem; }
                .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                .container.narrow { max-width: 56rem; }
                .centered { text-align: center; }
                .muted { color: #4b5563; }
                .reveal { transition: all 0.7s ease-out; }
                .reveal.slow { transition-duration: 0.8s; }
                .section-header { margin-bottom: 4rem; }
                .section-header h2 { font-size: clamp(1.5rem, 3vw, 1.875rem); margin: 0 0 1.5rem; }
                .eyebrow {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.35em;
                    text-transform: uppercase;
                    color: #6b7280;
                }
                .rule { display: inline-block; height: 1px; width: 3rem; background: #ed1b24; }
                .textured {
                    display: inline-block;
                    font-weight: 700;
                    background-image: url('https://images.unsplash.com/photo-1582560475093-ba66accbc424?w=800');
                    background-size: cover;
                    background-position: center;
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .divider { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
                .divider.center { justify-content: center; }
                .divider .line { height: 1px; width: 4rem; background: linear-gradient(to right, #ed1b24, transparent); }
                .diamond { width: 0.5rem; height: 0.5rem; background: #ed1b24; transform: rotate(45deg); }
                .bullet { display: inline-block; width: 4px; height: 4px; margin-right: 0.75rem; background: #ed1b24; }
                .lead { font-size: 1.125rem; color: #4b5563; line-height: 1.7; max-width: 48rem; margin: 0 auto; }
                .btn-dark, .btn-light {
                    display: inline-block;
                    padding: 1rem 2rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    transition: all 0.5s;
                }
                .btn-dark { background: #374151; color: #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .btn-dark:hover:not(:disabled) { background: #000; }
                .btn-light { background: #fff; color: #111827; border: 1px solid #d1d5db; }
                .btn-light:hover { border-color: #ed1b24; color: #ed1b24; }
                .brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
                .brand img, .nav-logo img { width: 2.5rem; height: 2.5rem; }
                .brand-name { display: block; font-size: 1rem; line-height: 1; }
                .brand-sub { display: block; font-size: 0.75rem; color: #4b5563; line-height: 1; }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 0.5px solid #e5e7eb;
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .nav-logo { display: flex; align-items: center; gap: 0.75rem; color: inherit; text-decoration: none; }
                .nav-right { display: flex; align-items: center; gap: 2rem; }
                .nav-link { font-size: 0.875rem; color: rgba(17, 24, 39, 0.7); text-decoration: none; transition: color 0.3s; }
                .nav-link:hover, .nav-link.active { color: #ed1b24; }
                .nav-quote { background: none; border: none; padding: 0; font-size: 0.875rem; color: #ed1b24; cursor: pointer; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; padding: 0.5rem; }
                .burger-menu span { display: block; width: 20px; height: 2px; margin: 4px 0; background: #111827; }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        position: absolute;
                        top: 5rem;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #fff;
                        border-top: 1px solid #e5e7eb;
                    }
                }
                "#}
            </style>
            <Nav on_quote={toggle_quote.clone()} />
            <main>
                <Hero />
                <About />
                <Services />
                <Clients />
            </main>
            <Contact config={props.emailjs.clone()} />
            <QuoteModal open={*quote_open} on_close={toggle_quote} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    let emailjs = match EmailJsConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("EmailJS not configured, contact messages will fail: {}", e);
            None
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { emailjs }).render();
}
