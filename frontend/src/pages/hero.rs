use yew::prelude::*;

use crate::components::reveal::{Offset, Reveal, RevealStep};
use crate::components::visibility::use_mounted;

const HIGHLIGHTS: [&str; 4] = [
    "ISO Certified Quality",
    "Precision Engineering",
    "Custom Solutions",
    "Timely Delivery",
];

const EST: RevealStep = RevealStep::new(100, Offset::x(-30.0));
const HEADING: RevealStep = RevealStep::new(100, Offset::y(30.0));
const DIVIDER: RevealStep = RevealStep::new(100, Offset::NONE);
const BLURB: RevealStep = RevealStep::new(100, Offset::y(20.0));
const CTA: RevealStep = RevealStep::new(100, Offset::y(30.0));

#[function_component(Hero)]
pub fn hero() -> Html {
    // the hero is on screen at load, so it animates on mount rather than on scroll
    let visible = use_mounted();

    let panel_style = if visible {
        "transform: translateX(0); opacity: 1;"
    } else {
        "transform: translateX(-100%); opacity: 0;"
    };
    let accent_height = if visible { "height: 100%;" } else { "height: 0%;" };
    let line_width = if visible { "width: 64px;" } else { "width: 0px;" };
    let deco = |angle: u32| {
        if visible {
            format!("transform: rotate({}deg) scale(1);", angle)
        } else {
            "transform: rotate(0deg) scale(0);".to_string()
        }
    };

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                .hero {
                    height: 100vh;
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }
                .hero-panel {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 65%;
                    height: 100%;
                    clip-path: polygon(0 0, 100% 0, 50% 100%, 0 100%);
                    box-shadow: 20px 0 80px rgba(0, 0, 0, 0.25);
                    transition: all 1s ease-out;
                }
                .hero-panel img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-accent {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 2px;
                    background: linear-gradient(to bottom, #ed1b24, #fff, transparent);
                    opacity: 0.6;
                    transition: height 1.5s ease-out;
                }
                .hero-particle {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: #ed1b24;
                    opacity: 0.2;
                    animation: float 4s ease-in-out infinite;
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0px); }
                    50% { transform: translateY(-20px); }
                }
                .hero-content {
                    margin-left: auto;
                    max-width: 42rem;
                    padding: 0 2rem 0 2.5rem;
                    border-left: 4px solid #ed1b24;
                    position: relative;
                    z-index: 10;
                }
                .hero-est {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.35em;
                    text-transform: uppercase;
                    color: #fff;
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    line-height: 1.15;
                }
                .hero h1 .light {
                    color: #111827;
                    font-weight: 300;
                    font-style: italic;
                }
                .hero-line {
                    height: 1px;
                    background: linear-gradient(to right, #ed1b24, transparent);
                    transition: width 1s ease-out 100ms;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 1.5rem;
                }
                .hero-highlights {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem 1.5rem;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #d1d5db;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #4b5563;
                }
                .hero-deco {
                    position: absolute;
                    border: 1px solid #d1d5db;
                    opacity: 0.2;
                    transition: transform 1s ease-out 100ms;
                }
                "#}
            </style>

            <div class="hero-panel" style={panel_style}>
                <img src="/assets/main.jpg" alt="Steel Architecture" />
                <div class="hero-accent" style={accent_height}></div>
            </div>

            <div class="hero-particles">
                { for (0..6).map(|i| html! {
                    <div
                        class="hero-particle"
                        style={format!(
                            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
                            20 + i * 15, 30 + i * 10, i as f64 * 0.5, 4.0 + i as f64 * 0.5
                        )}
                    ></div>
                }) }
            </div>

            <div class="hero-content">
                <Reveal active={visible} step={EST} class="hero-est">
                    <span class="rule"></span>
                    <span>{"Est. 2012"}</span>
                </Reveal>
                <Reveal active={visible} step={HEADING}>
                    <h1>
                        <span class="textured">{"Excellence in Steel"}</span>
                        <br />
                        <span class="light">{"Built for Tomorrow"}</span>
                    </h1>
                </Reveal>
                <Reveal active={visible} step={DIVIDER} class="divider">
                    <div class="hero-line" style={line_width}></div>
                    <div class="diamond"></div>
                </Reveal>
                <Reveal active={visible} step={BLURB}>
                    <p class="lead">
                        {"Leading steel fabrication and engineering solutions across the UAE. Delivering precision-crafted excellence in every project."}
                    </p>
                </Reveal>
                <Reveal active={visible} step={CTA} class="hero-cta-group">
                    <a href="#services" class="btn-dark">{"Explore Services"}</a>
                    <a href="#contact" class="btn-light">{"Get in Touch"}</a>
                </Reveal>
                <div class="hero-highlights">
                    { for HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                        <Reveal active={visible} step={RevealStep::staggered(1300, 100, i, Offset::x(-20.0))}>
                            <span class="bullet"></span>
                            <span>{*highlight}</span>
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="hero-deco" style={format!("bottom: 2.5rem; right: 2.5rem; width: 8rem; height: 8rem; {}", deco(45))}></div>
            <div class="hero-deco" style={format!("top: 5rem; right: 5rem; width: 5rem; height: 5rem; border-color: #ed1b24; {}", deco(12))}></div>
        </section>
    }
}
