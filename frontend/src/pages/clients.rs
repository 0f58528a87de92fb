use yew::prelude::*;

use crate::components::reveal::{Offset, Reveal, RevealStep};
use crate::components::rotation::{use_rotation, Testimonial};
use crate::components::visibility::use_in_view;
use crate::config::{CAROUSEL_HOLD_MS, CAROUSEL_INTERVAL_MS};

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        author: "Omar H.",
        body: "Their steel fabrication quality is exceptional. Professional, fast, and extremely reliable.",
    },
    Testimonial {
        author: "Aisha T.",
        body: "We've partnered with them on multiple large-scale builds. Always on time, always top quality.",
    },
    Testimonial {
        author: "Rashid K.",
        body: "Outstanding service and craftsmanship. Easily one of the best steel suppliers in the region.",
    },
    Testimonial {
        author: "Fatima L.",
        body: "Their attention to detail and durability is unmatched. Highly recommended for major projects.",
    },
    Testimonial {
        author: "Mohammed S.",
        body: "Dependable team with excellent communication. Truly elevated our project standards.",
    },
];

const LOGOS: [(&str, &str); 4] = [
    ("/assets/c1.jpeg", "Client Logo 1"),
    ("/assets/c2.jpeg", "Client Logo 2"),
    ("/assets/c3.jpeg", "Client Logo 3"),
    ("/assets/c4.jpeg", "Client Logo 4"),
];

const STATS: [(&str, &str); 3] = [
    ("500+", "Projects Completed"),
    ("98%", "Client Satisfaction"),
    ("13+", "Years in Business"),
];

const EYEBROW: RevealStep = RevealStep::new(50, Offset::y(20.0));
const HEADING: RevealStep = RevealStep::new(150, Offset::y(30.0));
const DIVIDER: RevealStep = RevealStep::new(250, Offset::NONE);
const BLURB: RevealStep = RevealStep::new(350, Offset::y(20.0));
const CAROUSEL: RevealStep = RevealStep::new(450, Offset::x(-50.0));
const STATS_PANEL: RevealStep = RevealStep::new(500, Offset::x(50.0));
const MARQUEE: RevealStep = RevealStep::new(0, Offset::y(30.0));
const TAGLINE: RevealStep = RevealStep::new(100, Offset::y(20.0));

const QUOTE_ICON: &str = "M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z";

#[function_component(Clients)]
pub fn clients() -> Html {
    let section_ref = use_node_ref();
    let logos_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), 0.2);
    let logos_visible = use_in_view(logos_ref.clone(), 0.3);
    let carousel = use_rotation(TESTIMONIALS.len(), CAROUSEL_INTERVAL_MS, CAROUSEL_HOLD_MS);

    let slides = TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
        let shown = index == carousel.state.current_index && !carousel.state.transitioning;
        html! {
            <div key={index} class={classes!("slide", shown.then_some("shown"))}>
                <svg class="quote-icon" fill="currentColor" viewBox="0 0 24 24">
                    <path d={QUOTE_ICON} />
                </svg>
                <p class="review">{testimonial.body}</p>
                <p class="author">{testimonial.author}</p>
            </div>
        }
    });

    let indicators = (0..TESTIMONIALS.len()).map(|index| {
        let go_to = carousel.go_to.clone();
        let current = index == carousel.state.current_index;
        html! {
            <button
                key={index}
                class={classes!("indicator", current.then_some("current"))}
                aria-label={format!("Go to review {}", index + 1)}
                onclick={Callback::from(move |_: MouseEvent| go_to.emit(index))}
            />
        }
    });

    html! {
        <section id="clients" class="clients" ref={section_ref}>
            <style>
                {r#"
                .clients {
                    min-height: 100vh;
                    padding: 6rem 0;
                    background: #fff;
                }
                .clients-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 8rem;
                }
                .carousel {
                    position: relative;
                    background: #fff;
                    border-left: 4px solid #ed1b24;
                    padding: 2rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .slides {
                    position: relative;
                    min-height: 360px;
                }
                .slide {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 2rem 1.5rem;
                    opacity: 0;
                    transform: scale(0.95);
                    pointer-events: none;
                    transition: all 0.3s ease-in-out;
                }
                .slide.shown {
                    opacity: 1;
                    transform: scale(1);
                    pointer-events: auto;
                }
                .quote-icon {
                    width: 3rem;
                    height: 3rem;
                    color: #ed1b24;
                    opacity: 0.2;
                    margin-bottom: 1.5rem;
                }
                .review {
                    color: #374151;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .author {
                    font-weight: 600;
                    color: #1f2937;
                }
                .indicators {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                }
                .indicator {
                    width: 0.5rem;
                    height: 0.5rem;
                    border: none;
                    background: #9ca3af;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .indicator.current {
                    width: 2rem;
                    background: #ed1b24;
                }
                .stats {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    min-height: 360px;
                }
                .stat {
                    padding-bottom: 2rem;
                    margin-bottom: 2rem;
                    border-bottom: 1px solid #d1d5db;
                }
                .stat:last-child {
                    border-bottom: none;
                }
                .stat h3 {
                    font-size: 1.875rem;
                    color: #1f2937;
                }
                .marquee {
                    position: relative;
                    overflow: hidden;
                    margin-top: 5rem;
                }
                .marquee::before, .marquee::after {
                    content: '';
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 8rem;
                    z-index: 10;
                }
                .marquee::before {
                    left: 0;
                    background: linear-gradient(to right, #fff, transparent);
                }
                .marquee::after {
                    right: 0;
                    background: linear-gradient(to left, #fff, transparent);
                }
                .marquee-track {
                    display: flex;
                    gap: 2.5rem;
                    animation: scroll 22s linear infinite;
                }
                .marquee-track:hover {
                    animation-play-state: paused;
                }
                @keyframes scroll {
                    0% { transform: translateX(0); }
                    100% { transform: translateX(-50%); }
                }
                .logo-card {
                    flex-shrink: 0;
                    width: 9rem;
                    height: 9rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s;
                }
                .logo-card:hover {
                    transform: scale(1.05);
                }
                .logo-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    padding: 0.75rem;
                }
                @media (max-width: 1024px) {
                    .clients-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="container">
                <div class="section-header centered">
                    <Reveal active={visible} step={EYEBROW} class="eyebrow">
                        <span class="rule"></span>{"Our Clients"}
                    </Reveal>
                    <Reveal active={visible} step={HEADING}>
                        <h2><span class="textured">{"Stories of Reliability & Results"}</span></h2>
                    </Reveal>
                    <Reveal active={visible} step={DIVIDER} class="divider center">
                        <div class="line"></div><div class="diamond"></div>
                    </Reveal>
                    <Reveal active={visible} step={BLURB}>
                        <p class="lead">
                            {"Real partnerships, real impact. Hear directly from clients who trust us to deliver precision, quality, and on-time results across diverse projects."}
                        </p>
                    </Reveal>
                </div>

                <div class="clients-grid">
                    <Reveal active={visible} step={CAROUSEL} class="carousel">
                        <div class="slides">{ for slides }</div>
                        <div class="indicators">{ for indicators }</div>
                    </Reveal>
                    <Reveal active={visible} step={STATS_PANEL} class="stats">
                        { for STATS.iter().enumerate().map(|(i, (number, label))| html! {
                            <Reveal active={visible} step={RevealStep::staggered(1300, 150, i, Offset::y(20.0))} class="stat">
                                <h3>{*number}</h3>
                                <p class="muted">{*label}</p>
                            </Reveal>
                        }) }
                    </Reveal>
                </div>

                <div ref={logos_ref}>
                    <Reveal active={logos_visible} step={MARQUEE} class="marquee">
                        <div class="marquee-track">
                            { for LOGOS.iter().cycle().take(LOGOS.len() * 3).enumerate().map(|(i, (src, alt))| html! {
                                <div key={i} class="logo-card">
                                    <img src={*src} alt={*alt} />
                                </div>
                            }) }
                        </div>
                    </Reveal>
                </div>
                <Reveal active={logos_visible} step={TAGLINE} class="centered tagline">
                    <p class="muted">{"Our Esteemed Partners"}</p>
                </Reveal>
            </div>
        </section>
    }
}
