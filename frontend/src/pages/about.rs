use yew::prelude::*;

use crate::components::reveal::{Offset, Reveal, RevealStep};
use crate::components::visibility::use_in_view;

const GALLERY: [(&str, &str); 3] = [
    ("/assets/b1.jpeg", "Project 1"),
    ("/assets/b2.jpeg", "Project 2"),
    ("/assets/b3.jpeg", "Project 3"),
];

const BLOCK: RevealStep = RevealStep::new(0, Offset::y(30.0));

#[function_component(About)]
pub fn about() -> Html {
    let content_ref = use_node_ref();
    let visible = use_in_view(content_ref.clone(), 0.3);

    html! {
        <section id="about" class="about">
            <style>
                {r#"
                .about {
                    padding: 6rem 0;
                    background: #fff;
                    overflow: hidden;
                }
                .about-body {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding-top: 1rem;
                    font-size: 1.125rem;
                    color: #374151;
                    line-height: 1.7;
                }
                .about-body .brand {
                    font-weight: 700;
                    color: #ed1b24;
                }
                .about-gallery {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    padding-top: 3rem;
                }
                .about-gallery .tile {
                    height: 220px;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.5s;
                }
                .about-gallery .tile:hover {
                    transform: scale(1.02);
                }
                .about-gallery img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                "#}
            </style>
            <div class="container narrow" ref={content_ref}>
                <Reveal active={visible} step={BLOCK} class="centered slow">
                    <div class="section-header">
                        <div class="eyebrow"><span class="rule"></span>{"About Us"}</div>
                        <h2><span class="textured">{"Crafting Excellence Since 1999"}</span></h2>
                        <div class="divider center"><div class="line"></div><div class="diamond"></div></div>
                    </div>
                    <div class="about-body">
                        <p>
                            <span class="brand">{"Najmat Al Zahra Steel"}</span>
                            {" is a leading provider of specialized steel fabrication and advanced coating solutions, trusted across the region for over 13 years. We transform raw steel into durable, high-performance, and aesthetically refined products, delivering precision and quality across more than 500 completed projects."}
                        </p>
                        <p class="muted">
                            {"From major industrial builds to fully customized solutions, we ensure one commitment: dependable performance, guaranteed quality, and continuous support at every stage."}
                        </p>
                    </div>
                    <div class="about-gallery">
                        { for GALLERY.iter().map(|(src, alt)| html! {
                            <div class="tile">
                                <img src={*src} alt={*alt} loading="lazy" />
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
