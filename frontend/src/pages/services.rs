use yew::prelude::*;

use crate::components::reveal::{Offset, Reveal, RevealStep};
use crate::components::visibility::use_in_view;

struct Service {
    title: &'static str,
    image: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 5] = [
    Service {
        title: "Steel Fabrication",
        image: "/assets/fab.jpeg",
        description: "Expert steel fabrication services for industrial and commercial projects with precision-engineered solutions.",
    },
    Service {
        title: "Laser Cutting",
        image: "/assets/las.jpg",
        description: "State-of-the-art laser cutting technology for precise metal work with clean cuts and intricate designs.",
    },
    Service {
        title: "Powder & PVC Coating",
        image: "/assets/pvc.jpg",
        description: "Professional coating services providing superior protection, corrosion resistance, and long-lasting finish.",
    },
    Service {
        title: "Steel & Wooden Cable Drums",
        image: "/assets/dru.jpeg",
        description: "High-quality cable drums manufactured to industry standards for safe storage and transportation.",
    },
    Service {
        title: "Fencing Solutions",
        image: "/assets/fen.jpg",
        description: "Durable and secure fencing systems for residential, industrial, and commercial environments.",
    },
];

const EYEBROW: RevealStep = RevealStep::new(100, Offset::y(20.0));
const HEADING: RevealStep = RevealStep::new(300, Offset::y(30.0));
const DIVIDER: RevealStep = RevealStep::new(500, Offset::NONE);
const BLURB: RevealStep = RevealStep::new(700, Offset::y(20.0));
const ROW: RevealStep = RevealStep::new(0, Offset::y(50.0));

#[derive(Properties, PartialEq)]
struct ServiceRowProps {
    index: usize,
    hovered: bool,
    on_hover: Callback<Option<usize>>,
}

/// One service row, revealed by its own observer.
#[function_component(ServiceRow)]
fn service_row(props: &ServiceRowProps) -> Html {
    let row_ref = use_node_ref();
    let visible = use_in_view(row_ref.clone(), 0.3);
    let service = &SERVICES[props.index];
    let flipped = props.index % 2 == 1;

    let on_enter = {
        let on_hover = props.on_hover.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(index)))
    };
    let on_leave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <div ref={row_ref} onmouseenter={on_enter} onmouseleave={on_leave}>
            <Reveal active={visible} step={ROW} class="slow">
                <div class={classes!("service-row", flipped.then_some("flipped"), props.hovered.then_some("hovered"))}>
                    <div class="service-image">
                        <img src={service.image} alt={service.title} loading="lazy" />
                    </div>
                    <div class="service-text">
                        <span class="service-number">{format!("0{}", props.index + 1)}</span>
                        <h3>{service.title}</h3>
                        <div class="service-bar"></div>
                        <p>{service.description}</p>
                    </div>
                </div>
            </Reveal>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), 0.2);
    let hovered = use_state(|| None::<usize>);

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |index: Option<usize>| hovered.set(index))
    };

    html! {
        <section id="services" class="services" ref={section_ref}>
            <style>
                {r#"
                .services {
                    min-height: 100vh;
                    padding: 6rem 0;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }
                .service-list > * + * {
                    margin-top: 2rem;
                }
                .service-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                }
                .service-row.flipped .service-image {
                    order: 2;
                }
                .service-image {
                    height: 280px;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.5s;
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease-out;
                }
                .service-row.hovered .service-image {
                    transform: scale(1.02);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .service-row.hovered .service-image img {
                    transform: scale(1.1);
                }
                .service-number {
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    color: #9ca3af;
                }
                .service-bar {
                    height: 4px;
                    width: 4rem;
                    background: #ed1b24;
                    transition: width 0.5s;
                }
                .service-row.hovered .service-bar {
                    width: 6rem;
                }
                @media (max-width: 768px) {
                    .service-row {
                        grid-template-columns: 1fr;
                    }
                    .service-row.flipped .service-image {
                        order: 0;
                    }
                }
                "#}
            </style>
            <div class="container">
                <div class="section-header centered">
                    <Reveal active={visible} step={EYEBROW} class="eyebrow">
                        <span class="rule"></span>{"Our Services"}
                    </Reveal>
                    <Reveal active={visible} step={HEADING}>
                        <h2><span class="textured">{"End-to-end Steel Services"}</span></h2>
                    </Reveal>
                    <Reveal active={visible} step={DIVIDER} class="divider center">
                        <div class="line"></div><div class="diamond"></div>
                    </Reveal>
                    <Reveal active={visible} step={BLURB}>
                        <p class="lead">
                            {"A refined service framework engineered to optimize workflow, strengthen outcomes, and support every phase with professional precision."}
                        </p>
                    </Reveal>
                </div>
                <div class="service-list">
                    { for (0..SERVICES.len()).map(|index| html! {
                        <ServiceRow
                            key={index}
                            {index}
                            hovered={*hovered == Some(index)}
                            on_hover={on_hover.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
