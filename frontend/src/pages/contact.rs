use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::clock::now_ms;
use crate::components::reveal::{Offset, Reveal, RevealStep};
use crate::components::visibility::use_in_view;
use crate::config::{self, EmailJsConfig};
use crate::contact::controller::{
    submit_with, ContactFormController, Field, FormPayload, Mailer, SubmissionState, SubmitOutcome,
};
use crate::contact::emailjs::EmailJs;

const EYEBROW: RevealStep = RevealStep::new(100, Offset::y(20.0));
const HEADING: RevealStep = RevealStep::new(300, Offset::y(30.0));
const DIVIDER: RevealStep = RevealStep::new(500, Offset::NONE);
const BLURB: RevealStep = RevealStep::new(700, Offset::y(20.0));
const FORM: RevealStep = RevealStep::new(900, Offset::x(-50.0));
const DIRECT: RevealStep = RevealStep::new(1100, Offset::x(50.0));
const BRAND: RevealStep = RevealStep::new(1300, Offset::y(30.0));
const LINKS: RevealStep = RevealStep::new(1450, Offset::y(30.0));
const CONTACTS: RevealStep = RevealStep::new(1600, Offset::y(30.0));
const BOTTOM: RevealStep = RevealStep::new(1750, Offset::y(20.0));

#[derive(Clone, PartialEq)]
struct FormView {
    state: SubmissionState,
    payload: FormPayload,
}

impl FormView {
    fn of(controller: &ContactFormController) -> Self {
        FormView {
            state: controller.state().clone(),
            payload: controller.payload().clone(),
        }
    }
}

type ResetTimer = Rc<RefCell<Option<Timeout>>>;

/// Arms a timer for the controller's pending auto-reset, replacing any older one.
fn schedule_reset(
    controller: Rc<RefCell<ContactFormController>>,
    timer: ResetTimer,
    view: UseStateHandle<FormView>,
) {
    let Some(reset_at) = controller.borrow().reset_at() else {
        return;
    };
    let delay = reset_at.saturating_sub(now_ms()).min(u64::from(u32::MAX)) as u32;
    let slot = timer.clone();
    let timeout = Timeout::new(delay, move || {
        if controller.borrow_mut().tick(now_ms()) {
            view.set(FormView::of(&controller.borrow()));
        } else {
            schedule_reset(controller, timer, view);
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Option<EmailJsConfig>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), 0.2);

    let controller = {
        let config = props.config.clone();
        use_mut_ref(move || ContactFormController::new(config))
    };
    let reset_timer: ResetTimer = use_mut_ref(|| None);
    let mailer: Rc<dyn Mailer> = (*use_memo(|_| Rc::new(EmailJs::default()) as Rc<dyn Mailer>, ())).clone();
    let view = {
        let controller = controller.clone();
        use_state(move || FormView::of(&controller.borrow()))
    };

    {
        let controller = controller.clone();
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    controller.borrow_mut().dispose();
                    if let Some(timeout) = reset_timer.borrow_mut().take() {
                        timeout.cancel();
                    }
                }
            },
            (),
        );
    }

    let on_field = |field: Field| {
        let controller = controller.clone();
        let view = view.clone();
        move |value: String| {
            controller.borrow_mut().set_field(field, value);
            view.set(FormView::of(&controller.borrow()));
        }
    };
    let on_name = {
        let update = on_field(Field::Name);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let update = on_field(Field::Email);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let update = on_field(Field::Message);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_submit = {
        let controller = controller.clone();
        let reset_timer = reset_timer.clone();
        let view = view.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            let reset_timer = reset_timer.clone();
            let view = view.clone();
            let mailer = mailer.clone();
            spawn_local(async move {
                let notify = |c: &ContactFormController| view.set(FormView::of(c));
                let outcome = submit_with(&controller, &*mailer, now_ms, notify).await;
                if outcome == SubmitOutcome::Rejected {
                    gloo_console::log!("Submit ignored, a message is already being sent");
                    return;
                }
                schedule_reset(controller, reset_timer, view);
            });
        })
    };

    let submitting = view.state == SubmissionState::Submitting;
    let status = match &view.state {
        SubmissionState::Success => html! {
            <div class="notice success">
                <span class="mark">{"✓"}</span>
                <div>
                    <strong>{"Success!"}</strong>
                    <p>{"Message sent successfully! We will get back to you soon."}</p>
                </div>
            </div>
        },
        SubmissionState::Error(message) => html! {
            <div class="notice error">
                <span class="mark">{"✗"}</span>
                <div>
                    <strong>{"Error"}</strong>
                    <p>{message.clone()}</p>
                </div>
            </div>
        },
        _ => html! {},
    };
    let year = chrono::Local::now().year();

    html! {
        <footer id="contact" class="contact">
            <style>
                {r#"
                .contact-top {
                    padding: 6rem 0;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .contact h3.boxed {
                    font-size: 1.25rem;
                    margin-bottom: 1.5rem;
                    color: #1f2937;
                    border-left: 4px solid #ed1b24;
                    padding-left: 1rem;
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                    background: #fff;
                    border: none;
                    border-bottom: 2px solid #d1d5db;
                    color: #1f2937;
                    resize: none;
                    transition: border-color 0.3s;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    border-bottom-color: #ed1b24;
                }
                .contact-form :disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .contact-form button {
                    width: 100%;
                    margin-top: 0.5rem;
                }
                .notice {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 1rem;
                    padding: 1rem;
                    font-size: 0.875rem;
                    border-radius: 0 0.25rem 0.25rem 0;
                }
                .notice.success {
                    background: #f0fdf4;
                    border-left: 4px solid #22c55e;
                    color: #15803d;
                }
                .notice.error {
                    background: #fef2f2;
                    border-left: 4px solid #ef4444;
                    color: #b91c1c;
                }
                .direct p, .direct li {
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.7;
                }
                .map-link {
                    display: block;
                    position: relative;
                    height: 12rem;
                    margin-top: 1rem;
                    border: 1px solid #d1d5db;
                    overflow: hidden;
                }
                .map-link iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                    pointer-events: none;
                }
                .contact-bottom {
                    background: #fff;
                    border-top: 1px solid #e5e7eb;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .footer-grid h4 {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-grid li {
                    margin-bottom: 0.75rem;
                    font-size: 0.875rem;
                }
                .footer-grid a, .copyright a {
                    color: #4b5563;
                    text-decoration: none;
                }
                .copyright {
                    display: flex;
                    justify-content: space-between;
                    padding: 2rem 1.5rem;
                    border-top: 1px solid #e5e7eb;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .copyright .legal {
                    display: flex;
                    gap: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .contact-grid, .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .copyright {
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
            <div class="contact-top" ref={section_ref}>
                <div class="container">
                    <div class="section-header centered">
                        <Reveal active={visible} step={EYEBROW} class="eyebrow">
                            <span class="rule"></span>{"Get In Touch"}
                        </Reveal>
                        <Reveal active={visible} step={HEADING}>
                            <h2><span class="textured">{"Start Your Venture Now"}</span></h2>
                        </Reveal>
                        <Reveal active={visible} step={DIVIDER} class="divider center">
                            <div class="line"></div><div class="diamond"></div>
                        </Reveal>
                        <Reveal active={visible} step={BLURB}>
                            <p class="lead">
                                {"Get expert guidance, tailored solutions, and exceptional value for your steel fabrication needs."}
                            </p>
                        </Reveal>
                    </div>

                    <div class="contact-grid">
                        <Reveal active={visible} step={FORM}>
                            <h3 class="boxed">{"Send Us a Message"}</h3>
                            <form class="contact-form" onsubmit={on_submit}>
                                <input
                                    type="text"
                                    name="from_name"
                                    placeholder="Name"
                                    value={view.payload.name.clone()}
                                    oninput={on_name}
                                    disabled={submitting}
                                    required=true
                                />
                                <input
                                    type="email"
                                    name="from_email"
                                    placeholder="Email"
                                    value={view.payload.email.clone()}
                                    oninput={on_email}
                                    disabled={submitting}
                                    required=true
                                />
                                <textarea
                                    name="message"
                                    placeholder="Message"
                                    rows="5"
                                    value={view.payload.message.clone()}
                                    oninput={on_message}
                                    disabled={submitting}
                                    required=true
                                />
                                <button type="submit" class="btn-dark" disabled={submitting}>
                                    { if submitting { "Sending..." } else { "Send Message" } }
                                </button>
                                { status }
                            </form>
                        </Reveal>

                        <Reveal active={visible} step={DIRECT} class="direct">
                            <h3 class="boxed">{"Direct Contact"}</h3>
                            <p>{"For immediate assistance, feel free to reach out directly."}</p>
                            <ul class="plain">
                                <li>{"☎ "}{config::PHONE_NUMBERS.join(" | ")}</li>
                                <li>{"✉ "}{config::CONTACT_EMAIL}</li>
                            </ul>
                            <h3 class="boxed">{"Visit Us"}</h3>
                            <p>{config::ADDRESS}</p>
                            <p>{"Office Hours: 8:00 AM to 5:00 PM, Monday to Saturday"}</p>
                            <a class="map-link" href={config::MAPS_LINK} target="_blank" rel="noopener noreferrer">
                                <iframe
                                    src={config::MAPS_EMBED}
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    title="Najmat Al Zahra Steel Location"
                                ></iframe>
                            </a>
                        </Reveal>
                    </div>
                </div>
            </div>

            <div class="contact-bottom">
                <div class="footer-grid">
                    <Reveal active={visible} step={BRAND}>
                        <div class="brand">
                            <img src="/assets/logo.png" alt="Najmat Al Zahra Steel" />
                            <div>
                                <span class="brand-name">{"NAJMAT AL ZAHRA"}</span>
                                <span class="brand-sub">{"STEEL"}</span>
                            </div>
                        </div>
                        <p class="muted">{"Premium steel solutions engineered for strength, coated for perfection, built to last."}</p>
                    </Reveal>
                    <Reveal active={visible} step={LINKS}>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for config::NAV_LINKS.iter().take(4).map(|(label, id)| html! {
                                <li><a href={format!("#{}", id)}>{*label}</a></li>
                            }) }
                        </ul>
                    </Reveal>
                    <Reveal active={visible} step={CONTACTS}>
                        <h4>{"Contact Us"}</h4>
                        <ul>
                            <li><span class="label">{"Phone"}</span><br />{config::PHONE_NUMBERS[0]}</li>
                            <li><span class="label">{"Email"}</span><br />{config::CONTACT_EMAIL}</li>
                            <li><span class="label">{"Location"}</span><br />{config::ADDRESS}</li>
                        </ul>
                    </Reveal>
                </div>
                <Reveal active={visible} step={BOTTOM} class="copyright">
                    <p>{format!("© {} Najmat Al Zahra Steel. All rights reserved.", year)}</p>
                    <div class="legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </Reveal>
            </div>
        </footer>
    }
}
