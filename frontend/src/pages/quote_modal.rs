use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, PHONE_NUMBERS};

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(QuoteModal)]
pub fn quote_modal(props: &QuoteModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="quote-overlay">
            <style>
                {r#"
                .quote-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                }
                .quote-box {
                    position: relative;
                    max-width: 42rem;
                    margin: 0 1rem;
                    padding: 3rem;
                    background: #000;
                    border: 2px solid #4b5563;
                    border-radius: 0.5rem;
                    color: #d1d5db;
                    line-height: 1.7;
                }
                .quote-box h2 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .quote-box a {
                    color: #ed1b24;
                    font-weight: 600;
                }
                .quote-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="quote-box">
                <button class="quote-close" aria-label="Close modal" onclick={close}>{"×"}</button>
                <h2>{"Get Your Quote"}</h2>
                <p>
                    {"For immediate assistance, feel free to call, WhatsApp, or email our representatives directly at "}
                    { for PHONE_NUMBERS.iter().map(|number| html! {
                        <>
                            <a href={format!("tel:{}", number)}>{*number}</a>
                            {", "}
                        </>
                    }) }
                    {"or "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    {". Whether you're ready for a consultation, have project details, or want to share references or drawings, our team is prepared to provide expert guidance and tailored solutions promptly."}
                </p>
            </div>
        </div>
    }
}
