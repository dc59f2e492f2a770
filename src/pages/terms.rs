use yew::prelude::*;

use crate::content::TERMS;
use crate::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct TermsProps {
    pub revealed: bool,
}

#[function_component(TermsSection)]
pub fn terms_section(props: &TermsProps) -> Html {
    html! {
        <section id={SectionId::Terms.dom_id()} class="page-section alt">
            <div class="section-inner narrow">
                <div class="section-heading">
                    <h2>{"Terms & "}<span class="gold-text">{"Conditions"}</span></h2>
                    <div class="heading-rule"></div>
                </div>
                <div class="terms-blocks">
                    { for TERMS.iter().enumerate().map(|(i, block)| html! {
                        <div
                            class={classes!("terms-block", if props.revealed { "animate-fade-in-up" } else { "pre-reveal" })}
                            style={format!("animation-delay: {}ms", i * 150)}
                        >
                            <h3>{block.heading}</h3>
                            <ul>
                                { for block.items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .terms-blocks {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .terms-block h3 {
                        margin: 0 0 1rem;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #facc15;
                    }
                    .terms-block ul {
                        margin: 0;
                        padding-left: 1.25rem;
                        color: var(--muted);
                        line-height: 1.9;
                    }
                "#}
            </style>
        </section>
    }
}
