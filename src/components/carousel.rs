use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub index: usize,
    pub revealed: bool,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &CarouselProps) -> Html {
    let Some(current) = TESTIMONIALS.get(props.index) else {
        return html! {};
    };

    let card_class = classes!(
        "testimonial-card",
        if props.revealed { "animate-fade-in-up" } else { "pre-reveal-scale" }
    );

    html! {
        <div class="testimonial-carousel">
            <div class={card_class}>
                <span class="quote-mark open">{"“"}</span>
                <span class="quote-mark close">{"”"}</span>
                // keyed so each rotation replays the slide-in animation
                <div class="testimonial-body" key={props.index}>
                    <div class="testimonial-stars">
                        { for (0..current.rating).map(|i| html! {
                            <span class="star" style={format!("animation-delay: {}ms", u32::from(i) * 100)}>{"★"}</span>
                        }) }
                    </div>
                    <p class="testimonial-text">{format!("\"{}\"", current.text)}</p>
                    <div class="testimonial-author">
                        <img src={current.image} alt={current.name} class="testimonial-avatar" loading="lazy" />
                        <div>
                            <h4>{current.name}</h4>
                            <p class="testimonial-event">{current.event}</p>
                        </div>
                    </div>
                </div>
                // Indicator dots are display-only; clicking them does not select a testimonial.
                <div class="testimonial-dots">
                    { for (0..TESTIMONIALS.len()).map(|i| html! {
                        <div class={classes!("dot", (i == props.index).then_some("current"))}></div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .testimonial-carousel {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .testimonial-card {
                        position: relative;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        border: 1px solid var(--card-border);
                        background: var(--card-bg);
                        overflow: hidden;
                        transition: transform 0.5s, opacity 0.5s;
                    }
                    .quote-mark {
                        position: absolute;
                        font-size: 6rem;
                        line-height: 1;
                        color: rgba(250, 204, 21, 0.2);
                    }
                    .quote-mark.open { top: 1rem; left: 1.5rem; }
                    .quote-mark.close { bottom: -1rem; right: 1.5rem; }
                    .testimonial-body {
                        text-align: center;
                        animation: slideIn 0.6s ease-out;
                    }
                    .testimonial-stars .star {
                        display: inline-block;
                        color: #facc15;
                        font-size: 1.5rem;
                        margin: 0 0.15rem;
                        animation: fadeInUp 0.4s ease-out both;
                    }
                    .testimonial-text {
                        margin: 1.5rem 0 2rem;
                        font-size: 1.25rem;
                        font-style: italic;
                        line-height: 1.7;
                        color: var(--muted);
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: left;
                    }
                    .testimonial-avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 2px solid #facc15;
                    }
                    .testimonial-author h4 {
                        margin: 0;
                        font-size: 1.125rem;
                    }
                    .testimonial-event {
                        margin: 0.25rem 0 0;
                        color: #facc15;
                    }
                    .testimonial-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .testimonial-dots .dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: var(--dot);
                        transition: transform 0.3s, background 0.3s;
                    }
                    .testimonial-dots .dot.current {
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                        transform: scale(1.25);
                    }
                    @keyframes slideIn {
                        from { opacity: 0; transform: translateX(2rem); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
        </div>
    }
}
