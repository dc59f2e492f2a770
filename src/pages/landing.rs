use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::carousel::TestimonialCarousel;
use crate::components::welcome::WelcomeOverlay;
use crate::config::{ARTIST_NAME, BRAND_NAME};
use crate::content::{
    additional_portfolio, contact_channels, featured_portfolio, floating_contacts, social_links, PortfolioItem,
    CONTACT_IMAGE, HERO_IMAGE_PORTRAIT, SERVICES, STATS,
};
use crate::dom;
use crate::effects::cursor::CursorAnimator;
use crate::effects::rotator::TestimonialRotator;
use crate::effects::scope::EffectScope;
use crate::effects::scroll::ScrollTracker;
use crate::pages::terms::TermsSection;
use crate::sections::{ScrollMeasurement, SectionId};
use crate::state::{LandingAction, LandingContext};
use crate::Route;

/// Scrolls to a section and records the navigation (closing the mobile menu).
pub fn section_navigator(state: &LandingContext) -> Callback<SectionId> {
    let dispatcher = state.dispatcher();
    Callback::from(move |section: SectionId| {
        dom::scroll_to_section(section);
        dispatcher.dispatch(LandingAction::Navigate(section));
    })
}

fn reveal(revealed: bool) -> &'static str {
    if revealed {
        "animate-fade-in-up"
    } else {
        "pre-reveal"
    }
}

fn delay(step: usize) -> String {
    format!("animation-delay: {}ms", step * 200)
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Section to bring into view once rendered.
    #[prop_or_default]
    pub focus: Option<SectionId>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    match use_context::<LandingContext>() {
        Some(state) => html! { <LandingPage state={state} focus={props.focus} /> },
        None => {
            error!("landing page rendered outside the app state provider");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct LandingPageProps {
    state: LandingContext,
    focus: Option<SectionId>,
}

#[function_component(LandingPage)]
fn landing_page(props: &LandingPageProps) -> Html {
    let state = &props.state;

    // Everything this page view registers with the browser lives in one scope.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut scope = EffectScope::new("landing");

                let on_measure = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |measurement: ScrollMeasurement| {
                        dispatcher.dispatch(LandingAction::ScrollMeasured(measurement));
                    })
                };
                match ScrollTracker::attach(on_measure) {
                    Ok(tracker) => scope.hold(tracker),
                    Err(err) => error!("scroll tracking disabled: {}", err),
                }

                match CursorAnimator::attach() {
                    Ok(cursor) => scope.hold(cursor),
                    Err(err) => error!("custom cursor disabled: {}", err),
                }

                let on_advance = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_: ()| dispatcher.dispatch(LandingAction::AdvanceTestimonial))
                };
                scope.hold(TestimonialRotator::start(on_advance));

                info!("landing page effects acquired ({})", scope.len());
                move || drop(scope)
            },
            (),
        );
    }

    use_effect_with_deps(
        |focus| {
            if let Some(section) = *focus {
                dom::scroll_to_section(section);
            }
            || ()
        },
        props.focus,
    );

    let navigate = section_navigator(state);
    let visible = |section: SectionId| state.visibility.is_visible(section);

    html! {
        <div class="landing-page">
            <WelcomeOverlay />
            { render_hero(&navigate) }
            { render_about(visible(SectionId::About)) }
            { render_services(visible(SectionId::Services)) }
            { render_portfolio(visible(SectionId::Portfolio)) }

            <section id={SectionId::Testimonials.dom_id()} class="page-section alt">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Client "}<span class="gold-text">{"Love"}</span></h2>
                        <div class="heading-rule"></div>
                    </div>
                    <TestimonialCarousel
                        index={state.testimonial_index}
                        revealed={visible(SectionId::Testimonials)}
                    />
                </div>
            </section>

            { render_contact(visible(SectionId::Contact), &navigate) }
            <TermsSection revealed={visible(SectionId::Terms)} />
            { render_footer() }
            { render_floating_contacts() }
        </div>
    }
}

fn render_hero(navigate: &Callback<SectionId>) -> Html {
    html! {
        <section id={SectionId::Home.dom_id()} class="hero">
            <div class="hero-background">
                <div class="orb orb-one"></div>
                <div class="orb orb-two"></div>
                <div class="orb orb-three"></div>
                { for (0..12usize).map(|i| html! {
                    <div
                        class="particle"
                        style={format!(
                            "left: {}%; top: {}%; animation-delay: {:.1}s;",
                            (i * 37) % 100,
                            (i * 53 + 11) % 100,
                            i as f64 * 0.4
                        )}
                    ></div>
                }) }
                <div class="grid-pattern"></div>
            </div>
            <div class="hero-content">
                <div class="hero-logo">
                    <div class="hero-logo-ring"></div>
                    <div class="hero-logo-core">
                        <span class="hero-logo-crown">{"👑"}</span>
                        <span class="hero-logo-letter">{"A"}</span>
                    </div>
                </div>
                <h1 class="hero-title animate-fade-in-up">
                    {"Professional "}
                    <span class="gold-text">{"Makeup Artist"}</span>
                </h1>
                <p class="hero-subtitle animate-fade-in-up" style={delay(1)}>
                    {"Transforming beauty through artistry. Specializing in bridal, editorial, \
                      and special occasion makeup that enhances your natural radiance"}
                </p>
                <div class="hero-cta-group animate-fade-in-up" style={delay(2)}>
                    <button class="gold-button" onclick={navigate.reform(|_: MouseEvent| SectionId::Portfolio)}>
                        <span>{"📷 View Portfolio"}</span>
                    </button>
                    <button class="outline-button" onclick={navigate.reform(|_: MouseEvent| SectionId::Contact)}>
                        <span>{"📅 Book Consultation"}</span>
                    </button>
                </div>
            </div>
            <div class="scroll-hint">{"⌄"}</div>
        </section>
    }
}

fn render_about(revealed: bool) -> Html {
    html! {
        <section id={SectionId::About.dom_id()} class="page-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"About "}<span class="gold-text">{"Me"}</span></h2>
                    <div class="heading-rule"></div>
                </div>
                <div class="about-grid">
                    <div class={classes!("about-portrait", reveal(revealed))}>
                        <img src={HERO_IMAGE_PORTRAIT} alt={format!("{} at work", ARTIST_NAME)} loading="lazy" />
                    </div>
                    <div class={classes!("about-copy", reveal(revealed))} style={delay(1)}>
                        <h3 class="gold-text">{format!("Hi, I'm {}", ARTIST_NAME)}</h3>
                        <p>
                            {"I am passionate about enhancing natural beauty and creating stunning transformations. \
                              My expertise spans from intimate bridal sessions to high-fashion editorial shoots."}
                        </p>
                        <p>
                            {"I believe makeup is an art form that should celebrate individuality while enhancing \
                              confidence. Using only premium products and the latest techniques, I ensure every \
                              client feels radiant and camera-ready for their special moments."}
                        </p>
                        <div class="stats-grid">
                            { for STATS.iter().enumerate().map(|(i, stat)| html! {
                                <div class={classes!("stat-card", reveal(revealed))} style={delay(i + 2)}>
                                    <div class="stat-icon">{stat.icon}</div>
                                    <div class="stat-number">{stat.number}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_services(revealed: bool) -> Html {
    html! {
        <section id={SectionId::Services.dom_id()} class="page-section alt">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"My "}<span class="gold-text">{"Services"}</span></h2>
                    <div class="heading-rule"></div>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class={classes!("card", "service-card", reveal(revealed))} style={delay(i)}>
                            <div class="service-icon">{service.icon}</div>
                            <div class="service-body">
                                <h3>{service.name}</h3>
                                <p class="muted">{service.description}</p>
                                <ul class="feature-list">
                                    { for service.features.iter().map(|feature| html! {
                                        <li><span class="star">{"★"}</span>{*feature}</li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_portfolio_card(item: &PortfolioItem, step: usize, revealed: bool, featured: bool) -> Html {
    html! {
        <div
            class={classes!("card", "portfolio-card", featured.then_some("featured"), reveal(revealed))}
            style={delay(step)}
        >
            <div class="portfolio-image">
                <img src={item.image} alt={item.title} loading="lazy" />
                <span class="portfolio-category">{item.category}</span>
            </div>
            <div class="portfolio-body">
                <h3>{item.title}</h3>
                <p class="muted">{item.description}</p>
            </div>
        </div>
    }
}

fn render_portfolio(revealed: bool) -> Html {
    let featured: Vec<&PortfolioItem> = featured_portfolio().collect();
    let offset = featured.len();
    html! {
        <section id={SectionId::Portfolio.dom_id()} class="page-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"My "}<span class="gold-text">{"Portfolio"}</span></h2>
                    <div class="heading-rule"></div>
                </div>
                <div class="portfolio-grid">
                    { for featured.iter().enumerate().map(|(i, item)| render_portfolio_card(item, i, revealed, true)) }
                </div>
                <div class="portfolio-grid">
                    { for additional_portfolio().enumerate().map(|(i, item)| render_portfolio_card(item, i + offset, revealed, false)) }
                </div>
            </div>
        </section>
    }
}

fn render_contact(revealed: bool, navigate: &Callback<SectionId>) -> Html {
    html! {
        <section id={SectionId::Contact.dom_id()} class="page-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Book Your "}<span class="gold-text">{"Session"}</span></h2>
                    <div class="heading-rule"></div>
                </div>
                <div class="contact-grid">
                    <div class={classes!("contact-info", reveal(revealed))}>
                        <h3>{"Let's Create Magic Together"}</h3>
                        <p class="muted">
                            {"Ready to transform your look? I'd love to discuss your vision and create \
                              a stunning makeup experience tailored just for you. Book your consultation today!"}
                        </p>
                        <div class="contact-channels">
                            { for contact_channels().into_iter().map(|channel| html! {
                                <a class="card contact-channel" href={channel.href}>
                                    <span class="channel-icon">{channel.icon}</span>
                                    <span class="channel-label">{channel.label}</span>
                                    <span>{channel.value}</span>
                                </a>
                            }) }
                        </div>
                        <button class="outline-button small" onclick={navigate.reform(|_: MouseEvent| SectionId::Terms)}>
                            {"Terms & Conditions"}
                        </button>
                        <div class="contact-image">
                            <img src={CONTACT_IMAGE} alt="Makeup Project Info" loading="lazy" />
                        </div>
                        { render_social_links() }
                    </div>
                    <div class={classes!("card", "booking-card", reveal(revealed))} style={delay(1)}>
                        <BookingForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_social_links() -> Html {
    html! {
        <div class="social-links">
            { for social_links().into_iter().map(|social| html! {
                <a class="social-link" href={social.href} aria-label={social.label} target="_blank" rel="noopener noreferrer">
                    <span>{social.icon}</span>
                </a>
            }) }
        </div>
    }
}

fn render_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="section-inner footer-inner">
                <div>
                    <div class="footer-brand gold-text">{BRAND_NAME}</div>
                    <p class="muted">
                        {format!("© 2024 {}. All rights reserved. Creating beauty, one face at a time.", ARTIST_NAME)}
                    </p>
                    <Link<Route> to={Route::Terms} classes="footer-link">
                        {"Terms & Conditions"}
                    </Link<Route>>
                </div>
                { render_social_links() }
            </div>
        </footer>
    }
}

fn render_floating_contacts() -> Html {
    html! {
        <div class="floating-contacts">
            { for floating_contacts().into_iter().map(|contact| {
                let external = !contact.href.starts_with("tel:");
                html! {
                    <a
                        class="floating-contact"
                        href={contact.href}
                        aria-label={contact.label}
                        target={external.then_some("_blank")}
                        rel={external.then_some("noopener noreferrer")}
                    >
                        <span>{contact.icon}</span>
                    </a>
                }
            }) }
        </div>
    }
}
