use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod booking;
mod config;
mod content;
mod dom;
mod error;
mod sections;
mod state;
mod styles;
mod theme;
mod effects {
    pub mod cursor;
    pub mod rotator;
    pub mod scope;
    pub mod scroll;
}
mod components {
    pub mod booking_form;
    pub mod carousel;
    pub mod welcome;
}
mod pages {
    pub mod landing;
    pub mod terms;
}

use content::TESTIMONIALS;
use pages::landing::{section_navigator, Landing};
use sections::SectionId;
use state::{LandingAction, LandingContext, LandingState};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms section");
            html! { <Landing focus={SectionId::Terms} /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = match use_context::<LandingContext>() {
        Some(state) => state,
        None => {
            error!("navigation rendered outside the app state provider");
            return html! {};
        }
    };

    let navigate = section_navigator(&state);

    let toggle_theme = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(LandingAction::ToggleTheme))
    };

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(LandingAction::ToggleMenu);
        })
    };

    let nav_links = |extra: &'static str| {
        SectionId::NAV
            .iter()
            .map(|section| {
                let section = *section;
                let onclick = navigate.reform(move |_: MouseEvent| section);
                html! {
                    <button
                        class={classes!("nav-link", extra, (state.active_section == section).then_some("active"))}
                        {onclick}
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect::<Html>()
    };

    let theme_icon = if state.theme.is_dark() { "☀" } else { "☾" };
    let theme_label = if state.theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a
                    class="nav-logo clickable"
                    onclick={navigate.reform(|_: MouseEvent| SectionId::Home)}
                >
                    <span class="nav-logo-mark">{"👑"}</span>
                    <span class="gold-text">{config::BRAND_NAME}</span>
                </a>
                <div class="nav-right">
                    { nav_links("") }
                    <button class="theme-toggle" aria-label={theme_label} onclick={toggle_theme.clone()}>
                        {theme_icon}
                    </button>
                </div>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", state.menu_open.then_some("open"))}>
                { nav_links("mobile") }
                <button class="theme-toggle" aria-label={theme_label} onclick={toggle_theme}>
                    {theme_icon}
                </button>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let state = use_reducer(|| LandingState::new(theme::load_from_browser(), TESTIMONIALS.len()));

    {
        let theme = state.theme;
        use_effect_with_deps(
            move |theme| {
                theme::sync_to_browser(*theme);
                || ()
            },
            theme,
        );
    }

    html! {
        <ContextProvider<LandingContext> context={state}>
            <style>{styles::GLOBAL_CSS}</style>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<LandingContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
