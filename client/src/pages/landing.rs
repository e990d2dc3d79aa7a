//! Landing page for one branding variant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `RwSignal<LeadFormState>` for the page and switches between the
//! marketing layout with the signup form and the confirmation screen once
//! the controller reports `Submitted`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leads::Variant;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::background::AnimatedBackground;
use crate::components::confirmation::Confirmation;
use crate::components::hero::HeroBranding;
use crate::components::lead_form::LeadCaptureForm;
use crate::components::showcase::{CallToAction, GamesGrid, HowItWorks, Perks, SiteFooter};
use crate::components::site_header::SiteHeader;
use crate::content::copy_for;
use crate::state::lead_form::LeadFormState;

/// Route view for `/`.
#[component]
pub fn ClassicLanding() -> impl IntoView {
    view! { <LandingPage variant=Variant::Classic/> }
}

/// Route view for `/arcade`.
#[component]
pub fn ArcadeLanding() -> impl IntoView {
    view! { <LandingPage variant=Variant::Arcade/> }
}

#[component]
pub fn LandingPage(variant: Variant) -> impl IntoView {
    let copy = copy_for(variant);
    let state = RwSignal::new(LeadFormState::default());
    let submitted = move || state.with(LeadFormState::is_submitted);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if submitted() {
            scroll_to_top();
        }
    });

    view! {
        <Title text=copy.page_title/>
        <div class=page_class(copy.theme_class)>
            <AnimatedBackground/>
            <Show
                when=submitted
                fallback=move || {
                    view! {
                        <SiteHeader copy/>
                        <main>
                            <section class="hero">
                                <div class="hero__grid">
                                    <HeroBranding copy/>
                                    <LeadCaptureForm copy state/>
                                </div>
                            </section>
                            <HowItWorks copy/>
                            <GamesGrid copy/>
                            <Perks copy/>
                            <CallToAction copy/>
                        </main>
                        <SiteFooter copy/>
                    }
                }
            >
                <Confirmation copy/>
            </Show>
        </div>
    }
}

fn page_class(theme_class: &str) -> String {
    format!("page {theme_class}")
}

#[cfg(feature = "hydrate")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
