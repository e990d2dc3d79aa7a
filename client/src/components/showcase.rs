//! Static sections below the hero: steps, games, perks, closing CTA, footer.

use leptos::prelude::*;

use crate::content::{PageCopy, Tile};

#[component]
pub fn HowItWorks(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <section class="section section--steps">
            <div class="section__header reveal">
                <h2 class="section__title shimmer">{copy.steps_heading}</h2>
                <p class="section__subtitle">{copy.steps_subheading}</p>
            </div>
            <div class="grid grid--3">
                {copy
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <div class="card card--step lift" style=stagger(i)>
                                <div class="card__icon wiggle">{step.icon}</div>
                                <div class="card__number">{i + 1}</div>
                                <h3 class="card__title">{step.title}</h3>
                                <p class="card__desc">{step.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn GamesGrid(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <section class="section section--games">
            <div class="section__header reveal">
                <h2 class="section__title shimmer">{copy.games_heading}</h2>
            </div>
            <div class="grid grid--3">{tiles(copy.games, "card card--game lift")}</div>
        </section>
    }
}

#[component]
pub fn Perks(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <section class="section section--perks">
            <div class="section__header reveal">
                <div class="section__icon wiggle">"🎉"</div>
                <h2 class="section__title shimmer">{copy.perks_heading}</h2>
            </div>
            <div class="grid grid--3">{tiles(copy.perks, "card card--perk lift")}</div>
        </section>
    }
}

#[component]
pub fn CallToAction(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <section class="section section--cta">
            <div class="cta pop-in">
                <h2 class="section__title shimmer">{copy.cta_heading}</h2>
                <p class="section__subtitle">{copy.cta_body}</p>
                <a class="button button--gold button--large" href="#join">{copy.submit_idle}</a>
            </div>
        </section>
    }
}

#[component]
pub fn SiteFooter(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__brand">{copy.footer_brand}</p>
            <p class="site-footer__notice">{copy.footer_notice}</p>
        </footer>
    }
}

fn tiles(items: &'static [Tile], class: &'static str) -> impl IntoView {
    items
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            view! {
                <div class=class style=stagger(i)>
                    <div class="card__icon">{tile.icon}</div>
                    <h3 class="card__title">{tile.title}</h3>
                    <p class="card__desc">{tile.desc}</p>
                </div>
            }
        })
        .collect_view()
}

/// Entrance animation delay for the `i`-th card in a row.
fn stagger(i: usize) -> String {
    format!("animation-delay:{}ms", i * 150)
}
