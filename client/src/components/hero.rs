//! Left half of the hero: headline, feature highlights and bonus tiers.

use leptos::prelude::*;

use crate::content::PageCopy;

#[component]
pub fn HeroBranding(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <div class="hero__branding">
            <h1 class="hero__headline shimmer">{copy.headline}</h1>
            <p class="hero__tagline">{copy.tagline}</p>
            <ul class="hero__features">
                {copy
                    .features
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="hero__feature lift">
                                <span class="hero__feature-icon">{item.icon}</span>
                                <span>{item.text}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="bonus-card">
                <h2 class="bonus-card__title">{copy.bonus_heading}</h2>
                {copy
                    .bonus_tiers
                    .iter()
                    .map(|tier| {
                        view! {
                            <div class="bonus-card__tier">
                                <span>"Deposit " {tier.deposit}</span>
                                <span class="bonus-card__bonus">"→ Get " {tier.bonus} " FREE"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
