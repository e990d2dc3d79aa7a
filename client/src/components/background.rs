//! Animated backdrop: drifting gradient glow plus floating particles.

use leptos::prelude::*;

use crate::util::particles::{DEFAULT_COUNT, DEFAULT_SEED, particle_field};

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let particles = particle_field(DEFAULT_COUNT, DEFAULT_SEED);

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__glow"></div>
            {particles
                .into_iter()
                .map(|p| view! { <span class="backdrop__particle" style=p.style()></span> })
                .collect_view()}
        </div>
    }
}
