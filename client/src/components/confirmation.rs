//! Full-screen thank-you state shown once a lead has been handed off.

use leptos::prelude::*;

use crate::content::PageCopy;

#[component]
pub fn Confirmation(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <main class=format!("confirmation {}", copy.theme_class)>
            <div class="confirmation__card pop-in" role="status">
                <div class="confirmation__icon wiggle">"🎰"</div>
                <h1 class="confirmation__title shimmer">{copy.success_title}</h1>
                <p class="confirmation__body">{copy.success_body}</p>
            </div>
        </main>
    }
}
