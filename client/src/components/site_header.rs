//! Sticky top bar with the brand mark and a jump link to the form.

use leptos::prelude::*;

use crate::content::PageCopy;

#[component]
pub fn SiteHeader(copy: &'static PageCopy) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <span class="brand-mark">{copy.brand}</span>
                <span class="site-header__tag">{copy.brand_tag}</span>
            </div>
            <a class="button button--gold site-header__cta" href="#join">{copy.nav_cta}</a>
        </header>
    }
}
