//! Signup form bound to the lead form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the six inputs from `LeadFormState`, writes keystrokes back through
//! `update_field`, and hands submission to `state::lead_form::submit` with the
//! browser HTTP sink. All rules live in the controller; this module only maps
//! state to markup.

use leads::{Field, UsState};
use leptos::prelude::*;

use crate::content::PageCopy;
use crate::state::lead_form::LeadFormState;

/// The "Join Today" card with the signup form.
#[component]
pub fn LeadCaptureForm(copy: &'static PageCopy, state: RwSignal<LeadFormState>) -> impl IntoView {
    let busy = move || state.with(LeadFormState::is_submitting);
    let locked = move || !state.with(LeadFormState::accepts_input);
    let failure = move || state.with(|s| s.failure().map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let variant = copy.variant;
            leptos::task::spawn_local(async move {
                let sink = crate::net::api::HttpLeadSink::new(variant);
                let attempt = crate::state::lead_form::submit(&state, &sink).await;
                log::debug!("lead submit ({variant}): {attempt:?}");
            });
        }
    };

    view! {
        <div id="join" class="join-card">
            <h3 class="join-card__title">{copy.form_heading}</h3>
            <p class="join-card__subtitle">{copy.form_subheading}</p>
            <form class="lead-form" novalidate=true on:submit=on_submit>
                <div class="lead-form__row">
                    <FormInput state field=Field::FirstName placeholder="First Name"/>
                    <FormInput state field=Field::LastName placeholder="Last Name"/>
                </div>
                <FormInput state field=Field::Phone placeholder="Phone (10 digits)" input_type="tel"/>
                <FormInput state field=Field::Email placeholder="Email" input_type="email"/>
                <FormInput state field=Field::DateOfBirth placeholder="Date of Birth" input_type="date"/>
                <StateSelect state/>
                {move || failure().map(|msg| view! { <p class="lead-form__banner" role="alert">{msg}</p> })}
                <button class="lead-form__submit" type="submit" disabled=locked>
                    {move || if busy() { copy.submit_busy } else { copy.submit_idle }}
                </button>
                <p class="lead-form__consent">{copy.consent}</p>
            </form>
        </div>
    }
}

#[component]
fn FormInput(
    state: RwSignal<LeadFormState>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <input
                class=move || input_class(state, field)
                type=input_type
                name=field.key()
                placeholder=placeholder
                aria-label=field.label()
                prop:value=move || state.with(|s| s.form.get(field).to_owned())
                on:input=move |ev| state.update(|s| s.update_field(field, event_target_value(&ev)))
                disabled=move || !state.with(LeadFormState::accepts_input)
            />
            <FieldErrorText state field/>
        </div>
    }
}

#[component]
fn StateSelect(state: RwSignal<LeadFormState>) -> impl IntoView {
    let field = Field::State;
    view! {
        <div class="field">
            <select
                class=move || input_class(state, field)
                name=field.key()
                aria-label=field.label()
                prop:value=move || state.with(|s| s.form.state.clone())
                on:change=move |ev| state.update(|s| s.update_field(field, event_target_value(&ev)))
                disabled=move || !state.with(LeadFormState::accepts_input)
            >
                <option value="">"Select State"</option>
                {UsState::ALL
                    .iter()
                    .map(|us| view! { <option value=us.code()>{us.code()}</option> })
                    .collect_view()}
            </select>
            <FieldErrorText state field/>
        </div>
    }
}

#[component]
fn FieldErrorText(state: RwSignal<LeadFormState>, field: Field) -> impl IntoView {
    move || {
        state
            .with(|s| s.error_for(field))
            .map(|msg| view! { <span class="field__error">{msg}</span> })
    }
}

fn input_class(state: RwSignal<LeadFormState>, field: Field) -> &'static str {
    if state.with(|s| s.errors.contains(field)) {
        "field__input field__input--invalid"
    } else {
        "field__input"
    }
}
