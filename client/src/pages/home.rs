//! Landing page: hero, solution catalog, inquiry form.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{contact_form::ContactForm, footer::Footer, hero::Hero, solutions::Solutions};
use crate::state::inquiry::InquiryState;

/// Landing page.
///
/// A `?solution=<name>` link (from campaign pages or partner sites) is
/// reconciled into the draft once when the page mounts.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<InquiryState>>();
    let requested = use_query_map().with_untracked(|q| q.get("solution"));
    state.update(|s| {
        s.select_solution(requested.as_deref());
    });

    view! {
        <Hero/>
        <main class="landing">
            <Solutions/>
            <ContactForm/>
        </main>
        <Footer/>
    }
}
