//! Solution catalog cards.
//!
//! Each card acts as the external solution selector for the inquiry form:
//! choosing one reconciles the draft and jumps to `#contact`.

use inquiry::Catalog;
use leptos::prelude::*;

use crate::state::inquiry::InquiryState;

#[component]
pub fn Solutions() -> impl IntoView {
    let inquiry = expect_context::<RwSignal<InquiryState>>();
    let catalog = Catalog::builtin();

    view! {
        <section id="solutions" class="solutions">
            <h2 class="solutions__title">"ESET PROTECT 솔루션"</h2>
            <div class="solutions__grid">
                <For
                    each=move || catalog.solutions().to_vec()
                    key=|solution| solution.id.clone()
                    children=move |solution| {
                        let name = solution.name.clone();
                        let selected = {
                            let name = name.clone();
                            move || inquiry.with(|s| s.draft.solution == name)
                        };
                        view! {
                            <article class="solution-card" class:solution-card--selected=selected>
                                <h3 class="solution-card__name">{solution.name.clone()}</h3>
                                <p class="solution-card__summary">{solution.summary.clone()}</p>
                                <a
                                    href="#contact"
                                    class="solution-card__cta"
                                    on:click=move |_| {
                                        inquiry.update(|s| {
                                            s.select_solution(Some(&name));
                                        });
                                    }
                                >
                                    "견적 문의"
                                </a>
                            </article>
                        }
                    }
                />
            </div>
        </section>
    }
}
