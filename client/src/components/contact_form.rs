//! Inquiry form bound to the page's `InquiryState`.
//!
//! One control is rendered per `Field::ALL` entry. Native `required` and
//! `type` attributes still give the browser's own prompts, and submission
//! re-validates through `inquiry::submit` before the mail client is launched.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use inquiry::{Catalog, Field, SALES_PHONE};
use leptos::prelude::*;

use crate::state::inquiry::{InquiryState, field_label};

/// Kind of form control used for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Select,
    TextArea,
    /// `<input>` with the given `type`.
    Input(&'static str),
}

pub fn control_for(field: Field) -> Control {
    match field {
        Field::Solution => Control::Select,
        Field::Remarks => Control::TextArea,
        Field::Phone => Control::Input("tel"),
        Field::Email => Control::Input("email"),
        Field::Quantity | Field::CompanyName | Field::ContactName => Control::Input("text"),
    }
}

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Solution => "",
        Field::Quantity => "예: 50, 100",
        Field::CompanyName => "회사명을 입력하세요",
        Field::ContactName => "담당자 성함을 입력하세요",
        Field::Phone => "010-0000-0000",
        Field::Email => "email@company.com",
        Field::Remarks => "궁금하신 점이나 추가 요청사항을 적어주세요.",
    }
}

fn control_id(field: Field) -> String {
    format!("inquiry-{}", field.name())
}

/// Inquiry section with the form and its submit handler.
#[component]
pub fn ContactForm() -> impl IntoView {
    let state = expect_context::<RwSignal<InquiryState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = state.with_untracked(|s| s.draft.clone());
        if let Err(e) = inquiry::validate(&draft) {
            state.update(|s| s.reject(&e));
            return;
        }

        #[cfg(feature = "hydrate")]
        dispatch(state, &draft);
    };

    view! {
        <section id="contact" class="inquiry">
            <div class="inquiry__header">
                <h2>"도입 문의 및 상담"</h2>
                <p>"전문 컨설턴트가 귀사의 환경에 맞는 최적의 보안 솔루션을 제안해 드립니다."</p>
            </div>
            <form class="inquiry-form" on:submit=on_submit>
                <div class="inquiry-form__grid">
                    {Field::ALL.into_iter().map(|field| view! { <FieldControl field=field/> }).collect_view()}
                </div>
                <Show when=move || state.with(|s| s.feedback.is_some())>
                    <p class="inquiry-form__feedback">
                        {move || state.with(|s| s.feedback.clone().unwrap_or_default())}
                    </p>
                </Show>
                <button type="submit" class="inquiry-form__submit">"문의 메일 전송하기"</button>
                <p class="inquiry-form__hint">
                    "* 전송 버튼을 누르면 기본 메일 앱이 실행됩니다."
                    <br/>
                    "직접 문의: "
                    <span class="inquiry-form__phone">{SALES_PHONE}</span>
                </p>
            </form>
        </section>
    }
}

/// Label plus control for one draft field.
#[component]
fn FieldControl(field: Field) -> impl IntoView {
    let state = expect_context::<RwSignal<InquiryState>>();
    let id = control_id(field);
    let value = move || state.with(|s| s.draft.get(field).to_owned());

    let control = match control_for(field) {
        Control::Select => view! {
            <select
                id=id.clone()
                name=field.name()
                class="inquiry-form__control"
                prop:value=value
                on:change=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
            >
                <For
                    each=move || Catalog::builtin().solutions().to_vec()
                    key=|solution| solution.id.clone()
                    children=move |solution| {
                        let name = solution.name.clone();
                        view! {
                            <option
                                value=solution.name.clone()
                                selected=move || state.with(|s| s.draft.solution == name)
                            >
                                {solution.name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        }
        .into_any(),
        Control::TextArea => view! {
            <textarea
                id=id.clone()
                name=field.name()
                rows="4"
                class="inquiry-form__control inquiry-form__control--textarea"
                placeholder=placeholder(field)
                prop:value=value
                on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        Control::Input(kind) => view! {
            <input
                id=id.clone()
                name=field.name()
                type=kind
                required=field.is_required()
                class="inquiry-form__control"
                placeholder=placeholder(field)
                prop:value=value
                on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    let wide = control_for(field) == Control::TextArea;
    view! {
        <div class="inquiry-form__field" class:inquiry-form__field--wide=wide>
            <label class="inquiry-form__label" for=id>
                {field_label(field)}
            </label>
            {control}
        </div>
    }
}

/// Launch the mail client for a validated draft and show the outcome.
#[cfg(feature = "hydrate")]
fn dispatch(state: RwSignal<InquiryState>, draft: &inquiry::InquiryDraft) {
    use crate::util::{mail_link::DocumentLinkHost, notice};

    let Some(mut host) = DocumentLinkHost::current() else {
        log::error!("mailto launch skipped: no document");
        notice::show(&inquiry::Notice::failure());
        return;
    };
    match inquiry::submit(draft, &inquiry::MessageTemplate::quote_request(), &mut host) {
        Ok(receipt) => {
            if receipt.launched() {
                log::debug!("mailto launched: {}", receipt.uri);
            }
            state.update(InquiryState::record_submission);
            notice::show(&receipt.notice);
        }
        Err(e) => state.update(|s| s.reject(&e)),
    }
}
