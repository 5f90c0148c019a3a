//! Page footer with the direct contact line.

use inquiry::{SALES_ADDRESS, SALES_PHONE};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__company">"ESTC · ESET 보안 솔루션"</p>
            <p class="site-footer__contact">
                "영업 문의: "
                <a href=format!("mailto:{SALES_ADDRESS}")>{SALES_ADDRESS}</a>
                " · "
                <span>{SALES_PHONE}</span>
            </p>
        </footer>
    }
}
