//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::inquiry::InquiryState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the inquiry draft for the lifetime of the page and provides it to the
/// form and to the components that select a solution externally.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let inquiry = RwSignal::new(InquiryState::default());
    provide_context(inquiry);

    view! {
        <Stylesheet id="leptos" href="/pkg/estc-site.css"/>
        <Title text="ESET PROTECT | ESTC"/>
        <Meta name="description" content="ESET PROTECT 플랫폼 도입 문의 및 견적 상담"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
