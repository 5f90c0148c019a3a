//! Landing hero banner.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Stat {
    value: &'static str,
    caption: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "24/7", caption: "PROTECTION WITHOUT COMPROMISE" },
    Stat { value: "850+", caption: "GLOBAL CYBERSECURITY RESEARCHERS AND EXPERTS" },
    Stat { value: "6min", caption: "THE FASTEST DETECTION AND RESPONSE SERVICE" },
];

/// Static hero with anchors to the solution list and the inquiry form.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <div class="hero__badge">"Global Top-Tier Endpoint Security"</div>
                <h1 class="hero__title">
                    "기업을 위한 최고의 디지털 보안"
                    <br/>
                    <span class="hero__title-accent">"ESET PROTECT PLATFORM 솔루션"</span>
                </h1>
                <p class="hero__lead">
                    "ESET의 멀티레이어 보호 기술은 랜섬웨어, 제로데이, 피싱 등 "
                    "고도화된 사이버 위협으로부터 기업의 자산을 빈틈없이 보호합니다."
                </p>
                <div class="hero__actions">
                    <a href="#solutions" class="hero__button hero__button--primary">"솔루션 알아보기"</a>
                    <a href="#contact" class="hero__button hero__button--ghost">"솔루션 상담 신청"</a>
                </div>
                <div class="hero__stats">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero__stat">
                                    <span class="hero__stat-value">{stat.value}</span>
                                    <span class="hero__stat-caption">{stat.caption}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
