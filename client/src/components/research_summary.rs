//! Research summary and shopping tips from the latest exchange.

use leptos::prelude::*;

use crate::state::assist::AssistState;
use crate::state::slices;

/// Summary panel; hidden until the summary or tips are non-empty.
#[component]
pub fn ResearchSummary() -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();
    let has_research = slices::has_research(assist);
    let summary = slices::summary(assist);
    let tips = slices::tips(assist);

    view! {
        <Show when=move || has_research.get()>
            <section class="research-summary">
                <div class="research-summary__title">"✦ Research Summary"</div>
                {move || {
                    let text = summary.get();
                    (!text.is_empty()).then(|| view! { <p class="research-summary__text">{text}</p> })
                }}
                {move || {
                    let items = tips.get();
                    (!items.is_empty())
                        .then(|| {
                            view! {
                                <ul class="research-summary__tips">
                                    {items
                                        .into_iter()
                                        .map(|tip| view! { <li class="research-summary__tip">"✓ " {tip}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </section>
        </Show>
    }
}
