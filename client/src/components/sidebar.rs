//! Left navigation listing the dashboard sections.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::section::SECTIONS;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <A href="/" exact=true>"Home"</A>
            {SECTIONS
                .iter()
                .map(|section| view! { <A href=format!("/{}", section.slug)>{section.title}</A> })
                .collect_view()}
        </nav>
    }
}
