//! Dashboard section placeholders (datasets, collaborations, ...).
//!
//! The section screens themselves are out of scope here; each route renders
//! its title and summary inside the protected shell.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// A top-level dashboard section reachable at `/{slug}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { slug: "datasets", title: "Datasets", summary: "Encrypted datasets available to your organization." },
    Section {
        slug: "collaborations",
        title: "Collaborations",
        summary: "Partners you compute with and the agreements that govern each collaboration.",
    },
    Section { slug: "computations", title: "Computations", summary: "Secure multi-party computation jobs and their status." },
    Section { slug: "insights", title: "Insights", summary: "Results released from completed computations." },
    Section { slug: "security", title: "Security", summary: "Audit trails, compliance reports, and data residency." },
    Section { slug: "settings", title: "Settings", summary: "Profile, API keys, and notification preferences." },
    Section { slug: "notifications", title: "Notifications", summary: "Activity across your datasets and collaborations." },
];

/// Section for a route slug, if it exists.
pub fn find_section(slug: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.slug == slug)
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let params = use_params_map();
    let section = move || params.read().get("section").and_then(|slug| find_section(&slug));

    move || match section() {
        Some(section) => view! {
            <section class="page">
                <h1 class="page__title">{section.title}</h1>
                <p class="page__summary">{section.summary}</p>
            </section>
        }
        .into_any(),
        None => view! { <p class="page page--missing">"Page not found."</p> }.into_any(),
    }
}
