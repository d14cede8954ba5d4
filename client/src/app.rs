//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    protected_shell::ProtectedShell, session_gate::SessionGate, sidebar::Sidebar, top_bar::TopBar,
};
use crate::pages::{home::HomePage, section::SectionPage};
use crate::state::session_store::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the session store, starts the first resolution once on mount,
/// and nests the routes inside the session gate and the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session();
    Effect::new(move || {
        if let Some(load) = session.initial_load() {
            leptos::task::spawn_local(load);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/outliers-dashboard.css"/>
        <Title text="Outliers Dashboard"/>

        <Router>
            <SessionGate>
                <ProtectedShell>
                    <div class="dashboard">
                        <TopBar/>
                        <div class="dashboard__body">
                            <Sidebar/>
                            <main class="dashboard__main">
                                <Routes fallback=|| "Page not found.".into_view()>
                                    <Route path=StaticSegment("") view=HomePage/>
                                    <Route path=ParamSegment("section") view=SectionPage/>
                                </Routes>
                            </main>
                        </div>
                    </div>
                </ProtectedShell>
            </SessionGate>
        </Router>
    }
}
