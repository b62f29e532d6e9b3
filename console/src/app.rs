//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::MockDataSource;
use crate::pages::{
    ab_manager::AbManagerPage, agent_chat::AgentChatPage, campaign_analytics::CampaignAnalyticsPage,
    campaign_builder::CampaignBuilderPage, dashboard::DashboardPage, research_papers::ResearchPapersPage,
    view_research_paper::ViewResearchPaperPage,
};
use crate::state::ui::UiState;

/// One entry in the navigation rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Absolute route path; also the route segment without the leading `/`.
    pub path: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    #[must_use]
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

/// Navigable pages in rail order. The detail view is reached from the library.
pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Dashboard", path: "/Dashboard", icon: "▦" },
    NavItem { label: "Campaign Builder", path: "/CampaignBuilder", icon: "✚" },
    NavItem { label: "Campaign Analytics", path: "/CampaignAnalytics", icon: "◔" },
    NavItem { label: "Agent Chat", path: "/AgentChat", icon: "✉" },
    NavItem { label: "A/B Manager", path: "/ABManager", icon: "⇄" },
    NavItem { label: "Research Papers", path: "/ResearchPapers", icon: "❏" },
];

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
/// Provides shell-wide UI state and the data collaborator, then routes every
/// page inside the shared layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(MockDataSource::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/campaign-console.css"/>
        <Title text="Campaign Console"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <p class="page__placeholder">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment(NAV_ITEMS[0].segment()) view=DashboardPage/>
                    <Route path=StaticSegment(NAV_ITEMS[1].segment()) view=CampaignBuilderPage/>
                    <Route path=StaticSegment(NAV_ITEMS[2].segment()) view=CampaignAnalyticsPage/>
                    <Route path=StaticSegment(NAV_ITEMS[3].segment()) view=AgentChatPage/>
                    <Route path=StaticSegment(NAV_ITEMS[4].segment()) view=AbManagerPage/>
                    <Route path=StaticSegment(NAV_ITEMS[5].segment()) view=ResearchPapersPage/>
                    <Route path=StaticSegment("ViewResearchPaper") view=ViewResearchPaperPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
