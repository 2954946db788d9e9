pub mod sidebar;

use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_project::ui::list::ProjectList;
use crate::domain::a003_profile::ui::details::ProfileDetails;
use crate::domain::a004_company::ui::details::CompanyDetails;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Employees,
    Projects,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Employees, Page::Projects, Page::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Employees => "Employees",
            Page::Projects => "Projects",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Employees => "users",
            Page::Projects => "folder",
            Page::Settings => "settings",
        }
    }
}

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar active=page />
                <div class="app-main">
                    {move || match page.get() {
                        Page::Employees => view! { <EmployeeList /> }.into_any(),
                        Page::Projects => view! { <ProjectList /> }.into_any(),
                        Page::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page page--settings">
            <div class="page__header">
                <h1 class="page__title">"Settings"</h1>
                <p class="page__subtitle">"Manage your profile and company information"</p>
            </div>
            <div class="page__content settings-grid">
                <ProfileDetails />
                <CompanyDetails />
            </div>
        </div>
    }
}
