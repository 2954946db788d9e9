use crate::domain::a002_project::ui::new_modal::NewProjectModal;
use crate::shared::components::data_table_filters::DataTableFilters;
use crate::shared::config::AppConfig;
use crate::shared::format::{format_currency, format_date, format_percent};
use crate::shared::icons::icon;
use chrono::Local;
use contracts::domain::a002_project::aggregate::{Priority, Project, ProjectStatus};
use contracts::domain::a002_project::samples::sample_projects;
use contracts::domain::common::SelectOption;
use contracts::shared::list_query::{
    apply_filters, FilterGroup, FilterOption, ListCriteria, SortOption,
};
use leptos::prelude::*;

fn filter_groups(projects: &[Project]) -> Vec<FilterGroup> {
    vec![
        FilterGroup::new(
            "Status",
            "status",
            ProjectStatus::all()
                .iter()
                .map(|s| FilterOption::same(s.as_str()))
                .collect(),
        )
        .with_counts(projects.iter().map(|p| p.status.as_str())),
        FilterGroup::new(
            "Priority",
            "priority",
            Priority::all()
                .iter()
                .map(|p| FilterOption::same(p.as_str()))
                .collect(),
        )
        .with_counts(projects.iter().map(|p| p.priority.as_str())),
    ]
}

fn sort_options() -> Vec<SortOption> {
    vec![
        SortOption::new("Name", "name"),
        SortOption::new("Priority", "priority"),
        SortOption::new("Progress", "progress"),
        SortOption::new("Due Date", "due_date"),
        SortOption::new("Budget", "budget"),
    ]
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "badge badge--info",
        ProjectStatus::InProgress => "badge badge--primary",
        ProjectStatus::OnHold => "badge badge--warning",
        ProjectStatus::Completed => "badge badge--success",
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority priority--high",
        Priority::Medium => "priority priority--medium",
        Priority::Low => "priority priority--low",
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let overdue = project.is_overdue(Local::now().date_naive());
    let progress_style = format!("width: {}%", project.progress.min(100));
    let budget_line = format!(
        "{} of {} ({})",
        format_currency(project.spend),
        format_currency(project.budget),
        format_percent(project.budget_used())
    );
    let team = if project.members_count == 1 {
        "1 member".to_string()
    } else {
        format!("{} members", project.members_count)
    };

    view! {
        <div class="card project-card">
            <div class="card__header">
                <h3 class="card__title">{project.name}</h3>
                <span class=status_class(project.status)>{project.status.as_str()}</span>
            </div>
            <p class="card__description">{project.description}</p>
            <div class="progress">
                <div class="progress__label">
                    <span>"Progress"</span>
                    <span>{format!("{}%", project.progress)}</span>
                </div>
                <div class="progress__track">
                    <div class="progress__bar" style=progress_style></div>
                </div>
            </div>
            <div class="card__meta">
                <span class=priority_class(project.priority)>{project.priority.as_str()}</span>
                <span class="card__due" class=("card__due--overdue", overdue)>
                    {format!("Due {}", format_date(project.due_date))}
                </span>
            </div>
            <div class="card__footer">
                <span>{budget_line}</span>
                <span>{team}</span>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let projects = RwSignal::new(sample_projects());
    let criteria = RwSignal::new(ListCriteria::new());
    let (show_modal, set_show_modal) = signal(false);

    let visible = Memo::new(move |_| {
        projects.with(|all| criteria.with(|c| apply_filters(all, c)))
    });
    let groups = Signal::derive(move || projects.with(|all| filter_groups(all)));

    let on_created = Callback::new(move |project: Project| {
        projects.update(|list| list.insert(0, project));
        set_show_modal.set(false);
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Projects"</h1>
                    <p class="page__subtitle">"Track progress and budgets across your projects"</p>
                </div>
                <button class="button button--primary" on:click=move |_| set_show_modal.set(true)>
                    {icon("plus")}
                    "New Project"
                </button>
            </div>

            <div class="page__toolbar">
                <DataTableFilters
                    criteria=criteria
                    on_change=Callback::new(move |next| criteria.set(next))
                    filter_groups=groups
                    sort_options=sort_options()
                    search_placeholder="Search projects..."
                    debounce_ms=config.lists.search_debounce_ms
                />
            </div>

            <div class="page__content">
                <p class="page__summary">
                    {move || format!("Showing {} of {} projects", visible.with(Vec::len), projects.with(Vec::len))}
                </p>
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <div class="empty-state">"No projects match the current filters"</div> }
                >
                    <div class="card-grid">
                        <For
                            each=move || visible.get()
                            key=|p| p.id
                            children=move |project: Project| view! { <ProjectCard project=project /> }
                        />
                    </div>
                </Show>
            </div>

            <Show when=move || show_modal.get()>
                <NewProjectModal
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_created=on_created
                />
            </Show>
        </div>
    }
}
