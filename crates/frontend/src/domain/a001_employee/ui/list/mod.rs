use crate::domain::a001_employee::ui::new_modal::NewEmployeeModal;
use crate::shared::components::data_table_filters::DataTableFilters;
use crate::shared::config::{AppConfig, ListView};
use crate::shared::format::{format_currency, format_date};
use crate::shared::icons::icon;
use contracts::domain::a001_employee::aggregate::{Department, Employee, EmployeeStatus};
use contracts::domain::a001_employee::samples::sample_employees;
use contracts::domain::common::SelectOption;
use contracts::shared::list_query::{
    apply_filters, FilterGroup, FilterOption, ListCriteria, SortOption,
};
use leptos::prelude::*;

fn filter_groups(employees: &[Employee]) -> Vec<FilterGroup> {
    vec![
        FilterGroup::new(
            "Department",
            "department",
            Department::all()
                .iter()
                .map(|d| FilterOption::new(d.label(), d.as_str()))
                .collect(),
        )
        .with_counts(employees.iter().map(|e| e.department.as_str())),
        FilterGroup::new(
            "Status",
            "status",
            EmployeeStatus::all()
                .iter()
                .map(|s| FilterOption::same(s.as_str()))
                .collect(),
        )
        .with_counts(employees.iter().map(|e| e.status.as_str())),
    ]
}

fn sort_options() -> Vec<SortOption> {
    vec![
        SortOption::new("Name", "name"),
        SortOption::new("Role", "role"),
        SortOption::new("Department", "department"),
        SortOption::new("Status", "status"),
        SortOption::new("Join Date", "join_date"),
        SortOption::new("Salary", "salary"),
    ]
}

fn status_class(status: EmployeeStatus) -> &'static str {
    match status {
        EmployeeStatus::Active => "badge badge--success",
        EmployeeStatus::OnLeave => "badge badge--warning",
        EmployeeStatus::Inactive => "badge badge--muted",
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let employees = RwSignal::new(sample_employees());
    let criteria = RwSignal::new(ListCriteria::new());
    let view_mode = RwSignal::new(config.lists.default_view);
    let (show_modal, set_show_modal) = signal(false);

    let visible = Memo::new(move |_| {
        employees.with(|all| criteria.with(|c| apply_filters(all, c)))
    });
    let groups = Signal::derive(move || employees.with(|all| filter_groups(all)));

    let on_created = Callback::new(move |employee: Employee| {
        employees.update(|list| list.insert(0, employee));
        set_show_modal.set(false);
    });

    let sort_header = move |label: &'static str, field: &'static str| {
        let indicator = move || {
            criteria.with(|c| match c.sort_field() {
                Some(current) if current == field => c.sort_direction().indicator(),
                _ => "",
            })
        };
        view! {
            <th class="table__sortable" on:click=move |_| criteria.update(|c| *c = c.clone().toggle_sort(field))>
                {label}
                " "
                {indicator}
            </th>
        }
    };

    let table_view = move || {
        view! {
            <table class="table">
                <thead>
                    <tr>
                        {sort_header("Employee", "name")}
                        {sort_header("Role", "role")}
                        {sort_header("Department", "department")}
                        {sort_header("Status", "status")}
                        {sort_header("Joined", "join_date")}
                        {sort_header("Salary", "salary")}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|e| e.id
                        children=move |e: Employee| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="person">
                                            <span class="avatar">{initials(&e.name)}</span>
                                            <div>
                                                <div class="person__name">{e.name.clone()}</div>
                                                <div class="person__email">{e.email.clone()}</div>
                                            </div>
                                        </div>
                                    </td>
                                    <td>{e.role.clone()}</td>
                                    <td>{e.department.label()}</td>
                                    <td><span class=status_class(e.status)>{e.status.as_str()}</span></td>
                                    <td>{format_date(e.join_date)}</td>
                                    <td>{format_currency(e.salary)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        }
    };

    let cards_view = move || {
        view! {
            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|e| e.id
                    children=move |e: Employee| {
                        view! {
                            <div class="card">
                                <div class="card__header">
                                    <span class="avatar">{initials(&e.name)}</span>
                                    <div>
                                        <div class="person__name">{e.name.clone()}</div>
                                        <div class="person__email">{e.role.clone()}</div>
                                    </div>
                                    <span class=status_class(e.status)>{e.status.as_str()}</span>
                                </div>
                                <div class="card__body">
                                    <div>{e.email.clone()}</div>
                                    <div>{e.phone.clone()}</div>
                                    <div>{e.department.label()}</div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Employees"</h1>
                    <p class="page__subtitle">"Manage your team members and their information"</p>
                </div>
                <button class="button button--primary" on:click=move |_| set_show_modal.set(true)>
                    {icon("plus")}
                    "Add Employee"
                </button>
            </div>

            <div class="page__toolbar">
                <DataTableFilters
                    criteria=criteria
                    on_change=Callback::new(move |next| criteria.set(next))
                    filter_groups=groups
                    sort_options=sort_options()
                    search_placeholder="Search employees..."
                    debounce_ms=config.lists.search_debounce_ms
                />
                <div class="view-toggle">
                    <button
                        class="button button--icon"
                        class=("button--active", move || view_mode.get() == ListView::Table)
                        title="Table view"
                        on:click=move |_| view_mode.set(ListView::Table)
                    >
                        {icon("table")}
                    </button>
                    <button
                        class="button button--icon"
                        class=("button--active", move || view_mode.get() == ListView::Cards)
                        title="Card view"
                        on:click=move |_| view_mode.set(ListView::Cards)
                    >
                        {icon("grid")}
                    </button>
                </div>
            </div>

            <div class="page__content">
                <p class="page__summary">
                    {move || format!("Showing {} of {} employees", visible.with(Vec::len), employees.with(Vec::len))}
                </p>
                {move || {
                    if visible.with(Vec::is_empty) {
                        view! { <div class="empty-state">"No employees match the current filters"</div> }.into_any()
                    } else {
                        match view_mode.get() {
                            ListView::Table => table_view().into_any(),
                            ListView::Cards => cards_view().into_any(),
                        }
                    }
                }}
            </div>

            <Show when=move || show_modal.get()>
                <NewEmployeeModal
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_created=on_created
                />
            </Show>
        </div>
    }
}
