use super::view_model::NewEmployeeViewModel;
use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_employee::aggregate::{Department, Employee};
use contracts::domain::common::SelectOption;
use leptos::prelude::*;

#[component]
pub fn NewEmployeeModal(on_close: Callback<()>, on_created: Callback<Employee>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let delay_ms = config.forms.submit_delay_ms;
    let vm = NewEmployeeViewModel::new();
    let form = vm.form;

    let departments: Vec<(String, String)> = Department::all()
        .iter()
        .map(|d| (d.as_str().to_string(), d.label().to_string()))
        .collect();

    let footer = move || {
        view! {
            <button class="button button--secondary" on:click=move |_| on_close.run(())>
                "Cancel"
            </button>
            <button
                class="button button--primary"
                disabled=move || !vm.can_submit()
                on:click=move |_| vm.submit_command(delay_ms, on_created)
            >
                {icon("plus")}
                {move || if vm.submitting.get() { "Adding..." } else { "Add Employee" }}
            </button>
        }
    };

    view! {
        <Modal
            title="Add New Employee"
            subtitle="Enter the details of the new team member"
            on_close=on_close
            footer=footer
        >
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form form--grid">
                <TextField
                    name="name"
                    label="Full Name"
                    placeholder="Jane Doe"
                    required=true
                    value=form.value("name")
                    error=form.error("name")
                    on_input=form.on_input("name")
                    on_blur=form.on_blur("name")
                />
                <TextField
                    name="email"
                    label="Email"
                    input_type="email"
                    placeholder="jane@company.com"
                    required=true
                    value=form.value("email")
                    error=form.error("email")
                    on_input=form.on_input("email")
                    on_blur=form.on_blur("email")
                />
                <TextField
                    name="phone"
                    label="Phone"
                    input_type="tel"
                    placeholder="+1 (555) 123-4567"
                    required=true
                    value=form.value("phone")
                    error=form.error("phone")
                    on_input=form.on_input("phone")
                    on_blur=form.on_blur("phone")
                />
                <TextField
                    name="role"
                    label="Role"
                    placeholder="Software Engineer"
                    required=true
                    value=form.value("role")
                    error=form.error("role")
                    on_input=form.on_input("role")
                    on_blur=form.on_blur("role")
                />
                <SelectField
                    name="department"
                    label="Department"
                    placeholder="Select department"
                    required=true
                    options=departments
                    value=form.value("department")
                    error=form.error("department")
                    on_input=form.on_input("department")
                    on_blur=form.on_blur("department")
                />
                <TextField
                    name="salary"
                    label="Annual Salary"
                    input_type="number"
                    placeholder="75000"
                    required=true
                    value=form.value("salary")
                    error=form.error("salary")
                    on_input=form.on_input("salary")
                    on_blur=form.on_blur("salary")
                />
            </div>
        </Modal>
    }
}
