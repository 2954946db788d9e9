use super::view_model::NewProjectViewModel;
use crate::shared::components::form_field::{SelectField, TextAreaField, TextField};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_project::aggregate::{Priority, Project};
use contracts::domain::common::SelectOption;
use leptos::prelude::*;

#[component]
pub fn NewProjectModal(on_close: Callback<()>, on_created: Callback<Project>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let delay_ms = config.forms.submit_delay_ms;
    let vm = NewProjectViewModel::new();
    let form = vm.form;

    let priorities: Vec<(String, String)> = Priority::all()
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
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
                {move || if vm.submitting.get() { "Creating..." } else { "Create Project" }}
            </button>
        }
    };

    view! {
        <Modal
            title="Create New Project"
            subtitle="Set up a new project for your team"
            on_close=on_close
            footer=footer
        >
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form">
                <TextField
                    name="name"
                    label="Project Name"
                    placeholder="Website Redesign"
                    required=true
                    value=form.value("name")
                    error=form.error("name")
                    on_input=form.on_input("name")
                    on_blur=form.on_blur("name")
                />
                <TextAreaField
                    name="description"
                    label="Description"
                    placeholder="What is this project about?"
                    required=true
                    value=form.value("description")
                    error=form.error("description")
                    on_input=form.on_input("description")
                    on_blur=form.on_blur("description")
                />
                <div class="form--grid">
                    <SelectField
                        name="priority"
                        label="Priority"
                        placeholder="Select priority"
                        required=true
                        options=priorities
                        value=form.value("priority")
                        error=form.error("priority")
                        on_input=form.on_input("priority")
                        on_blur=form.on_blur("priority")
                    />
                    <TextField
                        name="budget"
                        label="Budget"
                        input_type="number"
                        placeholder="50000"
                        required=true
                        value=form.value("budget")
                        error=form.error("budget")
                        on_input=form.on_input("budget")
                        on_blur=form.on_blur("budget")
                    />
                    <TextField
                        name="due_date"
                        label="Due Date"
                        input_type="date"
                        required=true
                        value=form.value("due_date")
                        error=form.error("due_date")
                        on_input=form.on_input("due_date")
                        on_blur=form.on_blur("due_date")
                    />
                </div>
            </div>
        </Modal>
    }
}
