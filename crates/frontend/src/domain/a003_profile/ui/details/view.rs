use super::view_model::ProfileDetailsViewModel;
use crate::shared::components::form_field::{TextAreaField, TextField};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a003_profile::aggregate::Profile;
use leptos::prelude::*;

#[component]
pub fn ProfileDetails() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = ProfileDetailsViewModel::new(Profile::demo());
    let form = vm.form;

    view! {
        <div class="details-container profile-details">
            <div class="details-header">
                <h3>"Profile"</h3>
                <p>"Your personal information"</p>
            </div>

            {move || vm.message.get().map(|m| view! { <div class="alert alert--success">{icon("check")}{m}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form form--grid">
                <TextField
                    name="name"
                    label="Full Name"
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
                    required=true
                    value=form.value("email")
                    error=form.error("email")
                    on_input=form.on_input("email")
                    on_blur=form.on_blur("email")
                />
                <TextField
                    name="title"
                    label="Job Title"
                    value=form.value("title")
                    error=form.error("title")
                    on_input=form.on_input("title")
                    on_blur=form.on_blur("title")
                />
                <TextField
                    name="department"
                    label="Department"
                    value=form.value("department")
                    error=form.error("department")
                    on_input=form.on_input("department")
                    on_blur=form.on_blur("department")
                />
                <TextField
                    name="phone"
                    label="Phone"
                    input_type="tel"
                    value=form.value("phone")
                    error=form.error("phone")
                    on_input=form.on_input("phone")
                    on_blur=form.on_blur("phone")
                />
            </div>
            <TextAreaField
                name="bio"
                label="Bio"
                placeholder="Tell us a little about yourself"
                rows=4
                value=form.value("bio")
                error=form.error("bio")
                on_input=form.on_input("bio")
                on_blur=form.on_blur("bio")
            />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || !vm.can_save()
                    on:click=move |_| vm.save_command(config.forms.clone())
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
                <button class="button button--secondary" on:click=move |_| vm.cancel_command()>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
