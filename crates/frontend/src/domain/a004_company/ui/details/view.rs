use super::view_model::CompanyDetailsViewModel;
use crate::shared::components::form_field::TextField;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a004_company::aggregate::Company;
use leptos::prelude::*;

#[component]
pub fn CompanyDetails() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = CompanyDetailsViewModel::new(Company::demo());
    let form = vm.form;

    // (field, label, input type, required)
    let fields: [(&'static str, &'static str, &'static str, bool); 8] = [
        ("name", "Company Name", "text", true),
        ("industry", "Industry", "text", false),
        ("address", "Street Address", "text", false),
        ("city", "City", "text", false),
        ("state", "State", "text", false),
        ("zip", "ZIP Code", "text", false),
        ("country", "Country", "text", false),
        ("website", "Website", "url", false),
    ];

    view! {
        <div class="details-container company-details">
            <div class="details-header">
                <h3>"Company"</h3>
                <p>"Organization details shown on documents"</p>
            </div>

            {move || vm.message.get().map(|m| view! { <div class="alert alert--success">{icon("check")}{m}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form form--grid">
                {fields
                    .into_iter()
                    .map(|(name, label, input_type, required)| {
                        view! {
                            <TextField
                                name=name
                                label=label
                                input_type=input_type
                                required=required
                                value=form.value(name)
                                error=form.error(name)
                                on_input=form.on_input(name)
                                on_blur=form.on_blur(name)
                            />
                        }
                    })
                    .collect_view()}
            </div>

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
