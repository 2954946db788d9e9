use crate::shared::config::FormsConfig;
use crate::shared::form_binding::FormBinding;
use crate::shared::submit::{flash_message, simulate_request};
use contracts::domain::a004_company::aggregate::Company;
use contracts::domain::a004_company::form::CompanyForm;
use contracts::shared::validation::SubmitError;
use leptos::prelude::*;

/// ViewModel for the company settings card
#[derive(Clone, Copy)]
pub struct CompanyDetailsViewModel {
    pub form: FormBinding<CompanyForm>,
    pub saved: RwSignal<Company>,
    pub saving: RwSignal<bool>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl CompanyDetailsViewModel {
    pub fn new(company: Company) -> Self {
        Self {
            form: FormBinding::new(CompanyForm::from(&company)),
            saved: RwSignal::new(company),
            saving: RwSignal::new(false),
            message: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn can_save(&self) -> bool {
        !self.saving.get() && self.form.is_valid()
    }

    pub fn save_command(&self, config: FormsConfig) {
        if self.saving.get_untracked() {
            return;
        }

        match self.form.begin_submit() {
            Some(Ok(company)) => {
                log::info!("Saving company {}", company.name);
                self.error.set(None);
                self.saving.set(true);

                let vm = *self;
                wasm_bindgen_futures::spawn_local(async move {
                    simulate_request(config.submit_delay_ms).await;
                    log::info!("Company saved: {}", company.postal_address());
                    vm.form.replace(CompanyForm::from(&company));
                    vm.saved.set(company);
                    vm.saving.set(false);
                    flash_message(
                        vm.message,
                        "Company information updated successfully".to_string(),
                        config.success_message_ms,
                    );
                });
            }
            Some(Err(SubmitError::Invalid(errors))) => {
                log::debug!("Company form has errors: {}", errors);
            }
            Some(Err(e)) => {
                log::warn!("Company form rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
            None => {}
        }
    }

    pub fn cancel_command(&self) {
        let saved = self.saved.get_untracked();
        self.form.replace(CompanyForm::from(&saved));
        self.error.set(None);
    }
}
