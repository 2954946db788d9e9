use crate::shared::config::FormsConfig;
use crate::shared::form_binding::FormBinding;
use crate::shared::submit::{flash_message, simulate_request};
use contracts::domain::a003_profile::aggregate::Profile;
use contracts::domain::a003_profile::form::ProfileForm;
use contracts::shared::validation::SubmitError;
use leptos::prelude::*;

/// ViewModel for the profile settings card
#[derive(Clone, Copy)]
pub struct ProfileDetailsViewModel {
    pub form: FormBinding<ProfileForm>,
    /// Last saved profile; cancel returns the form to it
    pub saved: RwSignal<Profile>,
    pub saving: RwSignal<bool>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl ProfileDetailsViewModel {
    pub fn new(profile: Profile) -> Self {
        Self {
            form: FormBinding::new(ProfileForm::from(&profile)),
            saved: RwSignal::new(profile),
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
            Some(Ok(profile)) => {
                log::info!("Saving profile for {}", profile.email);
                self.error.set(None);
                self.saving.set(true);

                let vm = *self;
                wasm_bindgen_futures::spawn_local(async move {
                    simulate_request(config.submit_delay_ms).await;
                    vm.form.replace(ProfileForm::from(&profile));
                    vm.saved.set(profile);
                    vm.saving.set(false);
                    log::info!("Profile saved");
                    flash_message(
                        vm.message,
                        "Profile updated successfully".to_string(),
                        config.success_message_ms,
                    );
                });
            }
            Some(Err(SubmitError::Invalid(errors))) => {
                log::debug!("Profile form has errors: {}", errors);
            }
            Some(Err(e)) => {
                log::warn!("Profile form rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
            None => {}
        }
    }

    /// Discard edits
    pub fn cancel_command(&self) {
        let saved = self.saved.get_untracked();
        self.form.replace(ProfileForm::from(&saved));
        self.error.set(None);
    }
}
