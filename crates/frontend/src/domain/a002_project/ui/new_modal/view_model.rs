use crate::shared::form_binding::FormBinding;
use crate::shared::submit::simulate_request;
use contracts::domain::a002_project::aggregate::Project;
use contracts::domain::a002_project::form::ProjectForm;
use contracts::shared::validation::SubmitError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct NewProjectViewModel {
    pub form: FormBinding<ProjectForm>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl NewProjectViewModel {
    pub fn new() -> Self {
        Self {
            form: FormBinding::new(ProjectForm::default()),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting.get() && self.form.is_submittable()
    }

    pub fn submit_command(&self, delay_ms: u32, on_created: Callback<Project>) {
        if self.submitting.get_untracked() {
            return;
        }

        match self.form.begin_submit() {
            Some(Ok(project)) => {
                log::info!("Submitting new project: {}", project.name);
                self.error.set(None);
                self.submitting.set(true);

                let form = self.form;
                let submitting = self.submitting;
                wasm_bindgen_futures::spawn_local(async move {
                    simulate_request(delay_ms).await;
                    log::info!("Project created: {} due {}", project.name, project.due_date);
                    submitting.set(false);
                    form.reset();
                    on_created.run(project);
                });
            }
            Some(Err(SubmitError::Invalid(errors))) => {
                log::debug!("Project form has errors: {}", errors);
            }
            Some(Err(e)) => {
                log::warn!("Project form rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
            None => {}
        }
    }
}

impl Default for NewProjectViewModel {
    fn default() -> Self {
        Self::new()
    }
}
