use crate::shared::form_binding::FormBinding;
use crate::shared::submit::simulate_request;
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a001_employee::form::EmployeeForm;
use contracts::shared::validation::SubmitError;
use leptos::prelude::*;

/// ViewModel for the new employee dialog
#[derive(Clone, Copy)]
pub struct NewEmployeeViewModel {
    pub form: FormBinding<EmployeeForm>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl NewEmployeeViewModel {
    pub fn new() -> Self {
        Self {
            form: FormBinding::new(EmployeeForm::default()),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting.get() && self.form.is_submittable()
    }

    /// Validate, then hand the new employee to `on_created` after the
    /// simulated request
    pub fn submit_command(&self, delay_ms: u32, on_created: Callback<Employee>) {
        if self.submitting.get_untracked() {
            return;
        }

        match self.form.begin_submit() {
            Some(Ok(employee)) => {
                log::info!("Submitting new employee: {}", employee.name);
                self.error.set(None);
                self.submitting.set(true);

                let form = self.form;
                let submitting = self.submitting;
                wasm_bindgen_futures::spawn_local(async move {
                    simulate_request(delay_ms).await;
                    log::info!("Employee created: {} ({})", employee.name, employee.email);
                    submitting.set(false);
                    form.reset();
                    on_created.run(employee);
                });
            }
            Some(Err(SubmitError::Invalid(errors))) => {
                log::debug!("Employee form has errors: {}", errors);
            }
            Some(Err(e)) => {
                log::warn!("Employee form rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
            None => {}
        }
    }
}

impl Default for NewEmployeeViewModel {
    fn default() -> Self {
        Self::new()
    }
}
