use super::form_state::FormState;
use contracts::shared::validation::{FormModel, SubmitError};
use leptos::prelude::*;

/// Reactive handle over a [`FormState`], shared by form view models.
///
/// Produces the per-field signals and callbacks the field components take.
pub struct FormBinding<F: FormModel + Send + Sync + 'static> {
    pub state: RwSignal<FormState<F>>,
}

impl<F: FormModel + Send + Sync + 'static> Clone for FormBinding<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormModel + Send + Sync + 'static> Copy for FormBinding<F> {}

impl<F: FormModel + Send + Sync + 'static> FormBinding<F> {
    pub fn new(form: F) -> Self {
        Self {
            state: RwSignal::new(FormState::new(form)),
        }
    }

    pub fn value(&self, field: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.value(field)))
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible_error(field)))
    }

    pub fn on_input(&self, field: &'static str) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value: String| state.update(|s| s.set_field(field, value)))
    }

    pub fn on_blur(&self, field: &'static str) -> Callback<()> {
        let state = self.state;
        Callback::new(move |_| state.update(|s| s.touch(field)))
    }

    pub fn is_valid(&self) -> bool {
        self.state.with(|s| s.is_valid())
    }

    pub fn is_submittable(&self) -> bool {
        self.state.with(|s| s.is_submittable())
    }

    /// `None` once the owning component is gone
    pub fn begin_submit(&self) -> Option<Result<F::Output, SubmitError>> {
        self.state.try_update(|s| s.begin_submit())
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    /// Start over from `form`, clearing errors and touched fields
    pub fn replace(&self, form: F) {
        self.state.set(FormState::new(form));
    }
}
