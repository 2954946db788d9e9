//! Labelled form inputs that show a validation message under the control

use leptos::prelude::*;

fn field_class(error: Signal<Option<String>>, base: &'static str) -> impl Fn() -> String {
    move || {
        if error.with(Option::is_some) {
            format!("{} {}--invalid", base, base)
        } else {
            base.to_string()
        }
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="form__error" role="alert">{message}</p> })
}

/// Text input bound to one form field
#[component]
pub fn TextField(
    /// Field name, used as the element id
    name: &'static str,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    /// Input type: "text" (default), "email", "number", "date", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional, into)]
    placeholder: String,
    /// Shows the required marker
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=name
                class=field_class(error, "form__input")
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <FieldError error=error />
        </div>
    }
}

/// Multi-line text bound to one form field
#[component]
pub fn TextAreaField(
    name: &'static str,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    required: bool,
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                id=name
                class=field_class(error, "form__textarea")
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <FieldError error=error />
        </div>
    }
}

/// Select bound to one form field
#[component]
pub fn SelectField(
    name: &'static str,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    /// Text of the empty first option
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                id=name
                class=field_class(error, "form__select")
                on:change=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            >
                <option value="" selected=move || value.with(String::is_empty)>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let is_selected = {
                            let val = val.clone();
                            move || value.with(|v| *v == val)
                        };
                        view! { <option value=val selected=is_selected>{label}</option> }
                    })
                    .collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}
