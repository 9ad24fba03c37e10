use leptos::*;
use usercenter_common::profile::{ErrorMap, ProfileField, ProfileFormData, RevealState};

use crate::error::{input_class, FieldError};

pub(crate) fn reveal_icon(revealed: bool) -> &'static str {
    if revealed {
        "🙈"
    } else {
        "👁"
    }
}

pub(crate) fn reveal_title(revealed: bool) -> &'static str {
    if revealed {
        "Hide"
    } else {
        "Show"
    }
}

/// Masked input with its own show/hide button
#[component]
pub fn SecretInput(
    field: ProfileField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] form: Signal<ProfileFormData>,
    #[prop(into)] errors: Signal<ErrorMap>,
    /// Show/hide state shared by the section, keyed by field
    reveal: RwSignal<RevealState>,
    #[prop(into)] on_input: Callback<(ProfileField, String)>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, optional)] toggle_disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let has_error = move || errors.with(|e| e.has(field));
    let revealed = move || reveal.with(|r| r.is_revealed(field));

    view! {
        <div class="form-field">
            <label class="form-label" for=field.as_str()>{label}</label>
            <div class="input-container">
                <input
                    id=field.as_str()
                    name=field.as_str()
                    class=move || errors.with(|e| input_class("form-input secret-input", e, field))
                    aria-invalid=move || has_error().to_string()
                    type=move || reveal.with(|r| r.input_type(field))
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || form.with(|f| f.get(field).to_string())
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                />
                <button
                    type="button"
                    class="reveal-toggle"
                    aria-pressed=move || revealed().to_string()
                    title=move || reveal_title(revealed())
                    prop:disabled=move || toggle_disabled.get()
                    on:click=move |_| reveal.update(|r| r.toggle(field))
                >
                    {move || reveal_icon(revealed())}
                </button>
            </div>
            <FieldError field=field errors=errors/>
        </div>
    }
}
