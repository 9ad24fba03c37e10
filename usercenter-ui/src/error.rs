//! Error display for the profile forms
//!
//! Messages are produced elsewhere and arrive through an [`ErrorMap`]; these
//! components only decide where and how they show up.

use leptos::*;
use usercenter_common::profile::{ErrorMap, ProfileField};

/// Inline message beneath a form field, present only while the field has one
#[component]
pub fn FieldError(
    field: ProfileField,
    #[prop(into)] errors: Signal<ErrorMap>,
) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| {
                view! {
                    <span class="field-error" id=format!("{}-error", field.as_str()) role="alert">
                        {message}
                    </span>
                }
            })
    }
}

/// Form-level alert for errors not tied to one field
#[component]
pub fn FormAlert(
    #[prop(into)] errors: Signal<ErrorMap>,
    /// Callback for dismiss button
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        errors
            .with(|e| e.general().map(str::to_string))
            .map(|message| {
                view! {
                    <div class="alert alert-error" role="alert">
                        <div class="alert-icon">"⚠️"</div>
                        <div class="alert-message">{message}</div>
                        {on_dismiss.map(|on_dismiss| view! {
                            <button
                                type="button"
                                class="btn-ghost btn-sm"
                                on:click=move |_| on_dismiss.call(())
                            >
                                "✕"
                            </button>
                        })}
                    </div>
                }
            })
    }
}

/// CSS class list for an input, flagged when its field has an error
pub fn input_class(base: &str, errors: &ErrorMap, field: ProfileField) -> String {
    if errors.has(field) {
        format!("{base} error")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_flags_error() {
        let errors = ErrorMap::new().with(ProfileField::Email, "Email is already in use");
        assert_eq!(input_class("form-input", &errors, ProfileField::Email), "form-input error");
        assert_eq!(input_class("form-input", &errors, ProfileField::NewPassword), "form-input");
    }

    #[test]
    fn test_input_class_ignores_cleared_message() {
        let errors = ErrorMap::new().with(ProfileField::Email, "");
        assert_eq!(input_class("form-select", &errors, ProfileField::Email), "form-select");
    }
}
