use leptos::*;
use usercenter_common::profile::{ErrorMap, ProfileField, ProfileFormData};

use crate::error::{input_class, FieldError};

/// E-mail section of the profile form
#[component]
pub fn BasicInfoFormSection(
    #[prop(into)] form: Signal<ProfileFormData>,
    #[prop(into)] errors: Signal<ErrorMap>,
    #[prop(into)] on_input: Callback<(ProfileField, String)>,
) -> impl IntoView {
    let field = ProfileField::Email;

    view! {
        <section class="form-section basic-section">
            <h4 class="section-title">
                <span class="section-icon">"✉️"</span>
                "Personal information"
            </h4>

            <div class="form-field">
                <label class="form-label" for=field.as_str()>"Email"</label>
                <input
                    id=field.as_str()
                    name=field.as_str()
                    type="email"
                    class=move || errors.with(|e| input_class("form-input", e, field))
                    aria-invalid=move || errors.with(|e| e.has(field)).to_string()
                    placeholder="Enter your email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                />
                <FieldError field=field errors=errors/>
            </div>
        </section>
    }
}
