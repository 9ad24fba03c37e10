//! Profile editor: owns the form state the profile sections render from

use leptos::*;
use usercenter_common::profile::{
    ErrorMap, FormSection, ProfileField, ProfileFormData, ProfileUpdate, UserProfile,
};
use usercenter_common::questions::SecurityQuestionCatalog;

use super::{BasicInfoFormSection, PasswordFormSection, SecurityFormSection};
use crate::error::FormAlert;

/// Questions a user picked earlier stay selectable even if the catalog dropped them
fn catalog_for(catalog: SecurityQuestionCatalog, profile: &UserProfile) -> SecurityQuestionCatalog {
    catalog.with_existing(&[
        profile.security_question_1.as_deref().unwrap_or_default(),
        profile.security_question_2.as_deref().unwrap_or_default(),
    ])
}

/// Parent of the profile form sections.
///
/// Holds the only mutable copy of the form and its error map and hands the
/// sections read-only signals plus `handle_input_change`. Saving shapes a
/// [`ProfileUpdate`] for `section` and passes it to `on_submit`; sending it is
/// up to the caller, which replies by supplying a fresh `profile` or
/// `server_errors`.
#[component]
pub fn ProfileEditor(
    /// Stored profile the form is seeded from
    #[prop(into)]
    profile: Signal<UserProfile>,
    #[prop(into)] security_questions: Signal<SecurityQuestionCatalog>,
    /// Sections to show and save
    #[prop(optional)]
    section: FormSection,
    /// Errors reported by the account service
    #[prop(optional, into)]
    server_errors: Option<Signal<ErrorMap>>,
    #[prop(optional, into)] on_submit: Option<Callback<ProfileUpdate>>,
) -> impl IntoView {
    let form = create_rw_signal(ProfileFormData::default());
    let errors = create_rw_signal(ErrorMap::new());

    // Re-seed whenever a new profile snapshot arrives
    create_effect(move |_| {
        form.set(profile.with(ProfileFormData::from_profile));
        errors.set(ErrorMap::new());
    });

    create_effect(move |_| {
        if let Some(server_errors) = server_errors {
            errors.set(server_errors.get());
        }
    });

    let questions = Signal::derive(move || {
        let catalog = security_questions.get();
        profile.with(|p| catalog_for(catalog, p))
    });

    let handle_input_change = Callback::new(move |(field, value): (ProfileField, String)| {
        form.update(|f| f.set(field, value));
        errors.update(|e| e.clear(field));
    });

    let save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let update = form.with(|f| ProfileUpdate::from_form(f, section));
        if update.is_empty() {
            logging::warn!("Profile save skipped: nothing to update");
            return;
        }

        match on_submit {
            Some(on_submit) => on_submit.call(update),
            None => logging::log!("Profile update ready: {:?}", update),
        }
    };

    let reset = move |_| {
        form.set(profile.with(ProfileFormData::from_profile));
        errors.set(ErrorMap::new());
    };

    let dismiss = Callback::new(move |_: ()| {
        errors.update(ErrorMap::clear_general);
    });

    view! {
        <form class="profile-editor" on:submit=save>
            <FormAlert errors=errors on_dismiss=dismiss/>

            {section.includes_basic().then(|| view! {
                <BasicInfoFormSection form=form errors=errors on_input=handle_input_change/>
            })}
            {section.includes_password().then(|| view! {
                <PasswordFormSection form=form errors=errors on_input=handle_input_change/>
            })}
            {section.includes_security().then(|| view! {
                <SecurityFormSection
                    form=form
                    errors=errors
                    security_questions=questions
                    on_input=handle_input_change
                />
            })}

            <div class="form-actions">
                <button type="button" class="btn-secondary" on:click=reset>"Reset"</button>
                <button type="submit" class="btn-primary">"Save"</button>
            </div>
        </form>
    }
}
