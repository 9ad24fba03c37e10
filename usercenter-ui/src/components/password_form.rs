use leptos::*;
use usercenter_common::profile::{ErrorMap, ProfileField, ProfileFormData, RevealState};

use super::secret_input::SecretInput;

/// Current / new / confirm password inputs, each with its own show/hide button
#[component]
pub fn PasswordFormSection(
    #[prop(into)] form: Signal<ProfileFormData>,
    #[prop(into)] errors: Signal<ErrorMap>,
    #[prop(into)] on_input: Callback<(ProfileField, String)>,
) -> impl IntoView {
    let reveal = create_rw_signal(RevealState::default());

    view! {
        <section class="form-section password-section">
            <h4 class="section-title">
                <span class="section-icon">"🔒"</span>
                "Change password (optional)"
            </h4>

            <SecretInput
                field=ProfileField::CurrentPassword
                label="Current password"
                placeholder="Enter your current password"
                form=form
                errors=errors
                reveal=reveal
                on_input=on_input
            />
            <SecretInput
                field=ProfileField::NewPassword
                label="New password"
                placeholder="Enter a new password"
                form=form
                errors=errors
                reveal=reveal
                on_input=on_input
            />
            <SecretInput
                field=ProfileField::ConfirmPassword
                label="Confirm new password"
                placeholder="Re-enter the new password"
                form=form
                errors=errors
                reveal=reveal
                on_input=on_input
            />
        </section>
    }
}
