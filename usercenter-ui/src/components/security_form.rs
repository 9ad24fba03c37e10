//! Security question section of the profile form

use leptos::*;
use usercenter_common::profile::{ErrorMap, ProfileField, ProfileFormData, RevealState};
use usercenter_common::questions::{QuestionOption, SecurityQuestionCatalog};

use super::secret_input::SecretInput;
use crate::error::{input_class, FieldError};

const ANSWER_PLACEHOLDER: &str = "Enter your answer (not case-sensitive)";

/// Question selector with a leading "Select a question" entry
#[component]
fn QuestionSelect(
    field: ProfileField,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<QuestionOption>>,
    #[prop(into)] form: Signal<ProfileFormData>,
    #[prop(into)] errors: Signal<ErrorMap>,
    #[prop(into)] on_input: Callback<(ProfileField, String)>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label" for=field.as_str()>{label}</label>
            <select
                id=field.as_str()
                name=field.as_str()
                class=move || errors.with(|e| input_class("form-select", e, field))
                aria-invalid=move || errors.with(|e| e.has(field)).to_string()
                on:change=move |ev| on_input.call((field, event_target_value(&ev)))
            >
                <option value="" prop:selected=move || !form.with(|f| f.is_set(field))>
                    "Select a question"
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let text = option.text.clone();
                            view! {
                                <option
                                    value=option.text.clone()
                                    disabled=option.disabled
                                    prop:selected=move || form.with(|f| f.get(field) == text)
                                >
                                    {option.text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError field=field errors=errors/>
        </div>
    }
}

/// Options of the second selector. Only a change of the first question (or of
/// the catalog) rebuilds them; typing in other fields does not.
pub(crate) fn second_question_options(
    form: Signal<ProfileFormData>,
    security_questions: Signal<SecurityQuestionCatalog>,
) -> Memo<Vec<QuestionOption>> {
    let first_choice = create_memo(move |_| form.with(|f| f.security_question_1.clone()));
    create_memo(move |_| {
        first_choice.with(|first| security_questions.with(|c| c.second_options(first)))
    })
}

/// Two question/answer pairs used for password recovery.
///
/// The second selector keeps the first question listed but disabled, and an
/// answer cannot be typed until its question is chosen.
#[component]
pub fn SecurityFormSection(
    #[prop(into)] form: Signal<ProfileFormData>,
    #[prop(into)] errors: Signal<ErrorMap>,
    #[prop(into)] security_questions: Signal<SecurityQuestionCatalog>,
    #[prop(into)] on_input: Callback<(ProfileField, String)>,
) -> impl IntoView {
    let reveal = create_rw_signal(RevealState::default());

    let first_options = Signal::derive(move || security_questions.with(|c| c.first_options()));
    let second_options = second_question_options(form, security_questions);

    let locked = move |answer: ProfileField| {
        Signal::derive(move || form.with(|f| f.is_answer_locked(answer)))
    };
    let empty = move |answer: ProfileField| Signal::derive(move || !form.with(|f| f.is_set(answer)));

    view! {
        <section class="form-section security-section">
            <h4 class="section-title">
                <span class="section-icon">"❓"</span>
                "Security questions"
            </h4>
            <p class="section-description">
                "Security questions are used to recover your password. Pick questions whose answers you will remember."
            </p>

            <QuestionSelect
                field=ProfileField::SecurityQuestion1
                label="Question 1"
                options=first_options
                form=form
                errors=errors
                on_input=on_input
            />
            <SecretInput
                field=ProfileField::SecurityAnswer1
                label="Answer 1"
                placeholder=ANSWER_PLACEHOLDER
                form=form
                errors=errors
                reveal=reveal
                on_input=on_input
                disabled=locked(ProfileField::SecurityAnswer1)
                toggle_disabled=empty(ProfileField::SecurityAnswer1)
            />

            <QuestionSelect
                field=ProfileField::SecurityQuestion2
                label="Question 2"
                options=second_options
                form=form
                errors=errors
                on_input=on_input
            />
            <SecretInput
                field=ProfileField::SecurityAnswer2
                label="Answer 2"
                placeholder=ANSWER_PLACEHOLDER
                form=form
                errors=errors
                reveal=reveal
                on_input=on_input
                disabled=locked(ProfileField::SecurityAnswer2)
                toggle_disabled=empty(ProfileField::SecurityAnswer2)
            />
        </section>
    }
}
