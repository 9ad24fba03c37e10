use leptos::*;
use leptos_meta::*;
use usercenter_common::config::{PaginationConfig, UiConfig};
use usercenter_common::pagination::{total_pages_for, PageCursor};
use usercenter_common::profile::{ProfileUpdate, UserProfile};
use usercenter_common::questions::SecurityQuestionCatalog;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod components;
pub mod error;

pub use components::{
    BasicInfoFormSection, PaginationControl, PasswordFormSection, ProfileEditor,
    SecurityFormSection,
};

const DEMO_CONFIG: &str = r#"{ "pagination": { "per_page": 20, "window_size": 5 } }"#;

const DEMO_PROFILE: &str = r#"{
    "email": "somchai@example.com",
    "security_question_1": "What is your favourite colour?",
    "security_answer_1": "blue",
    "security_question_2": "Where did you grow up?",
    "security_answer_2": "chiang mai"
}"#;

const DEMO_TOTAL_USERS: usize = 200;

fn load_config() -> UiConfig {
    match UiConfig::from_json(DEMO_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            logging::error!("Invalid UI configuration, using defaults: {}", e);
            UiConfig::default()
        }
    }
}

fn load_profile() -> UserProfile {
    serde_json::from_str(DEMO_PROFILE).unwrap_or_else(|e| {
        logging::error!("Failed to parse profile: {}", e);
        UserProfile::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let (profile, set_profile) = create_signal(load_profile());
    let (questions, _) = create_signal(SecurityQuestionCatalog::fallback());

    // Stand-in for the account service: accept the update and re-seed the form
    let submit = move |update: ProfileUpdate| {
        logging::log!("Saving profile: {:?}", update);
        set_profile.update(|profile| {
            if let Some(email) = update.email {
                profile.email = email;
            }
            if update.security_question_1.is_some() {
                profile.security_question_1 = update.security_question_1;
                profile.security_answer_1 = update.security_answer_1;
            }
            if update.security_question_2.is_some() {
                profile.security_question_2 = update.security_question_2;
                profile.security_answer_2 = update.security_answer_2;
            }
        });
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/usercenter-ui.css"/>
        <Title text="Usercenter - Account Management"/>

        <main class="main-content">
            <UserDirectory total_users=DEMO_TOTAL_USERS config=config.pagination/>

            <section class="profile-page">
                <h1>"My profile"</h1>
                <ProfileEditor profile=profile security_questions=questions on_submit=submit/>
            </section>
        </main>
    }
}

/// Paged list of mock users driven by a [`PageCursor`]
#[component]
fn UserDirectory(total_users: usize, config: PaginationConfig) -> impl IntoView {
    let per_page = config.per_page;
    let cursor = create_rw_signal(PageCursor::new(total_pages_for(total_users, per_page)));

    let current_page = Signal::derive(move || cursor.with(PageCursor::current_page));
    let total_pages = Signal::derive(move || cursor.with(PageCursor::total_pages));
    let has_previous_page = Signal::derive(move || cursor.with(PageCursor::has_previous_page));
    let has_next_page = Signal::derive(move || cursor.with(PageCursor::has_next_page));

    let rows = move || {
        let state = cursor.with(|c| c.state(total_users, per_page));
        (state.start_item()..=state.end_item())
            .map(|n| view! { <li class="user-row">{format!("user{:03}", n)}</li> })
            .collect_view()
    };

    view! {
        <section class="user-directory">
            <div class="page-header">
                <h1>"Users"</h1>
            </div>
            <ul class="user-list">{rows}</ul>
            <PaginationControl
                current_page=current_page
                total_pages=total_pages
                total_items=total_users
                per_page=per_page
                has_previous_page=has_previous_page
                has_next_page=has_next_page
                window_size=config.window_size
                on_page_change=move |page: usize| {
                    if cursor.try_update(|c| c.go_to(page)).unwrap_or(false) {
                        logging::log!("Showing page {}", page);
                    }
                }
                on_previous_page=move |_: ()| cursor.update(|c| {
                    c.previous();
                })
                on_next_page=move |_: ()| cursor.update(|c| {
                    c.next();
                })
            />
        </section>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
