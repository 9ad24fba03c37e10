//! Common types and logic shared by the usercenter UI crates
//!
//! Everything here is plain data and pure functions, so it builds and tests on
//! the host as well as on `wasm32`.

pub mod config;
pub mod error;
pub mod pagination;
pub mod profile;
pub mod questions;

pub use config::{PaginationConfig, UiConfig};
pub use error::{ConfigError, ParseFieldError};
pub use pagination::{clamp_page, compute_window, EdgeCue, PageCursor, PageItem, PageState, PageWindow};
pub use profile::{
    ErrorMap, FormSection, ProfileField, ProfileFormData, ProfileUpdate, RevealState, UserProfile,
};
pub use questions::{QuestionOption, SecurityQuestionCatalog};
