//! Account page components
//!
//! The pagination control used by the user directory and the profile form
//! sections, plus the editor that owns the profile form state.

pub mod basic_info;
pub mod pagination;
pub mod password_form;
pub mod profile_editor;
pub mod secret_input;
pub mod security_form;

// Re-export components for easy access
pub use basic_info::BasicInfoFormSection;
pub use pagination::PaginationControl;
pub use password_form::PasswordFormSection;
pub use profile_editor::ProfileEditor;
pub use secret_input::SecretInput;
pub use security_form::SecurityFormSection;
