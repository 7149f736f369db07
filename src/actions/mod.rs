//! One action per user-facing operation.
//!
//! Actions own their collaborators, run the authorization guard, dispatch
//! service events, and return domain results. They know nothing about
//! transports or redirects; that mapping lives in the orchestrator.

pub mod create_talk;
pub mod delete_talk;
pub mod list_talks;
pub mod login;
pub mod logout;
pub mod register;
pub mod toggle_select;
pub mod update_profile;
pub mod update_talk;

pub use create_talk::CreateTalkAction;
pub use delete_talk::DeleteTalkAction;
pub use list_talks::ListTalksAction;
pub use login::LoginAction;
pub use logout::LogoutAction;
pub use register::RegisterAction;
pub use toggle_select::ToggleSelectAction;
pub use update_profile::{ProfileUpdate, UpdateProfileAction};
pub use update_talk::UpdateTalkAction;
