//! Repository traits and data types.
//!
//! This module defines the storage abstractions used throughout lectern.
//! Implement these traits to use your own database or storage backend.
//!
//! # Traits
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`UserRepository`] | User account storage (the credential store) |
//! | [`TalkRepository`] | Talk record storage |
//!
//! # Data Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`User`] | User account data |
//! | [`Talk`] | A scheduled talk or demo |
//! | [`TalkDraft`] | User-supplied fields of a talk before persistence |
//!
//! # Mock Implementations
//!
//! Enable the `mocks` feature for in-memory implementations useful for testing:
//!
//! - [`MockUserRepository`]
//! - [`MockTalkRepository`]

mod talk;
mod user;

#[cfg(any(test, feature = "mocks"))]
mod talk_mock;
#[cfg(any(test, feature = "mocks"))]
mod user_mock;

pub use talk::Talk;
pub use talk::TalkDraft;
pub use talk::TalkKind;
pub use talk::TalkLevel;
pub use talk::TalkRepository;
pub use user::User;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use talk_mock::MockTalkRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_mock::MockUserRepository;
