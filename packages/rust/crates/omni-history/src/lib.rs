//! omni-history: chat history helpers for the multi-turn chat client.
//!
//! Two pure operations run before a conversation is sent to a model:
//! - [`is_ignored_user_message`] flags user messages listed in the configured ignore list.
//! - [`normalize_history`] collapses every run of consecutive assistant turns into one turn.
//!
//! The ignore list is always injected, either as a slice or through an [`IgnoreListSource`]
//! such as [`HistorySettings`]. Python can use this via `PyO3` when feature "pybindings" is enabled.

mod error;
mod ignore;
mod normalize;
mod settings;
mod turn;

pub use error::{HistoryError, HistoryResult};
pub use ignore::{IgnoreListSource, is_ignored_user_message};
pub use normalize::{
    MERGE_SEPARATOR, has_consecutive_assistant_turns, normalize_history, pending_user_turn,
    strip_ignored_user_turns,
};
pub use settings::HistorySettings;
pub use turn::{ROLE_ASSISTANT, ROLE_USER, Turn};

#[cfg(feature = "pybindings")]
mod pymodule_impl;

#[cfg(feature = "pybindings")]
pub use pymodule_impl::{PyIgnoreFilter, normalize_history_py};
