//! # Collaborator Seams
//!
//! Traits for the surrounding (out-of-scope) layers: session storage,
//! sound cues and report export. The core calls these; the shell
//! implements them. Tests substitute trivial fakes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  UI shell                                                           │
//! │  ├── SessionStore   session-scoped current user (cleared on close)  │
//! │  ├── SoundPlayer    cue playback keyed by SoundCue                  │
//! │  └── SalesExporter  PDF/spreadsheet rendering of sale windows       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Sale, Settings, SoundCue, User};

/// Session-scoped storage for the logged-in user.
///
/// Backed by session storage in the original deployment so closing the
/// tab logs the operator out. Not the credential store; just "who is at
/// the register right now".
pub trait SessionStore {
    /// Remembers the current user for this session.
    fn store_current_user(&mut self, user: &User);

    /// The current user, if anyone is logged in.
    fn current_user(&self) -> Option<User>;

    /// Forgets the current user (logout / tab close).
    fn clear_current_user(&mut self);
}

/// Sound-cue trigger.
///
/// Implementations check the sound-effects setting themselves; callers
/// fire cues unconditionally.
pub trait SoundPlayer {
    fn play(&self, cue: SoundCue);
}

/// A `SoundPlayer` that does nothing; useful in tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue) {}
}

/// Report export hook.
///
/// Takes the already-filtered window of sales plus the settings (for the
/// currency symbol) and renders bytes in some document format. Formatting
/// concerns live entirely on the implementor's side.
pub trait SalesExporter {
    type Error;

    fn export(&self, sales: &[Sale], settings: &Settings) -> Result<Vec<u8>, Self::Error>;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[derive(Default)]
    struct MemorySession {
        user: Option<User>,
    }

    impl SessionStore for MemorySession {
        fn store_current_user(&mut self, user: &User) {
            self.user = Some(user.clone());
        }

        fn current_user(&self) -> Option<User> {
            self.user.clone()
        }

        fn clear_current_user(&mut self) {
            self.user = None;
        }
    }

    #[test]
    fn test_session_round_trip() {
        let mut session = MemorySession::default();
        assert!(session.current_user().is_none());

        session.store_current_user(&User {
            id: 1,
            username: "admin".to_string(),
            role: Role::Admin,
        });
        assert_eq!(session.current_user().unwrap().username, "admin");

        session.clear_current_user();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_silent_player_is_a_no_op() {
        SilentPlayer.play(SoundCue::SaleCompleted);
    }
}
