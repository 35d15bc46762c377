//! Admin/viewer capability derived from authentication state notifications.
//!
//! Admin capability starts at the first successful sign-in and lasts until the process ends.
//! The gate is only a client-side check; the store module repeats it server-side.

use std::sync::OnceLock;

use crate::error::WriteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Viewer,
    Admin,
}

/// Authentication state change as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    SignedIn { user: String },
    SignedOut,
}

/// Shared between the auth callback and the frame loop, hence interior mutability.
#[derive(Debug, Default)]
pub struct RoleGate {
    admin: OnceLock<String>,
}

impl RoleGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_auth_state_changed(&self, state: AuthState) {
        match state {
            AuthState::SignedIn { user } => {
                if self.admin.set(user.clone()).is_ok() {
                    log::info!("{user} signed in; admin capability granted for this session");
                } else {
                    log::debug!("{user} signed in again; admin capability already granted");
                }
            }
            AuthState::SignedOut => {
                if self.is_admin() {
                    log::debug!("sign-out ignored; admin capability is session-scoped");
                }
            }
        }
    }

    pub fn role(&self) -> Role {
        if self.is_admin() {
            Role::Admin
        } else {
            Role::Viewer
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin.get().is_some()
    }

    /// The user whose sign-in granted admin capability.
    pub fn admin_user(&self) -> Option<&str> {
        self.admin.get().map(String::as_str)
    }

    /// Checked before every store write.
    pub fn require_admin(&self) -> Result<(), WriteError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(WriteError::NotPermitted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_viewer() {
        let gate = RoleGate::new();
        assert_eq!(gate.role(), Role::Viewer);
        assert_eq!(gate.require_admin(), Err(WriteError::NotPermitted));
    }

    #[test]
    fn sign_in_grants_admin_for_the_session() {
        let gate = RoleGate::new();
        gate.on_auth_state_changed(AuthState::SignedIn {
            user: "curator@example.com".into(),
        });

        assert_eq!(gate.role(), Role::Admin);
        assert_eq!(gate.admin_user(), Some("curator@example.com"));
        assert_eq!(gate.require_admin(), Ok(()));

        gate.on_auth_state_changed(AuthState::SignedOut);
        assert_eq!(gate.role(), Role::Admin);
    }

    #[test]
    fn second_sign_in_keeps_first_user() {
        let gate = RoleGate::new();
        gate.on_auth_state_changed(AuthState::SignedIn { user: "a".into() });
        gate.on_auth_state_changed(AuthState::SignedIn { user: "b".into() });

        assert_eq!(gate.admin_user(), Some("a"));
    }
}
