//! Authorization gate for edit/delete controls.
//!
//! This only decides what the UI shows. It grants nothing: the backend
//! re-checks every mutating request.

use crate::identity::Identity;
use crate::models::UserId;

/// Display name allowed to modify every record.
pub const ADMIN_NAME: &str = "admin";

/// Whether the current user may see edit/delete controls on a record owned
/// by `owner`. Both sides are display names.
///
/// True iff both names are present and equal, or the current user is
/// [`ADMIN_NAME`]. Anonymous viewers never get controls.
pub fn can_modify(owner: Option<&str>, current: Option<&str>) -> bool {
    can_modify_as(owner, current, ADMIN_NAME)
}

/// [`can_modify`] with a configurable privileged name.
pub fn can_modify_as(owner: Option<&str>, current: Option<&str>, admin: &str) -> bool {
    match current {
        None => false,
        Some(current) if current == admin => true,
        Some(current) => owner == Some(current),
    }
}

impl Identity {
    /// Whether this identity may modify a record owned by `owner_id`.
    ///
    /// Compares stable user ids when the token carries one, so two users
    /// sharing a display name are told apart. Falls back to display names
    /// for tokens without an id claim.
    pub fn can_modify(&self, owner_id: &UserId, owner_name: Option<&str>, admin: &str) -> bool {
        let Some(current) = self.display_name.as_deref() else {
            return false;
        };
        if current == admin {
            return true;
        }
        match self.user_id.as_deref() {
            Some(id) => id == owner_id.as_str(),
            None => can_modify_as(owner_name, Some(current), admin),
        }
    }
}
