//! Scoped preview-URL handling.
//!
//! Local image previews live behind transient object URLs the host
//! creates from a file blob. The URL must be revoked when the preview is
//! replaced or goes away; [`PreviewSlot`] scopes that discipline so the
//! revocation cannot be forgotten.

use std::fmt;
use std::sync::Arc;

/// Host callback that revokes a transient object URL.
pub type Revoker = Arc<dyn Fn(&str) + Send + Sync>;

/// Owns at most one transient preview URL.
///
/// Replacing or clearing the preview revokes the previous URL through
/// the host's revoker exactly once; dropping the slot revokes whatever
/// is left. Clearing only forgets the local URL — it assumes nothing
/// about server-side deletion.
pub struct PreviewSlot {
    url: Option<String>,
    revoke: Revoker,
}

impl PreviewSlot {
    /// Create an empty slot with the host's revoker.
    pub fn new(revoke: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            url: None,
            revoke: Arc::new(revoke),
        }
    }

    /// The current preview URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Install a new preview URL, revoking the previous one.
    pub fn replace(&mut self, url: impl Into<String>) {
        self.clear();
        self.url = Some(url.into());
    }

    /// Forget the current preview, revoking its URL.
    pub fn clear(&mut self) {
        if let Some(previous) = self.url.take() {
            log::trace!("revoking preview url {previous}");
            (self.revoke)(&previous);
        }
    }
}

impl Drop for PreviewSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for PreviewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSlot").field("url", &self.url).finish()
    }
}
