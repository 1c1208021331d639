//! View transitions after a submission.

use std::sync::Arc;

/// Collaborator that moves the user's view to a new location.
///
/// The submission workflow calls [`Navigator::navigate`] exactly once per
/// successful submission, with the share path of the new build.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, location: &str) {
        (**self).navigate(location)
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, location: &str) {
        (**self).navigate(location)
    }
}
