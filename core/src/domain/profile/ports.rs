use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, value_objects::ProfileUpdate},
};

/// Session-scoped profile storage.
///
/// Implementations must serialize `update` per session: the read-merge-write
/// happens under a single writer.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    /// Returns the session's profile, or the default profile for a session
    /// that has stored nothing yet. Reading never starts a session.
    fn find(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update(
        &self,
        session_id: Uuid,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn get_profile(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        session_id: Uuid,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}
