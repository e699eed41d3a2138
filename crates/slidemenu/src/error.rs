use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlideMenuError>;

/// Precondition failures surfaced by [`crate::SlideMenu`] operations.
///
/// Out-of-range configuration is never an error; setters clamp instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlideMenuError {
    #[error("host has no active window")]
    NoWindow,

    #[error("content snapshot could not be captured")]
    SnapshotUnavailable,

    #[error("no slide menu is presented")]
    NoSession,

    #[error("slide menu is already presented")]
    AlreadyPresented,
}
