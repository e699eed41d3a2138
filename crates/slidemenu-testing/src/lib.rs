//! Testing utilities and harness for the slide-out menu

pub mod assertions;
pub mod delegate;
pub mod frames;
pub mod window;

pub use assertions::*;
pub use delegate::RecordingDelegate;
pub use frames::*;
pub use window::TestWindow;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::delegate::RecordingDelegate;
    pub use crate::frames::*;
    pub use crate::window::TestWindow;
}
