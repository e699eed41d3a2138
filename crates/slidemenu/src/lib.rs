//! Gesture-driven slide-out side menu.
//!
//! The menu replaces the live content with a snapshot, shrinks and slides it
//! aside, and reveals a panel behind it. Opening is driven by a button
//! ([`SlideMenu::present`]) or an edge pan; closing by a tap, a pan on the
//! snapshot, or [`SlideMenu::dismiss`]. Every frame is a pure function of the
//! open-ness percentage (see [`geometry`]); release decisions live in
//! [`gesture`]. The host toolkit is reached only through [`SlideMenuHost`].

mod config;
mod delegate;
mod direction;
mod error;
pub mod geometry;
pub mod gesture;
mod host;
mod menu;
mod session;

pub use config::*;
pub use delegate::{EventCallback, MenuEvent, SlideMenuDelegate};
pub use direction::Direction;
pub use error::{Result, SlideMenuError};
pub use geometry::{GeometryState, MenuLayout};
pub use host::*;
pub use menu::{SlideMenu, SNAPSHOT_FADE_MILLIS};
pub use session::{CompletionCallback, SessionPhase};

pub use slidemenu_foundation::{GestureEvent, GesturePhase, ScreenEdge};

pub mod prelude {
    pub use crate::{
        Direction, GestureEvent, GesturePhase, SlideMenu, SlideMenuConfig, SlideMenuDelegate,
        SlideMenuError, SlideMenuHost,
    };
}
