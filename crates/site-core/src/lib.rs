pub mod catalog;
pub mod constants;
pub mod contact;
pub mod cues;
pub mod gallery;
pub mod mascot;
pub mod presence;
pub mod theme;

pub use catalog::*;
pub use constants::*;
pub use contact::*;
pub use cues::*;
pub use gallery::*;
pub use mascot::*;
pub use presence::*;
pub use theme::*;
