//! Text rendering
//!
//! - [`font`] - glyph lookup and rasterization
//! - [`scroll`] - column-by-column scrolling iterator
//! - [`facade`] - string as a sequence of glyph images

pub mod facade;
pub mod font;
pub mod scroll;

pub use facade::{FacadeFrames, StringFacade};
pub use font::{glyph_for, rasterize_into, BuiltinFont};
pub use scroll::{kerning_limit, ScrollingText};
