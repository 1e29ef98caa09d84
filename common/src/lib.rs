//! Party Board presentation model
//!
//! Engine-independent core of the board client's visuals: the character
//! customization resolver, the geometry parameter tables, the rig assembly
//! with its position reconciliation pass, the per-character animation state
//! machine, and the notification feed.
//!
//! Everything in this crate is plain data and pure arithmetic so the client
//! crate can drive a scene graph from it and tests can run without one.

pub mod animation;
pub mod geometry;
pub mod notifications;
pub mod rig;
pub mod traits;
