//! # ttyvid-tools
//!
//! Standalone utilities that support ttyvid:
//!
//! - [`theme`] and [`migrate`]: convert legacy line-oriented `.theme` files to YAML
//! - [`transparency`]: make near-black pixels of an animated GIF transparent
//! - [`blobs`]: the metaball field behind the `liquid-blobs` terminal demo
//!
//! Each binary in `src/bin` drives one of these; they share nothing beyond [`config`],
//! [`logging`] and [`error`].

pub mod blobs;
pub mod config;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod theme;
pub mod transparency;
