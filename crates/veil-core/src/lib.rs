//! Core engine for a scroll-reactive decorative particle field.
//!
//! A fixed-size cloud of particles rests on a procedurally generated
//! shape, morphs toward a new shape when the page scrolls into a named
//! section, and reacts to the pointer through a repulsion tube around the
//! pointer's view ray. The host loop drives everything through
//! [`engine::Engine::tick`]; nothing here touches a platform API, so the
//! same engine runs under a browser frame callback, a test harness, or a
//! headless driver.

pub mod camera;
pub mod config;
pub mod engine;
pub mod math;
pub mod morph;
pub mod particle;
pub mod shapes;
pub mod simulation;

pub use camera::{Camera, PointerRay};
pub use config::EngineConfig;
pub use engine::Engine;
pub use shapes::ShapeId;
