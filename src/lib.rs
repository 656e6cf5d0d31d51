//! Spring-damper soft bodies with explicit Euler integration.
//!
//! `softcube` simulates a deformable cuboid as eight point masses joined by
//! spring-damper links, stepped with a fixed timestep and bounced off a
//! ground plane. Rendering and windowing stay with the host: it supplies
//! start positions and reads positions back after every frame.
//!
//! # Features
//!
//! - **Spring-damper links**: Hookean spring plus linear damper on relative velocity
//! - **Two integration pipelines**: order-independent two-phase (default) or the
//!   per-link sequential update
//! - **Cuboid topology**: 12 structural and 12 face-diagonal links
//! - **Ground collision**: inelastic reflection of vertical velocity
//! - **Observable**: Monitor steps, collisions and degenerate links via `StepObserver`
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use softcube::{cuboid_corners, BodyConfig, NoOpStepObserver, SimConfig, SoftBody, Vec3};
//!
//! let corners = cuboid_corners(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
//! let mut body = SoftBody::cuboid(&corners, &BodyConfig::new(), SimConfig::new()).unwrap();
//! body.run(100, &mut NoOpStepObserver);
//! assert!(body.mean_height() < 0.5);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod mass;
pub mod link;
pub mod topology;
pub mod collision;
pub mod solver;
pub mod softbody;
pub mod geometry;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use mass::PointMass;
pub use link::SpringDamperLink;
pub use topology::{Axis, Edge, EdgeKind, Plane, Topology, CUBOID_EDGES, CUBOID_MASSES};
pub use collision::GroundPlane;
pub use solver::SpringSolver;
pub use softbody::SoftBody;
pub use geometry::{cuboid_corners, positions_from_strided, PositionSink, StridedSink};
pub use config::{BodyConfig, GravityMode, Integration, LengthBounds, LinkParams, SimConfig};
pub use observer::{NoOpStepObserver, StepObserver, StepStats};
pub use error::PhysicsError;
