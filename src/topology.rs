//! Connectivity tables: which masses are joined, and by what kind of link.

use crate::config::BodyConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::link::SpringDamperLink;
use alloc::vec::Vec as AllocVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

/// Role of an edge in the body, which selects its link parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Between adjacent corners along a principal axis.
    Structural(Axis),
    /// Across a face, resisting shear.
    Diagonal(Plane),
}

/// An unordered pair of mass indices plus its role.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub kind: EdgeKind,
}

const fn structural(a: usize, b: usize, axis: Axis) -> Edge {
    Edge { a, b, kind: EdgeKind::Structural(axis) }
}

const fn diagonal(a: usize, b: usize, plane: Plane) -> Edge {
    Edge { a, b, kind: EdgeKind::Diagonal(plane) }
}

/// Number of corner masses in a cuboid.
pub const CUBOID_MASSES: usize = 8;

/// Cuboid edges in evaluation order. Corner `i` sits at
/// `(i & 1, (i >> 1) & 1, (i >> 2) & 1)` in unit-cube coordinates.
pub const CUBOID_EDGES: [Edge; 24] = [
    structural(0, 1, Axis::X),
    structural(2, 3, Axis::X),
    structural(4, 5, Axis::X),
    structural(6, 7, Axis::X),
    structural(0, 2, Axis::Y),
    structural(1, 3, Axis::Y),
    structural(4, 6, Axis::Y),
    structural(5, 7, Axis::Y),
    structural(0, 4, Axis::Z),
    structural(1, 5, Axis::Z),
    structural(2, 6, Axis::Z),
    structural(3, 7, Axis::Z),
    diagonal(0, 3, Plane::XY),
    diagonal(1, 2, Plane::XY),
    diagonal(4, 7, Plane::XY),
    diagonal(5, 6, Plane::XY),
    diagonal(0, 5, Plane::XZ),
    diagonal(1, 4, Plane::XZ),
    diagonal(2, 7, Plane::XZ),
    diagonal(3, 6, Plane::XZ),
    diagonal(0, 6, Plane::YZ),
    diagonal(2, 4, Plane::YZ),
    diagonal(1, 7, Plane::YZ),
    diagonal(3, 5, Plane::YZ),
];

/// A validated connectivity table over `mass_count` masses.
///
/// Edge order is the link evaluation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    mass_count: usize,
    edges: AllocVec<Edge>,
}

impl Topology {
    /// Check that every edge joins two distinct, in-range masses.
    pub fn new(mass_count: usize, edges: AllocVec<Edge>) -> Result<Self, PhysicsError> {
        for edge in &edges {
            for index in [edge.a, edge.b] {
                if index >= mass_count {
                    return Err(PhysicsError::MassOutOfBounds { index, count: mass_count });
                }
            }
            if edge.a == edge.b {
                return Err(PhysicsError::SelfLink { index: edge.a });
            }
        }
        Ok(Topology { mass_count, edges })
    }

    /// The 8-corner, 24-link cuboid.
    pub fn cuboid() -> Self {
        Topology {
            mass_count: CUBOID_MASSES,
            edges: CUBOID_EDGES.to_vec(),
        }
    }

    /// Masses with no links at all.
    pub fn unlinked(mass_count: usize) -> Self {
        Topology { mass_count, edges: AllocVec::new() }
    }

    pub fn mass_count(&self) -> usize { self.mass_count }
    pub fn edges(&self) -> &[Edge] { &self.edges }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Number of edges touching `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.edges.iter().filter(|e| e.a == index || e.b == index).count()
    }

    /// Same edges, evaluated back to front.
    pub fn reversed(&self) -> Self {
        Topology {
            mass_count: self.mass_count,
            edges: self.edges.iter().rev().copied().collect(),
        }
    }

    /// One link per edge, parameters picked by edge kind.
    pub fn build_links<F: Float>(
        &self,
        config: &BodyConfig<F>,
    ) -> Result<AllocVec<SpringDamperLink<F>>, PhysicsError> {
        self.edges
            .iter()
            .map(|edge| {
                let params = match edge.kind {
                    EdgeKind::Structural(_) => config.structural,
                    EdgeKind::Diagonal(_) => config.diagonal,
                };
                SpringDamperLink::new(edge.a, edge.b, params)
            })
            .collect()
    }
}
