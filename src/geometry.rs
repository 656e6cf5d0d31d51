//! Boundary with the host's geometry: where start positions come from and
//! where per-frame positions go.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Receives mass positions in index order after each frame.
pub trait PositionSink<F: Float> {
    fn write_position(&mut self, index: usize, position: Vec3<F>);
}

/// Overwrites (or grows to) one entry per mass.
impl<F: Float> PositionSink<F> for AllocVec<Vec3<F>> {
    fn write_position(&mut self, index: usize, position: Vec3<F>) {
        if index < self.len() {
            self[index] = position;
        } else {
            self.resize(index, Vec3::zero());
            self.push(position);
        }
    }
}

/// Writes x, y, z into the first three slots of each vertex of an
/// interleaved vertex array, leaving the other attributes alone.
pub struct StridedSink<'a, F: Float> {
    data: &'a mut [F],
    stride: usize,
}

impl<'a, F: Float> StridedSink<'a, F> {
    /// `stride` is the number of floats per vertex and must be at least 3.
    pub fn new(data: &'a mut [F], stride: usize) -> Result<Self, PhysicsError> {
        if stride < 3 {
            return Err(PhysicsError::InvalidVertexLayout { len: data.len(), stride });
        }
        Ok(StridedSink { data, stride })
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.stride
    }
}

impl<F: Float> PositionSink<F> for StridedSink<'_, F> {
    fn write_position(&mut self, index: usize, position: Vec3<F>) {
        let vertices = self.vertex_count();
        let slot = index
            .checked_mul(self.stride)
            .and_then(|base| self.data.get_mut(base..base.checked_add(3)?));
        match slot {
            Some(slot) => {
                slot[0] = position.x;
                slot[1] = position.y;
                slot[2] = position.z;
            }
            None => {
                tracing::debug!(index, vertices, "vertex buffer too short, position dropped");
            }
        }
    }
}

/// Read one position per vertex from an interleaved vertex array.
pub fn positions_from_strided<F: Float>(
    data: &[F],
    stride: usize,
) -> Result<AllocVec<Vec3<F>>, PhysicsError> {
    if stride < 3 || data.len() % stride != 0 {
        return Err(PhysicsError::InvalidVertexLayout { len: data.len(), stride });
    }
    let positions: AllocVec<Vec3<F>> = data
        .chunks_exact(stride)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
        .collect();
    if positions.iter().any(|p| !p.is_finite()) {
        return Err(PhysicsError::NonFiniteInput);
    }
    Ok(positions)
}

/// The 8 corners of the axis-aligned box `[min, max]`, in cuboid topology
/// order: corner `i` takes `max` on x when bit 0 is set, on y for bit 1, on z
/// for bit 2.
pub fn cuboid_corners<F: Float>(min: Vec3<F>, max: Vec3<F>) -> [Vec3<F>; 8] {
    let mut corners = [Vec3::zero(); 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        *corner = Vec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        );
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn corners_follow_index_bits() {
        let c = cuboid_corners(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(c[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(c[2], Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(c[4], Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(c[7], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn strided_round_trip_keeps_other_attributes() {
        // position, normal, uv
        let mut data = vec![
            1.0f32, 2.0, 3.0, 0.0, 1.0, 0.0, 0.5, 0.5,
            4.0, 5.0, 6.0, 0.0, 1.0, 0.0, 0.25, 0.75,
        ];
        let positions = positions_from_strided(&data, 8).unwrap();
        assert_eq!(positions, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);

        let mut sink = StridedSink::new(&mut data, 8).unwrap();
        assert_eq!(sink.vertex_count(), 2);
        sink.write_position(1, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(&data[8..], &[-1.0, -2.0, -3.0, 0.0, 1.0, 0.0, 0.25, 0.75]);
        assert_eq!(&data[..3], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn write_past_the_buffer_leaves_it_untouched() {
        let mut data = [9.0f32; 8];
        let mut sink = StridedSink::new(&mut data, 8).unwrap();
        sink.write_position(1, Vec3::new(1.0, 2.0, 3.0));
        sink.write_position(usize::MAX, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(data, [9.0f32; 8]);
    }

    #[test]
    fn ragged_strided_input_rejected() {
        let data = [0.0f64; 10];
        assert!(positions_from_strided(&data, 8).is_err());
        assert!(positions_from_strided(&data, 2).is_err());
    }

    #[test]
    fn vec_sink_grows() {
        let mut out: AllocVec<Vec3<f64>> = AllocVec::new();
        out.write_position(0, Vec3::new(1.0, 1.0, 1.0));
        out.write_position(1, Vec3::new(2.0, 2.0, 2.0));
        out.write_position(0, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(out, vec![Vec3::new(3.0, 3.0, 3.0), Vec3::new(2.0, 2.0, 2.0)]);
    }
}
