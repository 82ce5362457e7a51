use crate::FirstPositionEstimator;
use ender_base::math::java_round;
use ender_base::ColumnPosition;
use java_rand::Random;
use std::f64::consts::PI;

/// Placement of structures spread over concentric rings around the origin, as used by
/// strongholds. Distances are measured in chunks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConcentricRings {
	pub distance: i32,
	/// Number of positions on the innermost ring.
	pub spread: i32,
	pub count: i32
}

impl Default for ConcentricRings {
	fn default() -> Self {
		ConcentricRings {
			distance: 32,
			spread: 3,
			count: 128
		}
	}
}

/// Walks the ring positions of a seed in order.
///
/// Each position is handed to a callback together with the ring random, since the biome search
/// that moves a position to a suitable biome draws from it before the next position is computed.
pub struct RingCursor {
	rng: Random,
	rings: ConcentricRings,
	angle: f64,
	ring: i32,
	ring_count: i32,
	spread: i32,
	index: i32
}

impl RingCursor {
	pub fn new(seed: u64, rings: ConcentricRings) -> Self {
		let mut rng = Random::new(seed);
		let angle = rng.next_f64() * PI * 2.0;

		RingCursor {
			rng,
			rings,
			angle,
			ring: 0,
			ring_count: 0,
			spread: rings.spread,
			index: 0
		}
	}

	pub fn remaining(&self) -> usize {
		(self.rings.count - self.index).max(0) as usize
	}

	/// Computes the next position and passes it to `place`, returning its result, or returns
	/// `None` once every position has been produced.
	pub fn next_with<F, R>(&mut self, place: F) -> Option<R> where F: FnOnce(ColumnPosition, &mut Random) -> R {
		if self.index >= self.rings.count {
			return None;
		}

		let distance = self.rings.distance as f64;
		let ring_distance = 4.0 * distance + distance * self.ring as f64 * 6.0
			+ (self.rng.next_f64() - 0.5) * distance * 2.5;

		let x = java_round(self.angle.cos() * ring_distance) as i32;
		let z = java_round(self.angle.sin() * ring_distance) as i32;

		let placed = place(ColumnPosition::new(x, z), &mut self.rng);

		self.angle += PI * 2.0 / self.spread as f64;
		self.ring_count += 1;

		if self.ring_count == self.spread {
			self.ring += 1;
			self.ring_count = 0;
			self.spread += 2 * self.spread / (self.ring + 1);
			self.spread = self.spread.min(self.rings.count - self.index);
			self.angle += self.rng.next_f64() * PI * 2.0;
		}

		self.index += 1;

		Some(placed)
	}
}

impl Iterator for RingCursor {
	type Item = ColumnPosition;

	/// Yields the unadjusted ring positions. Since no biome search draws from the random in
	/// between, only the first position is guaranteed to match the adjusted sequence.
	fn next(&mut self) -> Option<ColumnPosition> {
		self.next_with(|position, _| position)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining(), Some(self.remaining()))
	}
}

/// Estimates the first stronghold as the first ring position, before any biome adjustment.
/// The true start is at most a few chunks away.
#[derive(Debug, Copy, Clone, Default)]
pub struct RingEstimator {
	pub rings: ConcentricRings
}

impl FirstPositionEstimator for RingEstimator {
	fn estimate(&self, structure_seed: u64) -> ColumnPosition {
		let mut cursor = RingCursor::new(structure_seed, self.rings);

		cursor.next().unwrap_or_default()
	}
}
