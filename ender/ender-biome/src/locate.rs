//! Locates the strongholds of a world, in the order they are placed on the rings.

use crate::{find_biome_horizontal, TerrainGenerator};
use ender_base::{BlockPosition, ColumnPosition, Version};
use ender_structure::{ConcentricRings, RingCursor};
use java_rand::Random;

/// Blocks searched around each ring position for a biome that can host a stronghold.
const BIOME_SEARCH_RADIUS: i32 = 112;

pub struct StrongholdIter {
	cursor: RingCursor,
	version: Version
}

impl StrongholdIter {
	/// Starts at the first stronghold of the world.
	pub fn first(version: Version, world_seed: u64) -> Self {
		StrongholdIter::with_rings(version, world_seed, ConcentricRings::default())
	}

	pub fn with_rings(version: Version, world_seed: u64, rings: ConcentricRings) -> Self {
		StrongholdIter {
			cursor: RingCursor::new(world_seed, rings),
			version
		}
	}

	pub fn remaining(&self) -> usize {
		self.cursor.remaining()
	}

	/// Finds the next stronghold, moving its ring position to a nearby biome that can host it.
	/// The generator must already be seeded with the same world seed.
	pub fn next<G>(&mut self, generator: &G) -> Option<BlockPosition> where G: TerrainGenerator {
		let fork = self.version.forks_ring_search();

		self.cursor.next_with(|ring, rng| {
			let center = ring.block(8, 0, 8);
			let hosts = |biome: &G::Biome| generator.hosts_stronghold(biome);

			let found = if fork {
				let mut forked = Random::new(rng.next_i64() as u64);

				find_biome_horizontal(generator, center.x(), center.y(), center.z(), BIOME_SEARCH_RADIUS, hosts, &mut forked)
			} else {
				find_biome_horizontal(generator, center.x(), center.y(), center.z(), BIOME_SEARCH_RADIUS, hosts, rng)
			};

			let column = found.map(|position| position.column()).unwrap_or(ring);

			column.block(4, 0, 4)
		})
	}

	/// Like `next`, but only returns the column of the stronghold.
	pub fn next_column<G>(&mut self, generator: &G) -> Option<ColumnPosition> where G: TerrainGenerator {
		self.next(generator).map(|position| position.column())
	}
}
