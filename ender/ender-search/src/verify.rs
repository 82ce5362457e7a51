use ender_base::{ColumnPosition, Dimension, GeneratorFlags, Version};
use ender_biome::{StrongholdIter, TerrainGenerator};

/// Locates the first stronghold of a world generated by the newest version, with default
/// generator flags.
pub fn first_stronghold<G>(world_seed: u64) -> Option<ColumnPosition> where G: TerrainGenerator {
	let mut generator = G::setup(Version::newest(), GeneratorFlags::NONE);
	generator.apply_seed(Dimension::Overworld, world_seed);

	StrongholdIter::first(generator.version(), world_seed).next_column(&generator)
}

/// Returns true if the first stronghold of the world starts in the given chunk.
pub fn test_world_seed<G>(world_seed: u64, chunk_x: i32, chunk_z: i32) -> bool where G: TerrainGenerator {
	first_stronghold::<G>(world_seed) == Some(ColumnPosition::new(chunk_x, chunk_z))
}
