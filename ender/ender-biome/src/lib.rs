extern crate ender_base;
extern crate ender_structure;
extern crate java_rand;

pub mod locate;
pub mod search;

pub use locate::StrongholdIter;
pub use search::find_biome_horizontal;

use ender_base::{Dimension, GeneratorFlags, Version};

/// Provides the biome at a position. Coordinates are in quarts, 4 blocks per quart on every axis.
pub trait BiomeSource {
	type Biome;

	fn noise_biome(&self, x: i32, y: i32, z: i32) -> Self::Biome;
}

/// A full world generator, at least as far as biome placement is concerned.
pub trait TerrainGenerator: BiomeSource {
	fn setup(version: Version, flags: GeneratorFlags) -> Self where Self: Sized;

	/// Reseeds the generator for a dimension. Must be called before sampling any biomes.
	fn apply_seed(&mut self, dimension: Dimension, seed: u64);

	fn version(&self) -> Version;

	/// Returns true if strongholds may be placed in the biome.
	fn hosts_stronghold(&self, biome: &Self::Biome) -> bool;
}
