/// Game releases whose stronghold placement can be replayed.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash)]
pub enum Version {
	V1_16,
	V1_17,
	V1_18,
	/// 1.19 through 1.19.2
	V1_19,
	/// 1.19.3 through 1.20.6
	V1_20,
	V1_21
}

impl Version {
	pub fn newest() -> Self {
		Version::V1_21
	}

	/// The lowest Y coordinate that can hold blocks in the overworld.
	pub fn min_build_height(self) -> i32 {
		if self >= Version::V1_18 { -64 } else { 0 }
	}

	/// Whether the biome search around each ring position draws from a forked random instead of
	/// sharing the random that places the rings.
	pub fn forks_ring_search(self) -> bool {
		self >= Version::V1_20
	}
}

impl Default for Version {
	fn default() -> Self {
		Version::newest()
	}
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Dimension {
	Overworld,
	Nether,
	End
}

/// Optional generator behaviours. Strongholds are located with no flags set.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Default)]
pub struct GeneratorFlags(u32);

impl GeneratorFlags {
	pub const NONE: GeneratorFlags = GeneratorFlags(0);
	pub const LARGE_BIOMES: GeneratorFlags = GeneratorFlags(1);

	pub fn bits(self) -> u32 {
		self.0
	}

	pub fn contains(self, other: GeneratorFlags) -> bool {
		self.0 & other.0 == other.0
	}

	pub fn with(self, other: GeneratorFlags) -> GeneratorFlags {
		GeneratorFlags(self.0 | other.0)
	}
}
