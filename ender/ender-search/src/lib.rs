extern crate bytemuck;
extern crate ender_base;
extern crate ender_biome;
extern crate ender_structure;
extern crate log;

#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
extern crate rayon;

pub mod enumerate;
pub mod ffi;
pub mod layout;
pub mod scan;
pub mod traces;
pub mod verify;

pub use enumerate::{LayoutEnumerator, Settings};
pub use layout::Layout;
pub use scan::{Scan, SeedRange};
pub use traces::{IgnoreTraces, LogTraces, SearchTraces};
pub use verify::{first_stronghold, test_world_seed};

use ender_structure::{RingEstimator, StrongholdGenerator};

/// The enumerator used by `generate_layouts`: strongholds of the newest version, started at the
/// first ring position of each seed.
pub fn stronghold_enumerator() -> LayoutEnumerator<StrongholdGenerator, RingEstimator, LogTraces> {
	LayoutEnumerator::new(StrongholdGenerator::default(), RingEstimator::default(), LogTraces, Settings::default())
}

/// Writes the layouts of every structure seed in `seed_start..seed_end` to `out`, stopping early
/// once it is full. Returns the number of layouts written.
///
/// A return value equal to the length of `out` means that there may be more layouts. Scanning
/// can be continued with the seed of the last layout, but layouts for that seed will then be
/// repeated; use a `Scan` to avoid this.
pub fn generate_layouts(seed_start: u64, seed_end: u64, out: &mut [Layout]) -> u32 {
	let len = out.len().min(u32::max_value() as usize);

	stronghold_enumerator().enumerate(seed_start..seed_end, &mut out[..len]) as u32
}
