//! Finds the chunks that only a stronghold's portal room reaches into.

use crate::{Layout, SearchTraces};
use ender_base::{BoundingBox, ColumnPosition, ColumnRange};
use ender_structure::{FirstPositionEstimator, PieceGenerator};
use std::ops::Range;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Settings {
	/// Opposite corners of the area of interest within the portal room, in local piece
	/// coordinates `(x, z)`. The default covers the end portal frame.
	pub portal_corners: [(i32, i32); 2]
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			portal_corners: [(4, 9), (6, 11)]
		}
	}
}

pub struct LayoutEnumerator<G, E, T> {
	generator: G,
	estimator: E,
	traces: T,
	settings: Settings
}

impl<G, E, T> LayoutEnumerator<G, E, T> where G: PieceGenerator, E: FirstPositionEstimator, T: SearchTraces {
	pub fn new(generator: G, estimator: E, traces: T, settings: Settings) -> Self {
		LayoutEnumerator { generator, estimator, traces, settings }
	}

	/// Writes a layout for every chunk of the portal area that no other piece reaches into, for
	/// each seed in `seeds` in increasing order. Stops as soon as `out` is full, returning the
	/// number of layouts written.
	pub fn enumerate(&mut self, seeds: Range<u64>, out: &mut [Layout]) -> usize {
		self.enumerate_from(seeds, 0, out)
	}

	/// Like `enumerate`, but leaves out the first `skip` layouts of the first seed.
	pub(crate) fn enumerate_from(&mut self, seeds: Range<u64>, mut skip: usize, out: &mut [Layout]) -> usize {
		if out.is_empty() {
			return 0;
		}

		let mut count = 0;

		for structure_seed in seeds.clone() {
			let start = self.estimator.estimate(structure_seed);

			let structure = match self.generator.generate(structure_seed, start) {
				Some(structure) => structure,
				None => {
					self.traces.skipped_seed(structure_seed, start);
					skip = 0;
					continue;
				}
			};

			let portal_room = match structure.portal_room() {
				Some(portal_room) => portal_room,
				None => {
					self.traces.skipped_seed(structure_seed, start);
					skip = 0;
					continue;
				}
			};

			let corner = |(x, z): (i32, i32)| ColumnPosition::from_block(portal_room.world_x(x, z), portal_room.world_z(x, z));
			let area = ColumnRange::spanning(corner(self.settings.portal_corners[0]), corner(self.settings.portal_corners[1]));

			for column in area.iter() {
				if structure.obstructs(&BoundingBox::column(column)) {
					continue;
				}

				if skip > 0 {
					skip -= 1;
					continue;
				}

				out[count] = Layout::new(structure_seed, start, column);
				self.traces.layout(&out[count]);
				count += 1;

				if count == out.len() {
					self.traces.range_done(&seeds, count, true);
					return count;
				}
			}

			skip = 0;
		}

		self.traces.range_done(&seeds, count, false);
		count
	}
}
