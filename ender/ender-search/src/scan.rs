use crate::{Layout, LayoutEnumerator, SearchTraces};
use ender_structure::{FirstPositionEstimator, PieceGenerator};
use std::ops::Range;

/// A half open range of structure seeds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SeedRange {
	pub start: u64,
	pub end: u64
}

impl SeedRange {
	pub fn new(start: u64, end: u64) -> Self {
		SeedRange { start, end }
	}

	pub fn len(&self) -> u64 {
		self.end.saturating_sub(self.start)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn range(&self) -> Range<u64> {
		self.start..self.end
	}

	/// Splits the range into `parts` disjoint ranges that cover it in order, for scanning on
	/// independent threads. The parts differ in length by at most one seed.
	pub fn split(self, parts: u64) -> impl Iterator<Item=SeedRange> {
		let len = self.len() as u128;
		let boundary = move |index: u64| self.start + (len * index as u128 / parts.max(1) as u128) as u64;

		(0..parts).map(move |index| SeedRange::new(boundary(index), boundary(index + 1)))
	}
}

impl From<Range<u64>> for SeedRange {
	fn from(range: Range<u64>) -> Self {
		SeedRange::new(range.start, range.end)
	}
}

/// Enumerates a seed range over multiple calls, each filling a fresh buffer.
///
/// When a buffer fills up, the scan resumes at the seed of the last layout written, skipping
/// the layouts of that seed that were already returned. The batches taken together are the
/// same as the result of a single enumeration with an unbounded buffer.
pub struct Scan<G, E, T> {
	enumerator: LayoutEnumerator<G, E, T>,
	seeds: SeedRange,
	/// Layouts of `seeds.start` already handed out.
	skip: usize
}

impl<G, E, T> Scan<G, E, T> where G: PieceGenerator, E: FirstPositionEstimator, T: SearchTraces {
	pub fn new<R>(enumerator: LayoutEnumerator<G, E, T>, seeds: R) -> Self where R: Into<SeedRange> {
		Scan { enumerator, seeds: seeds.into(), skip: 0 }
	}

	/// The seeds that have not been fully scanned yet.
	pub fn remaining(&self) -> SeedRange {
		self.seeds
	}

	pub fn is_done(&self) -> bool {
		self.seeds.is_empty()
	}

	/// Fills `out` with the next layouts, returning how many were written. Returns 0 once the
	/// scan is done, or if `out` is empty.
	pub fn next_batch(&mut self, out: &mut [Layout]) -> usize {
		if self.is_done() || out.is_empty() {
			return 0;
		}

		let count = self.enumerator.enumerate_from(self.seeds.range(), self.skip, out);

		if count < out.len() {
			self.seeds.start = self.seeds.end;
			self.skip = 0;

			return count;
		}

		let last = out[count - 1].structure_seed;
		let repeated = out[..count].iter().rev().take_while(|layout| layout.structure_seed == last).count();

		if last == self.seeds.start {
			self.skip += repeated;
		} else {
			self.seeds.start = last;
			self.skip = repeated;
		}

		count
	}
}
