use crate::Layout;
use ender_base::ColumnPosition;
use log::{debug, info, trace};
use std::ops::Range;

/// Observes the progress of a layout search.
pub trait SearchTraces {
	fn layout(&self, layout: &Layout);
	/// No layout with a portal room could be generated for the seed.
	fn skipped_seed(&self, structure_seed: u64, start: ColumnPosition);
	/// Called once per enumeration, whether or not the range was scanned to the end.
	fn range_done(&self, seeds: &Range<u64>, layouts: usize, exhausted_buffer: bool);
}

pub struct LogTraces;

impl SearchTraces for LogTraces {
	fn layout(&self, layout: &Layout) {
		trace!(
			"Seed {} starting in {} has an unobstructed portal room in {}",
			layout.structure_seed,
			layout.start(),
			layout.portal()
		);
	}

	fn skipped_seed(&self, structure_seed: u64, start: ColumnPosition) {
		debug!("Seed {} starting in {} produced no portal room", structure_seed, start);
	}

	fn range_done(&self, seeds: &Range<u64>, layouts: usize, exhausted_buffer: bool) {
		if exhausted_buffer {
			info!("Buffer filled with {} layouts while scanning seeds {}..{}", layouts, seeds.start, seeds.end);
		} else {
			info!("Scanned seeds {}..{}: {} layouts", seeds.start, seeds.end, layouts);
		}
	}
}

pub struct IgnoreTraces;

impl SearchTraces for IgnoreTraces {
	fn layout(&self, _: &Layout) {}
	fn skipped_seed(&self, _: u64, _: ColumnPosition) {}
	fn range_done(&self, _: &Range<u64>, _: usize, _: bool) {}
}
