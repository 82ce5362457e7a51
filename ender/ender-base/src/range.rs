use crate::position::ColumnPosition;
use std::cmp::{max, min};

/// An inclusive rectangle of chunk columns.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct ColumnRange {
	min: ColumnPosition,
	max: ColumnPosition
}

impl ColumnRange {
	/// Creates the range spanned by two corner columns. The corners may be given in any order;
	/// each axis is sorted independently.
	pub fn spanning(a: ColumnPosition, b: ColumnPosition) -> Self {
		ColumnRange {
			min: ColumnPosition::new(min(a.x(), b.x()), min(a.z(), b.z())),
			max: ColumnPosition::new(max(a.x(), b.x()), max(a.z(), b.z()))
		}
	}

	pub fn min(&self) -> ColumnPosition {
		self.min
	}

	pub fn max(&self) -> ColumnPosition {
		self.max
	}

	pub fn width(&self) -> u32 {
		(self.max.x() - self.min.x()) as u32 + 1
	}

	pub fn depth(&self) -> u32 {
		(self.max.z() - self.min.z()) as u32 + 1
	}

	pub fn len(&self) -> u32 {
		self.width() * self.depth()
	}

	pub fn contains(&self, column: ColumnPosition) -> bool {
		column.x() >= self.min.x() && column.x() <= self.max.x() &&
		column.z() >= self.min.z() && column.z() <= self.max.z()
	}

	/// Visits every column in increasing X, and for each X in increasing Z.
	pub fn iter(&self) -> impl Iterator<Item=ColumnPosition> {
		let (min_z, max_z) = (self.min.z(), self.max.z());

		(self.min.x()..=self.max.x()).flat_map(move |x| (min_z..=max_z).map(move |z| ColumnPosition::new(x, z)))
	}
}
