use crate::direction::Direction;
use crate::position::ColumnPosition;
use std::cmp::{max, min};

/// An axis aligned box of blocks. Both the minimum and maximum corners are part of the box.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct BoundingBox {
	pub min_x: i32,
	pub min_y: i32,
	pub min_z: i32,
	pub max_x: i32,
	pub max_y: i32,
	pub max_z: i32
}

impl BoundingBox {
	pub fn new(min_x: i32, min_y: i32, min_z: i32, max_x: i32, max_y: i32, max_z: i32) -> Self {
		BoundingBox { min_x, min_y, min_z, max_x, max_y, max_z }
	}

	/// The full height box of a chunk column. The vertical extent is unbounded, so this box
	/// intersects anything whose horizontal footprint overlaps the column.
	pub fn column(column: ColumnPosition) -> Self {
		let (x, z) = (column.block_x(), column.block_z());

		BoundingBox::new(x, i32::MIN, z, x + 15, i32::MAX, z + 15)
	}

	/// Places a box of the given size relative to an entrance at `(x, y, z)`, such that the
	/// box extends away from the entrance in `direction`. The offset is in the local space
	/// of the box: `offset.0` runs along the width, `offset.2` along the depth.
	pub fn oriented(x: i32, y: i32, z: i32, offset: (i32, i32, i32), size: (i32, i32, i32), direction: Direction) -> Self {
		let (offset_x, offset_y, offset_z) = offset;
		let (width, height, depth) = size;

		match direction {
			Direction::North => BoundingBox::new(
				x + offset_x,
				y + offset_y,
				z - depth + 1 + offset_z,
				x + width - 1 + offset_x,
				y + height - 1 + offset_y,
				z + offset_z
			),
			Direction::South => BoundingBox::new(
				x + offset_x,
				y + offset_y,
				z + offset_z,
				x + width - 1 + offset_x,
				y + height - 1 + offset_y,
				z + depth - 1 + offset_z
			),
			Direction::West => BoundingBox::new(
				x - depth + 1 + offset_z,
				y + offset_y,
				z + offset_x,
				x + offset_z,
				y + height - 1 + offset_y,
				z + width - 1 + offset_x
			),
			Direction::East => BoundingBox::new(
				x + offset_z,
				y + offset_y,
				z + offset_x,
				x + depth - 1 + offset_z,
				y + height - 1 + offset_y,
				z + width - 1 + offset_x
			)
		}
	}

	/// Returns true if the boxes share at least one block. Boxes that only touch at a face,
	/// edge or corner still count as intersecting since the bounds are inclusive.
	pub fn intersects(&self, other: &BoundingBox) -> bool {
		self.max_x >= other.min_x && self.min_x <= other.max_x &&
		self.max_y >= other.min_y && self.min_y <= other.max_y &&
		self.max_z >= other.min_z && self.min_z <= other.max_z
	}

	pub fn encompass(&self, other: &BoundingBox) -> BoundingBox {
		BoundingBox::new(
			min(self.min_x, other.min_x),
			min(self.min_y, other.min_y),
			min(self.min_z, other.min_z),
			max(self.max_x, other.max_x),
			max(self.max_y, other.max_y),
			max(self.max_z, other.max_z)
		)
	}

	pub fn translate(&mut self, x: i32, y: i32, z: i32) {
		self.min_x += x;
		self.min_y += y;
		self.min_z += z;
		self.max_x += x;
		self.max_y += y;
		self.max_z += z;
	}

	pub fn x_span(&self) -> i32 {
		self.max_x - self.min_x + 1
	}

	pub fn y_span(&self) -> i32 {
		self.max_y - self.min_y + 1
	}

	pub fn z_span(&self) -> i32 {
		self.max_z - self.min_z + 1
	}
}

#[cfg(test)]
mod test {
	use crate::bounding_box::BoundingBox;
	use crate::direction::Direction;
	use crate::position::ColumnPosition;

	#[test]
	fn test_intersects() {
		let a = BoundingBox::new(0, 0, 0, 4, 4, 4);

		assert!(a.intersects(&BoundingBox::new(2, 2, 2, 8, 8, 8)));
		assert!(a.intersects(&a));

		// Touching faces share blocks.
		assert!(a.intersects(&BoundingBox::new(4, 0, 0, 9, 4, 4)));
		assert!(!a.intersects(&BoundingBox::new(5, 0, 0, 9, 4, 4)));

		// Overlap on two axes is not enough.
		assert!(!a.intersects(&BoundingBox::new(0, 0, 5, 4, 4, 9)));
		assert!(!a.intersects(&BoundingBox::new(0, -9, 0, 4, -1, 4)));
	}

	#[test]
	fn test_column() {
		let column = BoundingBox::column(ColumnPosition::new(-2, 3));

		assert_eq!(column, BoundingBox::new(-32, i32::MIN, 48, -17, i32::MAX, 63));

		assert!(column.intersects(&BoundingBox::new(-17, 100000, 63, -10, 100001, 70)));
		assert!(column.intersects(&BoundingBox::new(-40, -100000, 40, -32, -99999, 48)));
		assert!(!column.intersects(&BoundingBox::new(-16, 0, 48, 0, 10, 63)));
		assert!(!column.intersects(&BoundingBox::new(-32, 0, 64, -17, 10, 70)));
	}

	#[test]
	fn test_oriented_spans() {
		for &direction in Direction::HORIZONTAL.iter() {
			let oriented = BoundingBox::oriented(100, 40, -100, (-4, -1, 0), (11, 8, 16), direction);

			assert_eq!(oriented.y_span(), 8);
			assert_eq!(oriented.min_y, 39);

			match direction {
				Direction::North | Direction::South => {
					assert_eq!(oriented.x_span(), 11);
					assert_eq!(oriented.z_span(), 16);
				},
				Direction::East | Direction::West => {
					assert_eq!(oriented.x_span(), 16);
					assert_eq!(oriented.z_span(), 11);
				}
			}
		}
	}

	#[test]
	fn test_oriented_extends_away_from_entrance() {
		let offset = (-1, -1, 0);
		let size = (5, 5, 7);

		assert_eq!(BoundingBox::oriented(0, 20, 0, offset, size, Direction::North), BoundingBox::new(-1, 19, -6, 3, 23, 0));
		assert_eq!(BoundingBox::oriented(0, 20, 0, offset, size, Direction::South), BoundingBox::new(-1, 19, 0, 3, 23, 6));
		assert_eq!(BoundingBox::oriented(0, 20, 0, offset, size, Direction::West), BoundingBox::new(-6, 19, -1, 0, 23, 3));
		assert_eq!(BoundingBox::oriented(0, 20, 0, offset, size, Direction::East), BoundingBox::new(0, 19, -1, 6, 23, 3));
	}

	#[test]
	fn test_encompass_translate() {
		let mut combined = BoundingBox::new(0, 10, 0, 4, 14, 4).encompass(&BoundingBox::new(-3, 12, 2, 1, 20, 9));

		assert_eq!(combined, BoundingBox::new(-3, 10, 0, 4, 20, 9));

		combined.translate(0, -5, 1);

		assert_eq!(combined, BoundingBox::new(-3, 5, 1, 4, 15, 10));
	}
}
