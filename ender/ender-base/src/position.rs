use std::fmt::{Debug, Display, Formatter, Result};

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct BlockPosition {
	x: i32,
	y: i32,
	z: i32
}

impl BlockPosition {
	pub fn new(x: i32, y: i32, z: i32) -> Self {
		BlockPosition { x, y, z }
	}

	/// The column containing this block. Uses an arithmetic shift, so negative coordinates round
	/// towards negative infinity: block -1 lies in column -1, not column 0.
	pub fn column(&self) -> ColumnPosition {
		ColumnPosition::from_block(self.x, self.z)
	}

	pub fn x(&self) -> i32 {
		self.x
	}

	pub fn y(&self) -> i32 {
		self.y
	}

	pub fn z(&self) -> i32 {
		self.z
	}
}

impl Display for BlockPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {}, {})", self.x, self.y, self.z)
	}
}

/// A 16x16 column of blocks spanning the whole height of the world.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Default)]
pub struct ColumnPosition {
	x: i32,
	z: i32
}

impl ColumnPosition {
	pub fn new(x: i32, z: i32) -> Self {
		ColumnPosition { x, z }
	}

	pub fn from_block(x: i32, z: i32) -> Self {
		ColumnPosition::new(x >> 4, z >> 4)
	}

	pub fn x(&self) -> i32 {
		self.x
	}

	pub fn z(&self) -> i32 {
		self.z
	}

	/// Lowest block X coordinate inside this column.
	pub fn block_x(&self) -> i32 {
		self.x << 4
	}

	/// Lowest block Z coordinate inside this column.
	pub fn block_z(&self) -> i32 {
		self.z << 4
	}

	/// The block at the given offset within this column, for example `(8, 8)` for the center.
	pub fn block(&self, offset_x: i32, y: i32, offset_z: i32) -> BlockPosition {
		BlockPosition::new(self.block_x() + offset_x, y, self.block_z() + offset_z)
	}
}

impl Display for ColumnPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {})", self.x, self.z)
	}
}

impl Debug for ColumnPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "ColumnPosition {{ x: {}, z: {} }}", self.x, self.z)
	}
}
