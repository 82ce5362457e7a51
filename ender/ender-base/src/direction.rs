#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
	North,
	East,
	South,
	West
}

impl Direction {
	/// Horizontal directions in the order used when one is drawn at random.
	pub const HORIZONTAL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

	pub fn axis(self) -> Axis {
		match self {
			Direction::North => Axis::Z,
			Direction::East  => Axis::X,
			Direction::South => Axis::Z,
			Direction::West  => Axis::X
		}
	}
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
	X,
	Z
}
