use ender_base::{Axis, BoundingBox, Direction};
use java_rand::Random;

/// What a piece is, along with the random choices made when it was created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
	/// The stairway every stronghold starts from.
	Start,
	Straight { left: bool, right: bool },
	PrisonHall,
	LeftTurn,
	RightTurn,
	RoomCrossing { variant: u32 },
	StraightStairsDown,
	StairsDown,
	FiveCrossing { left_low: bool, left_high: bool, right_low: bool, right_high: bool },
	ChestCorridor,
	Library { tall: bool },
	PortalRoom,
	/// Short dead end corridor used when no other piece fits behind a door.
	FillerCorridor { steps: i32 }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Entrance {
	Opening,
	WoodDoor,
	Grates,
	IronDoor
}

impl Entrance {
	pub fn random(rng: &mut Random) -> Self {
		match rng.next_u32_bound(5) {
			2 => Entrance::WoodDoor,
			3 => Entrance::Grates,
			4 => Entrance::IronDoor,
			_ => Entrance::Opening
		}
	}
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
	pub kind: PieceKind,
	/// Number of doors between this piece and the start piece.
	pub depth: u32,
	/// The direction the piece extends in, away from its entrance.
	pub orientation: Direction,
	pub bounding_box: BoundingBox,
	pub entrance: Entrance
}

impl Piece {
	/// Maps a local coordinate pair to a world X coordinate. Local X runs across the width of the
	/// piece and local Z runs from the entrance towards the far wall.
	pub fn world_x(&self, x: i32, z: i32) -> i32 {
		let bounds = &self.bounding_box;

		match self.orientation {
			Direction::North | Direction::South => bounds.min_x + x,
			Direction::West => bounds.max_x - z,
			Direction::East => bounds.min_x + z
		}
	}

	/// Maps a local coordinate pair to a world Z coordinate.
	pub fn world_z(&self, x: i32, z: i32) -> i32 {
		let bounds = &self.bounding_box;

		match self.orientation {
			Direction::North => bounds.max_z - z,
			Direction::South => bounds.min_z + z,
			Direction::West | Direction::East => bounds.min_z + x
		}
	}

	pub fn world_y(&self, y: i32) -> i32 {
		self.bounding_box.min_y + y
	}

	pub(crate) fn start(rng: &mut Random, x: i32, z: i32) -> Self {
		let orientation = Direction::HORIZONTAL[rng.next_u32_bound(4) as usize];

		Piece {
			kind: PieceKind::Start,
			depth: 0,
			orientation,
			bounding_box: BoundingBox::new(x, 64, z, x + 4, 74, z + 4),
			entrance: Entrance::Opening
		}
	}

	/// Creates a piece whose only random choice is its entrance.
	pub(crate) fn plain(rng: &mut Random, kind: PieceKind, depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		Piece { kind, depth, orientation, bounding_box, entrance: Entrance::random(rng) }
	}

	pub(crate) fn straight(rng: &mut Random, depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		let entrance = Entrance::random(rng);
		let left = rng.next_u32_bound(2) == 0;
		let right = rng.next_u32_bound(2) == 0;

		Piece { kind: PieceKind::Straight { left, right }, depth, orientation, bounding_box, entrance }
	}

	pub(crate) fn room_crossing(rng: &mut Random, depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		let entrance = Entrance::random(rng);
		let variant = rng.next_u32_bound(5);

		Piece { kind: PieceKind::RoomCrossing { variant }, depth, orientation, bounding_box, entrance }
	}

	pub(crate) fn five_crossing(rng: &mut Random, depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		let entrance = Entrance::random(rng);
		let left_low = rng.next_bool();
		let left_high = rng.next_bool();
		let right_low = rng.next_bool();
		let right_high = rng.next_u32_bound(3) > 0;

		Piece {
			kind: PieceKind::FiveCrossing { left_low, left_high, right_low, right_high },
			depth,
			orientation,
			bounding_box,
			entrance
		}
	}

	pub(crate) fn library(rng: &mut Random, depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		let entrance = Entrance::random(rng);

		Piece { kind: PieceKind::Library { tall: bounding_box.y_span() > 6 }, depth, orientation, bounding_box, entrance }
	}

	pub(crate) fn portal_room(depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		Piece { kind: PieceKind::PortalRoom, depth, orientation, bounding_box, entrance: Entrance::Opening }
	}

	pub(crate) fn filler(depth: u32, bounding_box: BoundingBox, orientation: Direction) -> Self {
		let steps = match orientation.axis() {
			Axis::Z => bounding_box.z_span(),
			Axis::X => bounding_box.x_span()
		};

		Piece { kind: PieceKind::FillerCorridor { steps }, depth, orientation, bounding_box, entrance: Entrance::Opening }
	}
}
