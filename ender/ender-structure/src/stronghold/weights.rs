/// Pieces that can be chosen at random to fill a door.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceType {
	Straight,
	PrisonHall,
	LeftTurn,
	RightTurn,
	RoomCrossing,
	StraightStairsDown,
	StairsDown,
	FiveCrossing,
	ChestCorridor,
	Library,
	PortalRoom
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PieceWeight {
	pub piece: PieceType,
	pub weight: i32,
	/// Maximum number of placements, or 0 for no limit.
	pub limit: u32,
	pub placed: u32
}

impl PieceWeight {
	const fn new(piece: PieceType, weight: i32, limit: u32) -> Self {
		PieceWeight { piece, weight, limit, placed: 0 }
	}

	pub fn has_capacity(&self) -> bool {
		self.limit == 0 || self.placed < self.limit
	}

	pub fn can_place(&self, depth: u32) -> bool {
		let available = self.has_capacity();

		match self.piece {
			PieceType::Library => available && depth > 4,
			PieceType::PortalRoom => available && depth > 5,
			_ => available
		}
	}
}

/// The weights at the start of each layout attempt, in the order they are drawn from.
pub const WEIGHTS: [PieceWeight; 11] = [
	PieceWeight::new(PieceType::Straight,           40, 0),
	PieceWeight::new(PieceType::PrisonHall,          5, 5),
	PieceWeight::new(PieceType::LeftTurn,           20, 0),
	PieceWeight::new(PieceType::RightTurn,          20, 0),
	PieceWeight::new(PieceType::RoomCrossing,       10, 6),
	PieceWeight::new(PieceType::StraightStairsDown,  5, 5),
	PieceWeight::new(PieceType::StairsDown,          5, 5),
	PieceWeight::new(PieceType::FiveCrossing,        5, 4),
	PieceWeight::new(PieceType::ChestCorridor,       5, 4),
	PieceWeight::new(PieceType::Library,            10, 2),
	PieceWeight::new(PieceType::PortalRoom,         20, 1)
];
