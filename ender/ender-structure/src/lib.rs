extern crate ender_base;
extern crate java_rand;

pub mod piece;
pub mod rings;
pub mod stronghold;

pub use piece::{Entrance, Piece, PieceKind};
pub use rings::{ConcentricRings, RingCursor, RingEstimator};
pub use stronghold::StrongholdGenerator;

use ender_base::{BoundingBox, ColumnPosition};

/// Replays the layout of a structure from its seed.
pub trait PieceGenerator {
	/// Lays out the structure that starts in the column `start`. Returns `None` if no layout with
	/// a portal room could be produced. The returned structure is only valid until the next call.
	fn generate(&mut self, structure_seed: u64, start: ColumnPosition) -> Option<&Structure>;
}

/// Cheaply estimates where the first structure of a seed starts, without consulting biomes.
pub trait FirstPositionEstimator {
	fn estimate(&self, structure_seed: u64) -> ColumnPosition;
}

/// The pieces of one generated structure, in generation order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Structure {
	pub(crate) pieces: Vec<Piece>,
	pub(crate) portal_room: Option<usize>
}

impl Structure {
	/// Panics if `portal_room` is not an index into `pieces`.
	pub fn new(pieces: Vec<Piece>, portal_room: Option<usize>) -> Self {
		if let Some(index) = portal_room {
			assert!(index < pieces.len(), "portal room index {} out of bounds for {} pieces", index, pieces.len());
		}

		Structure { pieces, portal_room }
	}

	pub fn pieces(&self) -> &[Piece] {
		&self.pieces
	}

	pub fn portal_room(&self) -> Option<&Piece> {
		self.portal_room.map(|index| &self.pieces[index])
	}

	pub fn portal_room_index(&self) -> Option<usize> {
		self.portal_room
	}

	/// Returns true if any piece other than the portal room intersects `area`.
	pub fn obstructs(&self, area: &BoundingBox) -> bool {
		let portal_room = self.portal_room;

		self.pieces.iter()
			.enumerate()
			.any(|(index, piece)| Some(index) != portal_room && piece.bounding_box.intersects(area))
	}

	pub fn bounding_box(&self) -> Option<BoundingBox> {
		let mut pieces = self.pieces.iter();
		let first = pieces.next()?.bounding_box;

		Some(pieces.fold(first, |bounds, piece| bounds.encompass(&piece.bounding_box)))
	}

	pub(crate) fn clear(&mut self) {
		self.pieces.clear();
		self.portal_room = None;
	}
}
