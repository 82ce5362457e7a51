//! Replays the piece layout of a stronghold.
//!
//! A stronghold grows outwards from a stairway in its start chunk. Every piece has one or more
//! doors, and each door is filled with a piece drawn from a weighted table. Pieces that have been
//! placed but not yet had their own doors filled wait in a pending list, which is drained in
//! random order. Since the layout only depends on the random draws, the entire structure can be
//! reconstructed from the structure seed and the start chunk without touching any terrain.

mod weights;

use self::weights::{PieceType, PieceWeight, WEIGHTS};
use crate::piece::{Piece, PieceKind};
use crate::{PieceGenerator, Structure};
use ender_base::math::large_feature_random;
use ender_base::{BoundingBox, ColumnPosition, Direction, Version};
use java_rand::Random;

/// Doors further than this many blocks from the start piece on either axis are left empty.
const MAX_START_DISTANCE: i32 = 112;
const MAX_DEPTH: u32 = 50;
/// Weighted draws made for each door before settling for a filler corridor.
const DRAWS_PER_DOOR: u32 = 5;

/// When to stop expanding the layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Halt {
	/// Stop as soon as the portal room is placed, making it the final piece. Pieces placed later
	/// never overlap it, so this is enough for questions about the portal room's surroundings.
	AtPortalRoom,
	/// Fill every door, then sink the structure below sea level.
	Complete
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Settings {
	pub halt: Halt,
	/// Layout attempts made before giving up on a seed. Each attempt uses the next seed.
	pub max_attempts: u32,
	pub sea_level: i32,
	/// Distance kept between the top of a complete structure and the sea level.
	pub sea_level_offset: i32,
	pub min_y: i32
}

impl Settings {
	pub fn for_version(version: Version) -> Self {
		Settings {
			halt: Halt::AtPortalRoom,
			max_attempts: 256,
			sea_level: 63,
			sea_level_offset: 10,
			min_y: version.min_build_height()
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Settings::for_version(Version::newest())
	}
}

pub struct StrongholdGenerator {
	settings: Settings,
	structure: Structure,
	/// Indices of pieces whose doors have not been filled yet.
	pending: Vec<usize>,
	weights: Vec<PieceWeight>,
	total_weight: i32,
	/// Forced choice for the next door, bypassing the weights.
	imposed: Option<PieceType>,
	/// The most recently drawn piece type, which may not be drawn twice in a row.
	previous: Option<PieceType>,
	halted: bool
}

impl StrongholdGenerator {
	pub fn new(settings: Settings) -> Self {
		StrongholdGenerator {
			settings,
			structure: Structure::default(),
			pending: Vec::new(),
			weights: Vec::with_capacity(WEIGHTS.len()),
			total_weight: 0,
			imposed: None,
			previous: None,
			halted: false
		}
	}

	fn reset(&mut self) {
		self.structure.clear();
		self.pending.clear();
		self.weights.clear();
		self.weights.extend_from_slice(&WEIGHTS);
		self.total_weight = 0;
		self.imposed = None;
		self.previous = None;
		self.halted = false;
	}

	fn attempt(&mut self, rng: &mut Random, start: ColumnPosition) {
		self.reset();

		let start_piece = Piece::start(rng, start.block_x() + 2, start.block_z() + 2);

		self.structure.pieces.push(start_piece);
		self.add_children(rng, 0);

		while !self.pending.is_empty() && !self.halted {
			let index = rng.next_u32_bound(self.pending.len() as u32) as usize;
			let piece = self.pending.remove(index);

			self.add_children(rng, piece);
		}
	}

	fn add_children(&mut self, rng: &mut Random, index: usize) {
		let piece = self.structure.pieces[index];

		match piece.kind {
			PieceKind::Start => {
				self.imposed = Some(PieceType::FiveCrossing);
				self.forward(rng, &piece, 1, 1);
			},
			PieceKind::StairsDown | PieceKind::StraightStairsDown | PieceKind::ChestCorridor | PieceKind::PrisonHall => {
				self.forward(rng, &piece, 1, 1);
			},
			PieceKind::Straight { left, right } => {
				self.forward(rng, &piece, 1, 1);

				if left {
					self.left(rng, &piece, 1, 2);
				}

				if right {
					self.right(rng, &piece, 1, 2);
				}
			},
			PieceKind::LeftTurn => match piece.orientation {
				Direction::North | Direction::East => self.left(rng, &piece, 1, 1),
				_ => self.right(rng, &piece, 1, 1)
			},
			PieceKind::RightTurn => match piece.orientation {
				Direction::North | Direction::East => self.right(rng, &piece, 1, 1),
				_ => self.left(rng, &piece, 1, 1)
			},
			PieceKind::RoomCrossing { .. } => {
				self.forward(rng, &piece, 4, 1);
				self.left(rng, &piece, 1, 4);
				self.right(rng, &piece, 1, 4);
			},
			PieceKind::FiveCrossing { left_low, left_high, right_low, right_high } => {
				let (low, high) = match piece.orientation {
					Direction::West | Direction::North => (5, 3),
					_ => (3, 5)
				};

				self.forward(rng, &piece, 5, 1);

				if left_low {
					self.left(rng, &piece, low, 1);
				}

				if left_high {
					self.left(rng, &piece, high, 7);
				}

				if right_low {
					self.right(rng, &piece, low, 1);
				}

				if right_high {
					self.right(rng, &piece, high, 7);
				}
			},
			PieceKind::PortalRoom => self.structure.portal_room = Some(index),
			PieceKind::Library { .. } | PieceKind::FillerCorridor { .. } => ()
		}
	}

	/// Fills the door in the far wall of `piece`.
	fn forward(&mut self, rng: &mut Random, piece: &Piece, offset_x: i32, offset_y: i32) {
		let bounds = &piece.bounding_box;
		let y = bounds.min_y + offset_y;

		let (x, z) = match piece.orientation {
			Direction::North => (bounds.min_x + offset_x, bounds.min_z - 1),
			Direction::South => (bounds.min_x + offset_x, bounds.max_z + 1),
			Direction::West => (bounds.min_x - 1, bounds.min_z + offset_x),
			Direction::East => (bounds.max_x + 1, bounds.min_z + offset_x)
		};

		self.attach(rng, x, y, z, piece.orientation, piece.depth);
	}

	/// Fills a door in the side wall of `piece` facing negative X or negative Z.
	fn left(&mut self, rng: &mut Random, piece: &Piece, offset_y: i32, offset_z: i32) {
		let bounds = &piece.bounding_box;
		let y = bounds.min_y + offset_y;

		match piece.orientation {
			Direction::North | Direction::South => {
				self.attach(rng, bounds.min_x - 1, y, bounds.min_z + offset_z, Direction::West, piece.depth)
			},
			Direction::West | Direction::East => {
				self.attach(rng, bounds.min_x + offset_z, y, bounds.min_z - 1, Direction::North, piece.depth)
			}
		};
	}

	/// Fills a door in the side wall of `piece` facing positive X or positive Z.
	fn right(&mut self, rng: &mut Random, piece: &Piece, offset_y: i32, offset_z: i32) {
		let bounds = &piece.bounding_box;
		let y = bounds.min_y + offset_y;

		match piece.orientation {
			Direction::North | Direction::South => {
				self.attach(rng, bounds.max_x + 1, y, bounds.min_z + offset_z, Direction::East, piece.depth)
			},
			Direction::West | Direction::East => {
				self.attach(rng, bounds.min_x + offset_z, y, bounds.max_z + 1, Direction::South, piece.depth)
			}
		};
	}

	fn attach(&mut self, rng: &mut Random, x: i32, y: i32, z: i32, direction: Direction, depth: u32) -> Option<usize> {
		if self.halted || depth > MAX_DEPTH {
			return None;
		}

		let origin = self.structure.pieces[0].bounding_box;

		if (x - origin.min_x).abs() > MAX_START_DISTANCE || (z - origin.min_z).abs() > MAX_START_DISTANCE {
			return None;
		}

		let piece = self.fill_door(rng, x, y, z, direction, depth + 1)?;
		let index = self.structure.pieces.len();

		self.structure.pieces.push(piece);
		self.pending.push(index);

		if piece.kind == PieceKind::PortalRoom {
			self.structure.portal_room = Some(index);
			self.halted = self.settings.halt == Halt::AtPortalRoom;
		}

		Some(index)
	}

	/// Recomputes the total weight. Returns false once every limited piece type is exhausted,
	/// at which point no further pieces are placed at all.
	fn update_weights(&mut self) -> bool {
		let mut limited_available = false;
		self.total_weight = 0;

		for weight in &self.weights {
			if weight.limit > 0 && weight.placed < weight.limit {
				limited_available = true;
			}

			self.total_weight += weight.weight;
		}

		limited_available
	}

	fn fill_door(&mut self, rng: &mut Random, x: i32, y: i32, z: i32, direction: Direction, depth: u32) -> Option<Piece> {
		if !self.update_weights() {
			return None;
		}

		if let Some(imposed) = self.imposed.take() {
			if let Some(piece) = self.create(imposed, rng, x, y, z, direction, depth) {
				return Some(piece);
			}
		}

		for _ in 0..DRAWS_PER_DOOR {
			let mut selection = rng.next_i32_bound(self.total_weight);
			let mut index = 0;

			// Once the selection goes negative, every following weight is also a candidate if
			// the selected piece did not fit.
			while index < self.weights.len() {
				let weight = self.weights[index];
				selection -= weight.weight;

				if selection < 0 {
					if !weight.can_place(depth) || Some(weight.piece) == self.previous {
						break;
					}

					if let Some(piece) = self.create(weight.piece, rng, x, y, z, direction, depth) {
						self.weights[index].placed += 1;
						self.previous = Some(weight.piece);

						if !self.weights[index].has_capacity() {
							self.weights.remove(index);
						}

						return Some(piece);
					}
				}

				index += 1;
			}
		}

		self.filler_box(x, y, z, direction)
			.filter(|bounds| bounds.min_y > 1)
			.map(|bounds| Piece::filler(depth, bounds, direction))
	}

	fn create(&self, piece: PieceType, rng: &mut Random, x: i32, y: i32, z: i32, direction: Direction, depth: u32) -> Option<Piece> {
		let fit = |offset, size| self.fit(BoundingBox::oriented(x, y, z, offset, size, direction));

		match piece {
			PieceType::Straight => fit((-1, -1, 0), (5, 5, 7))
				.map(|bounds| Piece::straight(rng, depth, bounds, direction)),
			PieceType::PrisonHall => fit((-1, -1, 0), (9, 5, 11))
				.map(|bounds| Piece::plain(rng, PieceKind::PrisonHall, depth, bounds, direction)),
			PieceType::LeftTurn => fit((-1, -1, 0), (5, 5, 5))
				.map(|bounds| Piece::plain(rng, PieceKind::LeftTurn, depth, bounds, direction)),
			PieceType::RightTurn => fit((-1, -1, 0), (5, 5, 5))
				.map(|bounds| Piece::plain(rng, PieceKind::RightTurn, depth, bounds, direction)),
			PieceType::RoomCrossing => fit((-4, -1, 0), (11, 7, 11))
				.map(|bounds| Piece::room_crossing(rng, depth, bounds, direction)),
			PieceType::StraightStairsDown => fit((-1, -7, 0), (5, 11, 8))
				.map(|bounds| Piece::plain(rng, PieceKind::StraightStairsDown, depth, bounds, direction)),
			PieceType::StairsDown => fit((-1, -7, 0), (5, 11, 5))
				.map(|bounds| Piece::plain(rng, PieceKind::StairsDown, depth, bounds, direction)),
			PieceType::FiveCrossing => fit((-4, -3, 0), (10, 9, 11))
				.map(|bounds| Piece::five_crossing(rng, depth, bounds, direction)),
			PieceType::ChestCorridor => fit((-1, -1, 0), (5, 5, 7))
				.map(|bounds| Piece::plain(rng, PieceKind::ChestCorridor, depth, bounds, direction)),
			PieceType::Library => fit((-4, -1, 0), (14, 11, 15))
				.or_else(|| fit((-4, -1, 0), (14, 6, 15)))
				.map(|bounds| Piece::library(rng, depth, bounds, direction)),
			PieceType::PortalRoom => fit((-4, -1, 0), (11, 8, 16))
				.map(|bounds| Piece::portal_room(depth, bounds, direction))
		}
	}

	/// Accepts a candidate box if it stays clear of the bottom of the world and of every piece.
	fn fit(&self, candidate: BoundingBox) -> Option<BoundingBox> {
		if candidate.min_y > 10 && self.collision(&candidate).is_none() {
			Some(candidate)
		} else {
			None
		}
	}

	fn collision(&self, area: &BoundingBox) -> Option<&Piece> {
		self.structure.pieces.iter().find(|piece| piece.bounding_box.intersects(area))
	}

	/// Finds a filler corridor of 2 or 3 blocks leading up to the piece that blocks a full length
	/// corridor. The corridor may reach one block into the wall of that piece. Returns `None` if
	/// nothing blocks the door, or if the blocking piece starts right at the door.
	fn filler_box(&self, x: i32, y: i32, z: i32, direction: Direction) -> Option<BoundingBox> {
		let corridor = |depth| BoundingBox::oriented(x, y, z, (-1, -1, 0), (5, 5, depth), direction);

		let candidate = corridor(4);
		let blocking = self.collision(&candidate)?.bounding_box;

		if blocking.min_y != candidate.min_y {
			return None;
		}

		for depth in (1..=2).rev() {
			if !blocking.intersects(&corridor(depth)) {
				return Some(corridor(depth + 1));
			}
		}

		None
	}

	/// Moves a complete structure down so that it ends below sea level, by a random amount.
	fn move_below_sea_level(&mut self, rng: &mut Random) {
		let bounds = match self.structure.bounding_box() {
			Some(bounds) => bounds,
			None => return
		};

		let limit = self.settings.sea_level - self.settings.sea_level_offset;
		let mut top = bounds.y_span() + self.settings.min_y + 1;

		if top < limit {
			top += rng.next_i32_bound(limit - top);
		}

		let shift = top - bounds.max_y;

		for piece in &mut self.structure.pieces {
			piece.bounding_box.translate(0, shift, 0);
		}
	}
}

impl Default for StrongholdGenerator {
	fn default() -> Self {
		StrongholdGenerator::new(Settings::default())
	}
}

impl PieceGenerator for StrongholdGenerator {
	fn generate(&mut self, structure_seed: u64, start: ColumnPosition) -> Option<&Structure> {
		let mut found = false;

		for attempt in 0..self.settings.max_attempts {
			let mut rng = large_feature_random(structure_seed.wrapping_add(attempt as u64), start.x(), start.z());

			self.attempt(&mut rng, start);

			if self.structure.portal_room.is_some() {
				if self.settings.halt == Halt::Complete {
					self.move_below_sea_level(&mut rng);
				}

				found = true;
				break;
			}
		}

		if found {
			Some(&self.structure)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod test {
	use crate::piece::PieceKind;
	use crate::stronghold::{Halt, Settings, StrongholdGenerator};
	use crate::{PieceGenerator, Structure};
	use ender_base::ColumnPosition;

	const START: (i32, i32) = (-23, 45);

	fn generate(settings: Settings, seed: u64) -> Structure {
		let mut generator = StrongholdGenerator::new(settings);

		generator.generate(seed, ColumnPosition::new(START.0, START.1))
			.cloned()
			.expect("no portal room was generated")
	}

	#[test]
	fn test_deterministic() {
		let mut generator = StrongholdGenerator::default();
		let start = ColumnPosition::new(START.0, START.1);

		for seed in 0..8 {
			let first = generator.generate(seed, start).cloned();
			let second = generator.generate(seed, start).cloned();

			assert!(first.is_some());
			assert_eq!(first, second, "seed {} is not reproducible", seed);
		}
	}

	#[test]
	fn test_start_piece() {
		let structure = generate(Settings::default(), 123);
		let start = structure.pieces()[0];

		assert_eq!(start.kind, PieceKind::Start);
		assert_eq!(start.depth, 0);
		assert_eq!((start.bounding_box.min_x, start.bounding_box.min_z), (START.0 * 16 + 2, START.1 * 16 + 2));
		assert_eq!((start.bounding_box.x_span(), start.bounding_box.y_span(), start.bounding_box.z_span()), (5, 11, 5));

		// The start stairway always leads into a five way crossing.
		assert!(matches!(structure.pieces()[1].kind, PieceKind::FiveCrossing { .. }));
		assert_eq!(structure.pieces()[1].depth, 1);
	}

	#[test]
	fn test_portal_room_is_last_when_halting() {
		for seed in 0..16 {
			let structure = generate(Settings::default(), seed);
			let portal_room = structure.portal_room().expect("portal room");

			assert_eq!(structure.portal_room_index(), Some(structure.pieces().len() - 1));
			assert_eq!(portal_room.kind, PieceKind::PortalRoom);
			assert!(portal_room.depth > 5);
			assert_eq!(structure.pieces().iter().filter(|piece| piece.kind == PieceKind::PortalRoom).count(), 1);
		}
	}

	#[test]
	fn test_pieces_do_not_overlap_earlier_pieces() {
		for seed in 0..16 {
			let structure = generate(Settings { halt: Halt::Complete, ..Settings::default() }, seed);
			let pieces = structure.pieces();

			for (index, piece) in pieces.iter().enumerate().skip(1) {
				// Filler corridors may end inside the wall of the piece that blocked the door.
				if let PieceKind::FillerCorridor { steps } = piece.kind {
					assert!(steps == 2 || steps == 3, "seed {}: filler corridor {:?}", seed, piece);
					continue;
				}

				for earlier in &pieces[..index] {
					assert!(!piece.bounding_box.intersects(&earlier.bounding_box), "seed {}: {:?} overlaps {:?}", seed, piece, earlier);
				}
			}
		}
	}

	#[test]
	fn test_filler_box() {
		use crate::piece::{Entrance, Piece};
		use ender_base::{BoundingBox, Direction};

		// A door at (0, 20, 0) leading south, blocked by a room whose wall starts `distance`
		// blocks into the corridor.
		let filler = |blocker: Option<BoundingBox>| {
			let mut generator = StrongholdGenerator::default();

			if let Some(bounding_box) = blocker {
				generator.structure.pieces.push(Piece {
					kind: PieceKind::PrisonHall,
					depth: 3,
					orientation: Direction::South,
					bounding_box,
					entrance: Entrance::Opening
				});
			}

			generator.filler_box(0, 20, 0, Direction::South)
		};

		let blocked_at = |distance: i32| filler(Some(BoundingBox::new(-1, 19, distance, 3, 23, distance + 6)));
		let corridor = |depth: i32| Some(BoundingBox::new(-1, 19, 0, 3, 23, depth - 1));

		assert_eq!(filler(None), None);
		assert_eq!(filler(Some(BoundingBox::new(-1, 18, 2, 3, 23, 8))), None);

		assert_eq!(blocked_at(3), corridor(3));
		assert_eq!(blocked_at(2), corridor(3));
		assert_eq!(blocked_at(1), corridor(2));
		assert_eq!(blocked_at(0), None);

		// Nothing within the first 4 blocks.
		assert_eq!(blocked_at(4), None);
	}

	#[test]
	fn test_no_single_step_fillers() {
		for seed in 0..64 {
			let structure = generate(Settings { halt: Halt::Complete, ..Settings::default() }, seed);

			assert!(
				structure.pieces().iter().all(|piece| piece.kind != PieceKind::FillerCorridor { steps: 1 }),
				"seed {} has a single step filler corridor", seed
			);
		}
	}

	#[test]
	fn test_piece_limits() {
		for seed in 0..16 {
			let structure = generate(Settings { halt: Halt::Complete, ..Settings::default() }, seed);
			let count = |predicate: &dyn Fn(&PieceKind) -> bool| structure.pieces().iter().filter(|piece| predicate(&piece.kind)).count();

			assert!(count(&|kind| *kind == PieceKind::PrisonHall) <= 5);
			assert!(count(&|kind| matches!(kind, PieceKind::RoomCrossing { .. })) <= 6);
			assert!(count(&|kind| *kind == PieceKind::StraightStairsDown) <= 5);
			assert!(count(&|kind| *kind == PieceKind::StairsDown) <= 5);
			assert!(count(&|kind| *kind == PieceKind::ChestCorridor) <= 4);
			assert!(count(&|kind| matches!(kind, PieceKind::Library { .. })) <= 2);
			assert_eq!(count(&|kind| *kind == PieceKind::PortalRoom), 1);

			// The imposed crossing after the start piece does not count towards the limit.
			assert!(count(&|kind| matches!(kind, PieceKind::FiveCrossing { .. })) <= 5);

			for piece in structure.pieces() {
				assert!(piece.depth <= 51);

				if let PieceKind::Library { .. } = piece.kind {
					assert!(piece.depth > 4);
				}
			}
		}
	}

	#[test]
	fn test_complete_extends_halted_layout() {
		for seed in 0..8 {
			let halted = generate(Settings::default(), seed);
			let complete = generate(Settings { halt: Halt::Complete, ..Settings::default() }, seed);

			let portal_room = halted.portal_room_index().expect("portal room");

			assert_eq!(complete.portal_room_index(), Some(portal_room));
			assert!(complete.pieces().len() >= halted.pieces().len());

			// Completing the layout only adds pieces and shifts everything vertically.
			let shift = complete.pieces()[0].bounding_box.min_y - halted.pieces()[0].bounding_box.min_y;

			for (a, b) in halted.pieces().iter().zip(complete.pieces()) {
				assert_eq!(a.kind, b.kind);
				assert_eq!((a.bounding_box.min_x, a.bounding_box.max_x), (b.bounding_box.min_x, b.bounding_box.max_x));
				assert_eq!((a.bounding_box.min_z, a.bounding_box.max_z), (b.bounding_box.min_z, b.bounding_box.max_z));
				assert_eq!(b.bounding_box.min_y - a.bounding_box.min_y, shift);
			}
		}
	}

	#[test]
	fn test_complete_sinks_below_sea_level() {
		let settings = Settings { halt: Halt::Complete, ..Settings::default() };
		let limit = settings.sea_level - settings.sea_level_offset;

		for seed in 0..8 {
			let bounds = generate(settings, seed).bounding_box().expect("pieces");

			if bounds.y_span() + settings.min_y + 1 < limit {
				assert!(bounds.max_y < limit, "seed {}: top at {}", seed, bounds.max_y);
			}
		}
	}

	#[test]
	fn test_exhausted_attempts() {
		let mut generator = StrongholdGenerator::new(Settings { max_attempts: 0, ..Settings::default() });

		assert!(generator.generate(5, ColumnPosition::new(0, 0)).is_none());
	}
}
