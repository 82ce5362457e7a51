use bytemuck::{Pod, Zeroable};
use ender_base::ColumnPosition;

/// A stronghold layout worth a closer look: the portal room of the structure generated from
/// `structure_seed` in the start chunk touches the portal chunk, and no other piece does.
///
/// The binary layout is shared with consumers on the other side of the C ABI and must not change.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Layout {
	pub structure_seed: u64,
	pub start_chunk_x: i16,
	pub portal_chunk_x: i16,
	pub start_chunk_z: i16,
	pub portal_chunk_z: i16
}

impl Layout {
	/// Chunk coordinates are truncated to 16 bits. Strongholds never start far enough away from
	/// the origin for this to matter.
	pub fn new(structure_seed: u64, start: ColumnPosition, portal: ColumnPosition) -> Self {
		Layout {
			structure_seed,
			start_chunk_x: start.x() as i16,
			portal_chunk_x: portal.x() as i16,
			start_chunk_z: start.z() as i16,
			portal_chunk_z: portal.z() as i16
		}
	}

	pub fn start(&self) -> ColumnPosition {
		ColumnPosition::new(self.start_chunk_x as i32, self.start_chunk_z as i32)
	}

	pub fn portal(&self) -> ColumnPosition {
		ColumnPosition::new(self.portal_chunk_x as i32, self.portal_chunk_z as i32)
	}

	/// Packs the layout into 4 words: the low and high halves of the seed, then the start and
	/// portal coordinates sharing a word for each axis, start coordinate in the low half.
	pub fn to_words(&self) -> [u32; 4] {
		let pack = |low: i16, high: i16| (low as u16 as u32) | ((high as u16 as u32) << 16);

		[
			self.structure_seed as u32,
			(self.structure_seed >> 32) as u32,
			pack(self.start_chunk_x, self.portal_chunk_x),
			pack(self.start_chunk_z, self.portal_chunk_z)
		]
	}

	pub fn from_words(words: [u32; 4]) -> Self {
		Layout {
			structure_seed: (words[0] as u64) | ((words[1] as u64) << 32),
			start_chunk_x: words[2] as u16 as i16,
			portal_chunk_x: (words[2] >> 16) as u16 as i16,
			start_chunk_z: words[3] as u16 as i16,
			portal_chunk_z: (words[3] >> 16) as u16 as i16
		}
	}

	/// Views a buffer of layouts as native endian words. On little endian targets, every
	/// group of 4 words matches `to_words`.
	pub fn as_words(layouts: &[Layout]) -> &[u32] {
		bytemuck::cast_slice(layouts)
	}
}
