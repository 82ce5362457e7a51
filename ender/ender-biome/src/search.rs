use crate::BiomeSource;
use ender_base::BlockPosition;
use java_rand::Random;

/// Picks a random position whose biome matches `predicate`, sampling every quart on the outer
/// edge of a square of `radius` blocks around `(x, z)` as well as its interior.
///
/// Matches are chosen by reservoir sampling, so every matching quart is equally likely, but
/// `rng` is only drawn from after the first match. Returns `None` if nothing matched.
pub fn find_biome_horizontal<S, P>(source: &S, x: i32, y: i32, z: i32, radius: i32, predicate: P, rng: &mut Random) -> Option<BlockPosition>
	where S: BiomeSource, P: Fn(&S::Biome) -> bool {

	let (quart_x, quart_y, quart_z) = (x >> 2, y >> 2, z >> 2);
	let quart_radius = radius >> 2;

	let mut result = None;
	let mut found = 0;

	for offset_z in -quart_radius..=quart_radius {
		for offset_x in -quart_radius..=quart_radius {
			let sample_x = quart_x + offset_x;
			let sample_z = quart_z + offset_z;

			if !predicate(&source.noise_biome(sample_x, quart_y, sample_z)) {
				continue;
			}

			if result.is_none() || rng.next_u32_bound(found + 1) == 0 {
				result = Some(BlockPosition::new(sample_x << 2, y, sample_z << 2));
			}

			found += 1;
		}
	}

	result
}

#[cfg(test)]
mod test {
	use crate::search::find_biome_horizontal;
	use crate::BiomeSource;
	use ender_base::BlockPosition;
	use java_rand::Random;

	/// Land at quarts with an even x coordinate, ocean elsewhere.
	struct Stripes;

	impl BiomeSource for Stripes {
		type Biome = bool;

		fn noise_biome(&self, x: i32, _y: i32, _z: i32) -> bool {
			x % 2 == 0
		}
	}

	struct Single(i32, i32);

	impl BiomeSource for Single {
		type Biome = bool;

		fn noise_biome(&self, x: i32, _y: i32, z: i32) -> bool {
			(x, z) == (self.0, self.1)
		}
	}

	#[test]
	fn test_single_match() {
		let mut rng = Random::new(5);
		let mut untouched = Random::new(5);

		let found = find_biome_horizontal(&Single(-7, 30), -20, 0, 100, 112, |biome| *biome, &mut rng);

		assert_eq!(found, Some(BlockPosition::new(-28, 0, 120)));

		// A lone match never consults the random.
		assert_eq!(rng.next_i64(), untouched.next_i64());
	}

	#[test]
	fn test_out_of_radius() {
		let mut rng = Random::new(5);

		// 112 blocks is 28 quarts, so quart 29 lies outside the square.
		assert_eq!(find_biome_horizontal(&Single(29, 0), 0, 0, 0, 112, |biome| *biome, &mut rng), None);
		assert!(find_biome_horizontal(&Single(28, -28), 0, 0, 0, 112, |biome| *biome, &mut rng).is_some());
	}

	#[test]
	fn test_no_match() {
		let mut rng = Random::new(1);

		assert_eq!(find_biome_horizontal(&Stripes, 0, 0, 0, 112, |_| false, &mut rng), None);
	}

	#[test]
	fn test_reservoir() {
		let mut rng = Random::new(1);
		let mut replay = Random::new(1);

		let found = find_biome_horizontal(&Stripes, 8, 64, 8, 112, |biome| *biome, &mut rng)
			.expect("stripes contain land");

		assert_eq!(found.y(), 64);
		assert_eq!((found.x() >> 2) % 2, 0);
		assert!((found.x() - 8).abs() <= 112 && (found.z() - 8).abs() <= 112);

		// 29 land columns per row, 57 rows, and one draw for each match after the first.
		for found in 1..29 * 57 {
			replay.next_u32_bound(found + 1);
		}

		assert_eq!(rng.next_i64(), replay.next_i64());
	}
}
