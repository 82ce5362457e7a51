use java_rand::Random;

/// Rounds half up, like `Math.round(double)` in Java. Note that this differs from `f64::round`
/// for negative halves: `-2.5` rounds to `-2`, not `-3`.
#[inline]
pub fn java_round(x: f64) -> i64 {
	(x + 0.5).floor() as i64
}

/// Creates the random used to lay out a large structure starting in the given chunk column.
/// Only the low 48 bits of `seed` have any influence on the result.
pub fn large_feature_random(seed: u64, x: i32, z: i32) -> Random {
	let mut rng = Random::new(seed);
	let coefficients = (rng.next_i64(), rng.next_i64());

	let x_part = (x as i64).wrapping_mul(coefficients.0);
	let z_part = (z as i64).wrapping_mul(coefficients.1);

	Random::new((x_part ^ z_part) as u64 ^ seed)
}
