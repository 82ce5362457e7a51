//! C ABI for callers outside of Rust, such as a WebAssembly host splitting a seed range over
//! several workers.
//!
//! Only `generate_layouts` is exported. Checking a world seed needs a full biome generator, so
//! `test_world_seed` in the `verify` module stays generic over a `TerrainGenerator` and has to be
//! instantiated and exported by whichever crate provides one.

use crate::Layout;
use std::slice;

/// Writes up to `out_len` layouts for the structure seeds in `seed_start..seed_end` to `out`,
/// returning the number written. A null `out` is treated as an empty buffer.
///
/// # Safety
///
/// Unless null, `out` must be valid for writes of `out_len` layouts, and must not be accessed
/// by anything else for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn generate_layouts(seed_start: u64, seed_end: u64, out: *mut Layout, out_len: u32) -> u32 {
	if out.is_null() || out_len == 0 {
		return 0;
	}

	let out = slice::from_raw_parts_mut(out, out_len as usize);

	crate::generate_layouts(seed_start, seed_end, out)
}

#[cfg(test)]
mod test {
	use crate::{ffi, Layout};
	use std::ptr;

	#[test]
	fn test_null_buffer() {
		assert_eq!(unsafe { ffi::generate_layouts(0, 1000, ptr::null_mut(), 16) }, 0);
	}

	#[test]
	fn test_matches_safe_call() {
		let mut expected = vec![Layout::default(); 32];
		let count = crate::generate_layouts(77, 90, &mut expected);

		let mut out = vec![Layout::default(); 32];
		let written = unsafe { ffi::generate_layouts(77, 90, out.as_mut_ptr(), 32) };

		assert_eq!(written, count);
		assert_eq!(out, expected);

		// Capacity is taken from the length argument, not from the allocation.
		let mut out = vec![Layout::default(); 32];
		let written = unsafe { ffi::generate_layouts(77, 90, out.as_mut_ptr(), 1) };

		assert_eq!(written, count.min(1));
		assert!(out[1..].iter().all(|layout| *layout == Layout::default()));
	}
}
