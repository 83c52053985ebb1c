//! Address alignment.

/// Round `addr` up to the next multiple of `align`.
///
/// Returns the smallest address `>= addr` that is a multiple of `align`.
/// The result is idempotent: aligning an already-aligned address returns
/// it unchanged.
///
/// # Panics
///
/// Panics if `align` is zero or not a power of two. Alignments are an API
/// contract, not user input.
pub fn align_forward(addr: usize, align: usize) -> usize {
    assert!(
        align.is_power_of_two(),
        "alignment must be a nonzero power of two (got {align})"
    );
    (addr + (align - 1)) & !(align - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_next_multiple() {
        assert_eq!(align_forward(1, 8), 8);
        assert_eq!(align_forward(7, 8), 8);
        assert_eq!(align_forward(9, 8), 16);
    }

    #[test]
    fn aligned_address_is_unchanged() {
        assert_eq!(align_forward(0, 8), 0);
        assert_eq!(align_forward(16, 8), 16);
        assert_eq!(align_forward(4096, 4096), 4096);
    }

    #[test]
    fn align_one_is_identity() {
        assert_eq!(align_forward(0, 1), 0);
        assert_eq!(align_forward(17, 1), 17);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn zero_alignment_panics() {
        align_forward(64, 0);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn non_power_of_two_alignment_panics() {
        align_forward(64, 12);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_align() -> impl Strategy<Value = usize> {
            (0u32..16).prop_map(|shift| 1usize << shift)
        }

        proptest! {
            #[test]
            fn result_is_a_multiple_of_align(
                addr in 0usize..1 << 40,
                align in arb_align(),
            ) {
                prop_assert_eq!(align_forward(addr, align) % align, 0);
            }

            #[test]
            fn result_is_at_least_addr(
                addr in 0usize..1 << 40,
                align in arb_align(),
            ) {
                prop_assert!(align_forward(addr, align) >= addr);
            }

            #[test]
            fn padding_is_less_than_align(
                addr in 0usize..1 << 40,
                align in arb_align(),
            ) {
                prop_assert!(align_forward(addr, align) - addr < align);
            }

            #[test]
            fn idempotent(
                addr in 0usize..1 << 40,
                align in arb_align(),
            ) {
                let once = align_forward(addr, align);
                prop_assert_eq!(align_forward(once, align), once);
            }
        }
    }
}
