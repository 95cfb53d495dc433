//! Free helper functions.

use mipsdis_core::utils::{
    get_register_name_numeric, get_register_name_o32, is_power_of_two, sign_extend_immediate,
    swap_endianness, version,
};
use proptest::prelude::*;

#[test]
fn sign_extension_examples() {
    assert_eq!(sign_extend_immediate(0xFFFF), -1);
    assert_eq!(sign_extend_immediate(0x0001), 1);
    assert_eq!(sign_extend_immediate(0x8000), -0x8000);
    assert_eq!(sign_extend_immediate(0x7FFF), 0x7FFF);
}

#[test]
fn register_names() {
    assert_eq!(get_register_name_o32(4), Ok("$a0"));
    assert_eq!(get_register_name_numeric(4), Ok("$4"));
    assert_eq!(get_register_name_o32(29), Ok("$sp"));
    assert_eq!(get_register_name_numeric(29), Ok("$29"));
    assert!(get_register_name_o32(32).is_err());
}

#[test]
fn powers_of_two() {
    assert!(!is_power_of_two(0));
    assert!(is_power_of_two(1));
    assert!(is_power_of_two(0x8000_0000));
    assert!(!is_power_of_two(12));
}

#[test]
fn byte_swap() {
    // lw $v0, 0x0($v0) as stored in a little-endian image
    assert_eq!(swap_endianness(0x0000_428C), 0x8C42_0000);
}

#[test]
fn version_matches_the_package() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

proptest! {
    #[test]
    fn sign_extension_matches_the_definition(v in any::<u16>()) {
        let expected = if v >= 0x8000 { i32::from(v) - 0x1_0000 } else { i32::from(v) };
        prop_assert_eq!(sign_extend_immediate(v), expected);
    }

    #[test]
    fn swap_is_an_involution(word in any::<u32>()) {
        prop_assert_eq!(swap_endianness(swap_endianness(word)), word);
    }

    #[test]
    fn power_of_two_has_one_bit(v in any::<u32>()) {
        prop_assert_eq!(is_power_of_two(v), v.count_ones() == 1);
    }
}
