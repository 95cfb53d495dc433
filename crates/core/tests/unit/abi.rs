//! Register naming across conventions and register files.

use mipsdis_core::common::error::{Error, InvalidAbiError, InvalidRegisterIndexError};
use mipsdis_core::isa::abi::{Abi, RegisterFile};
use rstest::rstest;

#[rstest]
#[case::zero(0, "$zero", "$zero")]
#[case::t0_a4(8, "$t0", "$a4")]
#[case::t4_t0(12, "$t4", "$t0")]
#[case::gp(28, "$gp", "$gp")]
#[case::ra(31, "$ra", "$ra")]
fn gpr_names(#[case] index: u32, #[case] o32: &str, #[case] n64: &str) {
    assert_eq!(RegisterFile::Gpr.name(index, Abi::O32), Ok(o32));
    assert_eq!(RegisterFile::Gpr.name(index, Abi::N32), Ok(n64));
    assert_eq!(RegisterFile::Gpr.name(index, Abi::N64), Ok(n64));
}

#[test]
fn numeric_names() {
    assert_eq!(RegisterFile::Gpr.name(29, Abi::Numeric), Ok("$29"));
    assert_eq!(RegisterFile::Fpr.name(12, Abi::Numeric), Ok("$f12"));
    assert_eq!(RegisterFile::RspVector.name(7, Abi::Numeric), Ok("$v7"));
}

#[test]
fn fpr_conventions() {
    assert_eq!(RegisterFile::Fpr.name(12, Abi::O32), Ok("$fa0"));
    assert_eq!(RegisterFile::Fpr.name(13, Abi::N32), Ok("$fa1"));
    assert_eq!(RegisterFile::Fpr.name(24, Abi::N64), Ok("$fs0"));
}

#[rstest]
#[case::cop0(RegisterFile::Cop0, 12, "$Status")]
#[case::cop0_epc(RegisterFile::Cop0, 14, "$EPC")]
#[case::fcr31(RegisterFile::Cop1Control, 31, "$FpcCsr")]
#[case::fcr0(RegisterFile::Cop1Control, 0, "$FpcIrr")]
#[case::rsp_cop0(RegisterFile::RspCop0, 8, "$DPC_START")]
#[case::rsp_vco(RegisterFile::RspCop2Control, 0, "$vco")]
#[case::gte_data(RegisterFile::GteData, 31, "$LZCR")]
#[case::gte_control(RegisterFile::GteControl, 0, "$R11R12")]
#[case::hilo(RegisterFile::HiLo, 1, "lo")]
fn coprocessor_names(#[case] file: RegisterFile, #[case] index: u32, #[case] name: &str) {
    assert_eq!(file.name(index, Abi::O32), Ok(name));
}

#[test]
fn generic_cop2_is_always_numeric() {
    assert_eq!(RegisterFile::Cop2.name(5, Abi::O32), Ok("$5"));
    assert_eq!(RegisterFile::Cop2Control.name(5, Abi::N64), Ok("$5"));
}

#[rstest]
#[case::gpr(RegisterFile::Gpr, 32)]
#[case::fpr(RegisterFile::Fpr, 40)]
#[case::hilo(RegisterFile::HiLo, 2)]
#[case::gte(RegisterFile::GteData, u32::MAX)]
fn out_of_range_indices(#[case] file: RegisterFile, #[case] index: u32) {
    assert_eq!(
        file.name(index, Abi::O32),
        Err(InvalidRegisterIndexError { file, index })
    );
}

#[test]
fn abi_tags() {
    assert_eq!("o32".parse::<Abi>(), Ok(Abi::O32));
    assert_eq!("N64".parse::<Abi>(), Ok(Abi::N64));
    assert_eq!("numeric".parse::<Abi>(), Ok(Abi::Numeric));
    assert_eq!(
        "eabi".parse::<Abi>(),
        Err(InvalidAbiError {
            tag: "eabi".to_owned()
        })
    );
    assert_eq!(Abi::N32.to_string(), "n32");
}

#[test]
fn unknown_abi_converts_to_the_umbrella_error() {
    let err: Error = "o64"
        .parse::<Abi>()
        .map_err(Error::from)
        .err()
        .unwrap_or_else(|| panic!("o64 is not a supported ABI"));
    assert!(matches!(err, Error::InvalidAbi(InvalidAbiError { ref tag }) if tag == "o64"));
    assert!(err.to_string().contains("unknown ABI `o64`"));
}
