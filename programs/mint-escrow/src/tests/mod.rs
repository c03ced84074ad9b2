
use anchor_lang::error::Error;
use anchor_lang::Result;

use crate::error::EscrowError;

/// Assert that a settlement gate rejected with the expected escrow error
#[track_caller]
pub fn assert_escrow_err(result: Result<()>, expected: EscrowError) {
    let expected_code: u32 = expected.into();
    match result.expect_err("expected gate to reject") {
        Error::AnchorError(e) => assert_eq!(e.error_code_number, expected_code),
        Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
    }
}
