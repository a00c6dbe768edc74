mod common;

use common::*;
use w3b_client::constants::{TOKEN_2022_PROGRAM_ID, W3B_PROGRAM_ID};
use w3b_client::pda::{
    associated_token_address, derive_address, find_protocol_state_pda,
    find_redemption_request_pda, find_user_profile_pda,
};
use w3b_client::PdaError;

#[test]
fn test_user_profile_pda_is_deterministic() {
    let user = new_pubkey();

    let first = find_user_profile_pda(&W3B_PROGRAM_ID, &user).unwrap();
    let second = find_user_profile_pda(&W3B_PROGRAM_ID, &user).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_user_profile_pda_differs_per_user() {
    let (a, _) = find_user_profile_pda(&W3B_PROGRAM_ID, &new_pubkey()).unwrap();
    let (b, _) = find_user_profile_pda(&W3B_PROGRAM_ID, &new_pubkey()).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_pdas_match_runtime_derivation() {
    let user = new_pubkey();

    assert_eq!(
        find_protocol_state_pda(&W3B_PROGRAM_ID).unwrap(),
        solana_sdk::pubkey::Pubkey::find_program_address(&[&b"protocol_state"[..]], &W3B_PROGRAM_ID)
    );
    assert_eq!(
        find_user_profile_pda(&W3B_PROGRAM_ID, &user).unwrap(),
        solana_sdk::pubkey::Pubkey::find_program_address(
            &[&b"user_profile"[..], user.as_ref()],
            &W3B_PROGRAM_ID
        )
    );
    assert_eq!(
        find_redemption_request_pda(&W3B_PROGRAM_ID, &user, 42).unwrap(),
        solana_sdk::pubkey::Pubkey::find_program_address(
            &[&b"redemption"[..], user.as_ref(), &42u64.to_le_bytes()],
            &W3B_PROGRAM_ID
        )
    );
}

#[test]
fn test_pda_depends_on_program_id() {
    let user = new_pubkey();
    let other_program = new_pubkey();

    let (a, _) = find_user_profile_pda(&W3B_PROGRAM_ID, &user).unwrap();
    let (b, _) = find_user_profile_pda(&other_program, &user).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_seed_longer_than_32_bytes_is_rejected() {
    let long_seed = [7u8; 33];

    let err = derive_address(&W3B_PROGRAM_ID, &[&long_seed]).unwrap_err();

    assert!(matches!(err, PdaError::InvalidSeed(_)));
}

#[test]
fn test_too_many_seeds_are_rejected() {
    let seed: &[u8] = b"s";
    let seeds = vec![seed; 16];

    let err = derive_address(&W3B_PROGRAM_ID, &seeds).unwrap_err();

    assert!(matches!(err, PdaError::InvalidSeed(_)));
}

#[test]
fn test_fifteen_max_length_seeds_are_accepted() {
    let seed: &[u8] = &[1u8; 32];
    let seeds = vec![seed; 15];

    assert!(derive_address(&W3B_PROGRAM_ID, &seeds).is_ok());
}

#[test]
fn test_associated_token_address_matches_ata_program_derivation() {
    let owner = new_pubkey();
    let mint = new_pubkey();
    let ata_program = solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

    let expected = solana_sdk::pubkey::Pubkey::find_program_address(
        &[owner.as_ref(), TOKEN_2022_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ata_program,
    )
    .0;

    assert_eq!(
        associated_token_address(&owner, &mint, &TOKEN_2022_PROGRAM_ID),
        expected
    );
}
