use lamport_ots::hash::{Blake3, OneWayHash, Sha256};
use lamport_ots::lamport::{
    generate_private_key, generate_public_key, keypair, sign, verify, PrivateKey, PublicKey,
    Signature,
};
use lamport_ots::params::{N, VALUE_LEN};
use lamport_ots::{Error, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hello_scenario() -> Result<()> {
    let private_key: PrivateKey = generate_private_key()?;
    let public_key = generate_public_key(&private_key);
    let signature = sign("hello", private_key);

    assert!(verify("hello", &public_key, &signature));
    assert!(!verify("hello!", &public_key, &signature));

    let mut values = signature.values().to_vec();
    values[0] = [0u8; VALUE_LEN];
    let zeroed: Signature = Signature::try_from(values)?;
    assert!(!verify("hello", &public_key, &zeroed));
    Ok(())
}

#[test]
fn whitespace_changes_the_outcome() -> Result<()> {
    let (private_key, public_key) = keypair::<Sha256>()?;
    let signature = private_key.sign("hello");
    assert!(!public_key.verify("hello ", &signature));
    assert!(!public_key.verify(" hello", &signature));
    Ok(())
}

#[test]
fn wrong_key_is_rejected() -> Result<()> {
    let (private_a, _public_a) = keypair::<Sha256>()?;
    let (_private_b, public_b) = keypair::<Sha256>()?;
    let signature = private_a.sign("transfer 10 coins");
    assert!(!public_b.verify("transfer 10 coins", &signature));
    Ok(())
}

#[test]
fn blake3_configuration_round_trips() -> Result<()> {
    let (private_key, public_key) = keypair::<Blake3>()?;
    let signature = private_key.sign("hello");
    assert!(public_key.verify("hello", &signature));
    assert!(!public_key.verify("hellO", &signature));
    Ok(())
}

#[test]
fn public_key_matches_recomputed_hashes() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let private_key: PrivateKey = PrivateKey::generate_with(&mut rng)?;
    let public_key = private_key.public_key();

    // Only the revealed half is visible outside the crate.
    let signature = private_key.sign("hello");
    let digest = Sha256::digest(b"hello");
    for (i, (pair, revealed)) in public_key
        .pairs()
        .iter()
        .zip(signature.values().iter())
        .enumerate()
    {
        let bit = lamport_ots::hash::bit_of_digest(i, &digest) as usize;
        assert_eq!(pair[bit], Sha256::digest(revealed));
    }
    Ok(())
}

#[test]
fn seeded_generation_is_reproducible() -> Result<()> {
    let first: PrivateKey = PrivateKey::generate_with(&mut StdRng::seed_from_u64(7))?;
    let second: PrivateKey = PrivateKey::generate_with(&mut StdRng::seed_from_u64(7))?;
    let third: PrivateKey = PrivateKey::generate_with(&mut StdRng::seed_from_u64(8))?;
    assert_eq!(first.public_key(), second.public_key());
    assert_ne!(first.public_key(), third.public_key());
    Ok(())
}

#[test]
fn short_signature_is_a_length_mismatch() {
    let result: Result<Signature> = Signature::try_from(vec![[0u8; VALUE_LEN]; N - 1]);
    assert!(matches!(
        result,
        Err(Error::LengthMismatch {
            what: "signature",
            expected: N,
            found,
        }) if found == N - 1
    ));
}

#[test]
fn oversized_public_key_is_a_length_mismatch() {
    let result: Result<PublicKey> = PublicKey::try_from(vec![[[0u8; 32]; 2]; N + 1]);
    assert!(matches!(
        result,
        Err(Error::LengthMismatch { found, .. }) if found == N + 1
    ));
}

#[test]
fn rebuilt_public_key_still_verifies() -> Result<()> {
    let (private_key, public_key) = keypair::<Sha256>()?;
    let signature = private_key.sign("hello");
    let rebuilt: PublicKey = PublicKey::try_from(public_key.pairs().to_vec())?;
    assert_eq!(rebuilt, public_key);
    assert!(rebuilt.verify("hello", &signature));
    Ok(())
}
