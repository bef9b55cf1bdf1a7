use cipher_core::CipherError;
use hex_literal::hex;
use rijndael::rijndael::key_schedule::{expand_key, KeySize};

#[test]
fn test_aes128_schedule_length_and_first() {
    // AES-128: Nk=4, Nr=10 → 11 раундовых ключей
    let key = hex!("2b7e1516 28aed2a6 abf71588 09cf4f3c");
    let schedule = expand_key(&key).unwrap();

    assert_eq!(schedule.key_size(), KeySize::Aes128);
    assert_eq!(schedule.round_key_count(), 11, "AES-128 должно дать 11 раундовых ключей");
    assert_eq!(schedule.iter().count(), 11);
    // Первый раундовый ключ = исходный
    assert_eq!(schedule.round_key(0), &key);
}

#[test]
fn test_aes128_round1_matches_fips() {
    // FIPS-197, Appendix A.1
    let key = hex!("2b7e1516 28aed2a6 abf71588 09cf4f3c");
    let schedule = expand_key(&key).unwrap();

    assert_eq!(
        schedule.round_key(1),
        &hex!("a0fafe17 88542cb1 23a33939 2a6c7605"),
        "Первый раунд AES-128 не совпал с FIPS-197"
    );
    assert_eq!(
        schedule.round_key(10),
        &hex!("d014f9a8 c9ee2589 e13f0cc8 b6630ca6")
    );
}

#[test]
fn test_aes192_schedule() {
    // FIPS-197, Appendix A.2: w[6..8] = fe0c91f7 2402f5a5
    let key = hex!("8e73b0f7 da0e6452 c810f32b 809079e5 62f8ead2 522c6b7b");
    let schedule = expand_key(&key).unwrap();
    assert_eq!(schedule.round_key_count(), 13, "AES-192 должно дать 13 раундовых ключей");
    assert_eq!(&schedule.round_key(1)[8..16], &hex!("fe0c91f7 2402f5a5"));
}

#[test]
fn test_aes256_schedule() {
    // FIPS-197, Appendix A.3: w[8] = 9ba35411, w[12] = a8b09c1a (доп. SubWord)
    let key = hex!(
        "603deb10 15ca71be 2b73aef0 857d7781 1f352c07 3b6108d7 2d9810a3 0914dff4"
    );
    let schedule = expand_key(&key).unwrap();
    assert_eq!(schedule.round_key_count(), 15, "AES-256 должно дать 15 раундовых ключей");
    assert_eq!(&schedule.round_key(2)[..4], &hex!("9ba35411"));
    assert_eq!(&schedule.round_key(3)[..4], &hex!("a8b09c1a"));
    assert_eq!(
        schedule.round_key(14),
        &hex!("fe4890d1 e6188d0b 046df344 706c631e")
    );
}

#[test]
fn test_key_size_mapping() {
    assert_eq!(KeySize::from_key_len(16).unwrap().rounds(), 10);
    assert_eq!(KeySize::from_key_len(24).unwrap().rounds(), 12);
    assert_eq!(KeySize::from_key_len(32).unwrap().rounds(), 14);
    assert_eq!(KeySize::Aes192.bits(), 192);
    assert_eq!(KeySize::from_key_len(10), Err(CipherError::InvalidKeyLength(10)));
}
