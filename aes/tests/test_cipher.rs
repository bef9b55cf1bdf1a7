use cipher_core::{CipherAlgorithm, CipherError};
use hex_literal::hex;
use quickcheck::quickcheck;
use rijndael::rijndael::cipher::{aes_decrypt_block, aes_encrypt_block, pad_block, Aes, Block};
use rijndael::rijndael::key_schedule::{expand_key, KeySize};

#[test]
fn test_aes128_nist_vector() {
    // FIPS-197, Appendix B
    let key = hex!("2b7e1516 28aed2a6 abf71588 09cf4f3c");
    let plaintext: Block = hex!("3243f6a8 885a308d 313198a2 e0370734");
    let expected_cipher: Block = hex!("3925841d 02dc09fb dc118597 196a0b32");

    let round_keys = expand_key(&key).unwrap();
    let cipher = aes_encrypt_block(&plaintext, &round_keys);
    assert_eq!(cipher, expected_cipher, "AES-128 encryption mismatch");

    let decrypted = aes_decrypt_block(&cipher, &round_keys);
    assert_eq!(decrypted, plaintext, "AES-128 decryption failed to invert");
}

#[test]
fn test_fips197_appendix_c_vectors() {
    let plaintext: Block = hex!("00112233445566778899aabbccddeeff");
    let cases: [(Vec<u8>, Block); 3] = [
        (
            hex!("000102030405060708090a0b0c0d0e0f").to_vec(),
            hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
        ),
        (
            hex!("000102030405060708090a0b0c0d0e0f1011121314151617").to_vec(),
            hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
        ),
        (
            hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").to_vec(),
            hex!("8ea2b7ca516745bfeafc49904b496089"),
        ),
    ];
    for (key, expected) in cases {
        let aes = Aes::new(&key).unwrap();
        assert_eq!(aes.encrypt_block(&plaintext), expected, "key of {} bytes", key.len());
        assert_eq!(aes.decrypt_block(&expected), plaintext);
    }
}

#[test]
fn test_aes192_known_vector() {
    let key = hex!("8e73b0f7 da0e6452 c810f32b 809079e5 62f8ead2 522c6b7b");
    let plaintext: Block = hex!("6bc1bee2 2e409f96 e93d7e11 7393172a");
    let expected_cipher: Block = hex!("bd334f1d 6e45f25f f712a214 571fa5cc");

    let aes = Aes::new(&key).unwrap();
    assert_eq!(aes.encrypt_block(&plaintext), expected_cipher, "AES-192 encryption mismatch");
    assert_eq!(aes.decrypt_block(&expected_cipher), plaintext, "AES-192 decryption failed");
}

#[test]
fn test_aes256_known_vector() {
    let key = hex!(
        "603deb10 15ca71be 2b73aef0 857d7781 1f352c07 3b6108d7 2d9810a3 0914dff4"
    );
    let plaintext: Block = hex!("6bc1bee2 2e409f96 e93d7e11 7393172a");
    let expected_cipher: Block = hex!("f3eed1bd b5d2a03c 064b5a7e 3db181f8");

    let aes = Aes::new(&key).unwrap();
    assert_eq!(aes.encrypt_block(&plaintext), expected_cipher, "AES-256 encryption mismatch");
    assert_eq!(aes.decrypt_block(&expected_cipher), plaintext, "AES-256 decryption failed");
}

#[test]
fn test_round_counts() {
    let block = [0u8; 16];
    for (len, size, rounds) in [
        (16, KeySize::Aes128, 10),
        (24, KeySize::Aes192, 12),
        (32, KeySize::Aes256, 14),
    ] {
        let aes = Aes::new(&vec![0x42; len]).unwrap();
        assert_eq!(aes.key_size(), size);
        assert_eq!(aes.rounds(), rounds);

        let (cipher, trace) = aes.encrypt_block_traced(&block);
        assert_eq!(trace.len(), rounds + 1);
        assert_eq!(trace.last(), Some(&cipher));
        assert_eq!(cipher, aes.encrypt_block(&block));
    }
}

#[test]
fn test_traced_round_states_fips197() {
    // FIPS-197, Appendix B: состояние в начале раунда 1 и после раунда 1
    let key = hex!("2b7e1516 28aed2a6 abf71588 09cf4f3c");
    let plaintext: Block = hex!("3243f6a8 885a308d 313198a2 e0370734");
    let aes = Aes::new(&key).unwrap();
    let (_, trace) = aes.encrypt_block_traced(&plaintext);
    assert_eq!(trace[0], hex!("193de3be a0f4e22b 9ac68d2a e9f84808"));
    assert_eq!(trace[1], hex!("a49c7ff2 689f352b 6b5bea43 026a5049"));
}

#[test]
fn test_invalid_key_length_rejected() {
    assert_eq!(Aes::new(b"0123456789").unwrap_err(), CipherError::InvalidKeyLength(10));
    assert_eq!(Aes::new(&[]).unwrap_err(), CipherError::InvalidKeyLength(0));
    assert_eq!(Aes::new(&[0u8; 17]).unwrap_err(), CipherError::InvalidKeyLength(17));
}

#[test]
fn test_pad_block() {
    let block = pad_block(b"Hello AES!");
    assert_eq!(&block[..10], b"Hello AES!");
    assert_eq!(&block[10..], &[6u8; 6]);

    let exact = pad_block(b"0123456789abcdef");
    assert_eq!(&exact, b"0123456789abcdef");

    let long = pad_block(b"0123456789abcdefXYZ");
    assert_eq!(&long, b"0123456789abcdef");
}

#[test]
fn test_text_interface_roundtrip() {
    let aes = Aes::new(b"0123456789abcdef").unwrap();
    let hex = aes.encrypt("Hello AES!").unwrap();
    assert_eq!(hex.len(), 32);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(aes.decrypt(&hex).unwrap(), "Hello AES!");
}

#[test]
fn test_text_interface_empty_payload() {
    let aes = Aes::new(&[7u8; 32]).unwrap();
    let hex = aes.encrypt("").unwrap();
    assert_eq!(aes.decrypt(&hex).unwrap(), "");
}

#[test]
fn test_decrypt_malformed_hex() {
    let aes = Aes::new(b"0123456789abcdef").unwrap();
    assert!(matches!(aes.decrypt("not hex"), Err(CipherError::MalformedCiphertext(_))));
    assert!(matches!(aes.decrypt("00ff"), Err(CipherError::MalformedCiphertext(_))));
}

#[test]
fn test_encrypt_decrypt_random() {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    // Фиксированный сид для воспроизводимости
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    for key_len in [16usize, 24, 32] {
        for _ in 0..32 {
            let mut key = vec![0u8; key_len];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let round_keys = expand_key(&key).unwrap();
            let cipher = aes_encrypt_block(&block, &round_keys);
            assert_ne!(cipher, block);
            let decrypted = aes_decrypt_block(&cipher, &round_keys);
            assert_eq!(decrypted, block, "Random encrypt/decrypt failed");
        }
    }
}

quickcheck! {
    fn prop_aes_block_roundtrip(block: Vec<u8>, key: Vec<u8>, size: u8) -> bool {
        let key_len = [16usize, 24, 32][size as usize % 3];
        let mut k = key;
        k.resize(key_len, 0x5a);
        let mut b = [0u8; 16];
        for (dst, src) in b.iter_mut().zip(block.iter()) {
            *dst = *src;
        }
        let aes = Aes::new(&k).unwrap();
        aes.decrypt_block(&aes.encrypt_block(&b)) == b
    }
}
