#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use cipher_core::crypto::error::CipherError;
    use cipher_core::crypto::utils::*;

    #[test]
    fn test_bytes_to_bits() {
        let input = vec![0b10101010, 0b11001100];
        let expected = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        assert_eq!(bytes_to_bits(&input), expected);
    }

    #[test]
    fn test_bits_to_bytes() {
        let bits = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        let expected = vec![0b10101010, 0b11001100];
        assert_eq!(bits_to_bytes(&bits), expected);
    }

    #[test]
    fn test_bits_to_bytes_partial_group() {
        // неполная группа дополняется нулями справа
        let bits = bitvec![1, 1, 1];
        assert_eq!(bits_to_bytes(&bits), vec![0b11100000]);
    }

    #[test]
    fn test_hex_roundtrip() {
        let data = hex_literal::hex!("00 01 7f 80 ff");
        let text = to_hex(&data);
        assert_eq!(text, "00017f80ff");
        assert_eq!(from_hex(&text).unwrap(), data.to_vec());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        let err = from_hex("zz").unwrap_err();
        assert!(matches!(err, CipherError::MalformedCiphertext(_)));
    }

    #[test]
    fn test_pkcs7_pad_short() {
        let padded = pkcs7_pad(b"Hello AES!", 16);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[10..], &[6u8; 6]);
    }

    #[test]
    fn test_pkcs7_pad_full_block() {
        let padded = pkcs7_pad(&[0u8; 16], 16);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_pkcs7_unpad() {
        let padded = pkcs7_pad(b"abc", 8);
        assert_eq!(pkcs7_unpad(&padded), Some(&b"abc"[..]));
    }

    #[test]
    fn test_pkcs7_unpad_invalid() {
        assert_eq!(pkcs7_unpad(&[1, 2, 3, 0]), None);
        assert_eq!(pkcs7_unpad(&[1, 2, 3, 9]), None);
        assert_eq!(pkcs7_unpad(&[1, 2, 2, 3]), None);
        assert_eq!(pkcs7_unpad(&[]), None);
    }
}

use cipher_core::crypto::utils::{bits_to_bytes, bytes_to_bits, pkcs7_pad, pkcs7_unpad};
use quickcheck::quickcheck;

quickcheck! {
    fn prop_pkcs7_roundtrip(data: Vec<u8>) -> bool {
        let padded = pkcs7_pad(&data, 16);
        padded.len() % 16 == 0 && pkcs7_unpad(&padded) == Some(&data[..])
    }

    fn prop_bits_roundtrip(data: Vec<u8>) -> bool {
        bits_to_bytes(&bytes_to_bits(&data)) == data
    }
}
