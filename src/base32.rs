use rand::rngs::OsRng;
use rand::Rng;

use crate::OtpError;

/// The 32-symbol RFC4648 alphabet used for OTP secrets.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decodes a base32-encoded secret into its raw key bytes.
///
/// This is a best-effort decode, not a strict RFC4648 validator: the input
/// is uppercased, spaces are stripped, and any character outside the
/// alphabet is skipped instead of rejected. Trailing bits that do not fill
/// a whole byte are dropped, so `=` padding is unnecessary.
///
/// Returns [`OtpError::EmptySecret`] when no byte could be produced, either
/// because the input was empty or because no recognized symbol was found.
pub fn decode(secret: &str) -> Result<Vec<u8>, OtpError> {
    let normalized = secret.to_uppercase().replace(' ', "");

    let mut bytes = Vec::with_capacity(normalized.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for symbol in normalized.bytes() {
        let Some(value) = ALPHABET.iter().position(|&c| c == symbol) else {
            continue;
        };

        buffer = (buffer << 5) | value as u32;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            bytes.push((buffer >> bits) as u8);
        }
    }

    if bytes.is_empty() {
        return Err(OtpError::EmptySecret);
    }

    Ok(bytes)
}

/// Encodes raw key bytes as an unpadded base32 string,
/// the form secrets are shown to users and embedded in provisioning URIs
pub fn encode(key: &[u8]) -> String {
    data_encoding::BASE32_NOPAD.encode(key)
}

/// Generates a random base32 secret of `length` characters, each drawn
/// independently and uniformly from the alphabet using the operating
/// system CSPRNG. Callers typically use a length of 32.
pub fn generate_secret(length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[OsRng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::base32::{decode, encode, generate_secret, ALPHABET};
    use crate::OtpError;

    #[rstest]
    #[case("JBSWY3DPEHPK3PXP")]
    #[case("jbswy3dpehpk3pxp")]
    #[case("JBSW Y3DP EHPK 3PXP")]
    #[case("JBSW1Y3DP0EHPK3PXP8")]
    fn decode_is_permissive(#[case] secret: &str) {
        let expected = b"Hello!\xde\xad\xbe\xef".to_vec();

        assert_eq!(expected, decode(secret).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("0189")]
    fn decode_with_no_symbols_fails(#[case] secret: &str) {
        assert!(matches!(decode(secret), Err(OtpError::EmptySecret)));
    }

    #[rstest]
    #[case(b"12345678901234567890".to_vec(), "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ")]
    #[case(b"fooba".to_vec(), "MZXW6YTB")]
    fn encode_matches_reference(#[case] key: Vec<u8>, #[case] expected: &str) {
        assert_eq!(expected, encode(&key));
    }

    // Round trips hold for non-5-byte-aligned keys too, since the unpadded
    // encoding carries exactly the bits the decoder keeps
    #[rstest]
    #[case(b"f".to_vec())]
    #[case(b"foob".to_vec())]
    #[case(b"fooba".to_vec())]
    #[case(b"Hello!\xde\xad\xbe\xef".to_vec())]
    #[case(vec![0x00, 0xff, 0x10, 0x80])]
    fn encode_decode_round_trip(#[case] key: Vec<u8>) {
        assert_eq!(key, decode(&encode(&key)).unwrap());
    }

    #[test]
    fn generated_secret_has_length_and_alphabet() {
        let secret = generate_secret(32);

        assert_eq!(32, secret.len());
        assert!(secret.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn generated_secrets_differ() {
        assert_ne!(generate_secret(32), generate_secret(32));
    }

    #[test]
    fn generated_secret_decodes() {
        let secret = generate_secret(32);

        // 32 symbols carry 160 bits, a full 20-byte key
        assert_eq!(20, decode(&secret).unwrap().len());
    }
}
