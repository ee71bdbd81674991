use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::{base32, OtpCode, OtpError};

type HmacSha1 = Hmac<Sha1>;

/// Calculates the HMAC-SHA1 digest of the counter under the given key.
///
/// The counter is hashed in network byte order, as RFC4226 prescribes.
///
/// # Panics
/// Never in practice: HMAC accepts keys of any length
pub fn calc_digest(key: &[u8], counter: u64) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(&counter.to_be_bytes());

    mac.finalize().into_bytes().to_vec()
}

/// Encodes the HMAC digest into a truncated integer.
pub fn encode_digest_truncated(digest: &[u8], target_digits_count: u32) -> Result<u32, OtpError> {
    // While sometimes this is a hardcoded 19
    // the last byte tells us the offset for any digest length
    let offset = match digest.last() {
        Some(x) => *x & 0xf,
        None => return Err(OtpError::InvalidDigest(Vec::from(digest))),
    } as usize;

    // Gets the 4 bytes that will compose the code
    let code_bytes: [u8; 4] = match digest[offset..offset + 4].try_into() {
        Ok(x) => x,
        Err(_) => return Err(OtpError::InvalidDigest(Vec::from(digest))),
    };

    let code = u32::from_be_bytes(code_bytes);
    let truncation_factor = u32::pow(10, target_digits_count);

    Ok((code & 0x7fffffff) % truncation_factor)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hotp {
    pub(crate) secret: String,
    digits: u32,
}

impl Hotp {
    /// Creates the config for the [HMAC-based One-time Password Algorithm](http://en.wikipedia.org/wiki/HMAC-based_One-time_Password_Algorithm)
    /// (HOTP) given an RFC4648 base32 encoded secret
    ///
    /// Obs.: This method defaults to a 6-digit code.
    pub fn new(secret: String) -> Self {
        Self { secret, digits: 6 }
    }

    ///  Sets the number of digits to generate
    pub fn with_digits(&mut self, digits: u32) -> &mut Self {
        self.digits = digits;

        self
    }

    /// Generates a HOTP code from the provided counter
    /// truncated to the specified number of digits
    pub fn generate(&self, counter: u64) -> Result<OtpCode, OtpError> {
        let decoded = base32::decode(self.secret.as_str())?;
        let digest = calc_digest(decoded.as_slice(), counter);

        let code = encode_digest_truncated(digest.as_ref(), self.digits)?;

        Ok(OtpCode {
            code,
            digits: self.digits,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::hotp::Hotp;
    use crate::OtpError;

    // RFC4226 appendix D vectors for the ASCII key "12345678901234567890"
    #[rstest]
    #[case(0, 755224)]
    #[case(1, 287082)]
    #[case(2, 359152)]
    #[case(3, 969429)]
    #[case(4, 338314)]
    #[case(5, 254676)]
    #[case(6, 287922)]
    #[case(7, 162583)]
    #[case(8, 399871)]
    #[case(9, 520489)]
    fn hotp(#[case] counter: u64, #[case] expected: u32) {
        let hotp = Hotp::new("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ".to_string());

        assert_eq!(expected, hotp.generate(counter).unwrap().integer());
    }

    #[test]
    fn hotp_is_deterministic() {
        let hotp = Hotp::new("JBSWY3DPEHPK3PXP".to_string());

        assert_eq!(hotp.generate(1).unwrap(), hotp.generate(1).unwrap());
        assert_eq!("996554", hotp.generate(1).unwrap().to_string());
    }

    #[test]
    fn hotp_with_undecodable_secret_fails() {
        let hotp = Hotp::new("0189".to_string());

        assert!(matches!(hotp.generate(0), Err(OtpError::EmptySecret)));
    }
}
