pub mod base32;
pub mod clock;
pub mod hotp;
pub mod provisioning;
pub mod totp;

use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    #[error("Secret decoded to no key bytes")]
    EmptySecret,
    #[error("Invalid digest")]
    InvalidDigest(Vec<u8>),
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OtpCode {
    pub(crate) code: u32,
    pub(crate) digits: u32,
}

impl OtpCode {
    pub fn integer(&self) -> u32 {
        self.code
    }
}

impl Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0padding$}",
            self.code,
            padding = (self.digits as usize)
        )
    }
}
