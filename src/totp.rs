use crate::{base32, clock, hotp, provisioning, OtpCode, OtpError};

#[derive(Debug, Clone, PartialEq)]
pub struct Totp {
    pub(crate) secret: String,
    pub(crate) period: u64,
    pub(crate) digits: u32,
}

impl Totp {
    /// Creates the config for the [Time-based One-time Password Algorithm](http://en.wikipedia.org/wiki/Time-based_One-time_Password_Algorithm)
    /// (TOTP) given an RFC4648 base32 encoded secret
    ///
    /// Obs.: This method defaults to a 6-digit code and a period of 30 seconds
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            period: 30,
            digits: 6,
        }
    }

    ///  Sets the period in seconds
    ///
    /// # Panics
    /// If `period` is zero, as the counter is the epoch time divided by it
    pub fn with_period(&mut self, period: u64) -> &mut Self {
        assert!(period > 0, "period must be non-zero");
        self.period = period;

        self
    }

    ///  Sets the number of digits to generate
    pub fn with_digits(&mut self, digits: u32) -> &mut Self {
        self.digits = digits;

        self
    }

    /// Generates a Totp from the provided seconds since the UNIX epoch
    /// truncated to the specified number of digits
    pub fn generate(&self, seconds_since_epoch: u64) -> Result<OtpCode, OtpError> {
        let counter = seconds_since_epoch / self.period;

        let decoded = base32::decode(self.secret.as_str())?;
        let digest = hotp::calc_digest(decoded.as_slice(), counter);

        let code = hotp::encode_digest_truncated(digest.as_ref(), self.digits)?;

        Ok(OtpCode {
            code,
            digits: self.digits,
        })
    }

    /// Validates a submitted code against every counter in
    /// `current - window ..= current + window`, scanning from the past to
    /// the future and accepting the first match. A window of 1 tolerates
    /// one period of clock drift in either direction, as the RFC recommends.
    ///
    /// The comparison is a plain string match, so a code of the wrong width
    /// or with non-digit characters never matches. A secret that decodes to
    /// no key bytes fails validation instead of erroring.
    ///
    /// No replay protection is kept here: a code stays valid for its whole
    /// window, and callers needing single-use semantics must track the last
    /// accepted counter themselves.
    pub fn validate_window(&self, code: &str, seconds_since_epoch: u64, window: u32) -> bool {
        let Ok(decoded) = base32::decode(self.secret.as_str()) else {
            return false;
        };

        let current = seconds_since_epoch / self.period;

        for i in -i64::from(window)..=i64::from(window) {
            // A negative offset wraps; realistic clocks are nowhere near time zero
            let counter = current.wrapping_add(i as u64);
            let digest = hotp::calc_digest(decoded.as_slice(), counter);

            let Ok(candidate) = hotp::encode_digest_truncated(digest.as_ref(), self.digits) else {
                return false;
            };

            let candidate = OtpCode {
                code: candidate,
                digits: self.digits,
            };

            if candidate.to_string() == code {
                return true;
            }
        }

        false
    }

    /// Seconds until the code for the provided epoch time rolls over,
    /// always in `1..=period`
    pub fn remaining_seconds(&self, seconds_since_epoch: u64) -> u64 {
        clock::seconds_remaining(seconds_since_epoch, self.period)
    }

    /// Elapsed fraction of the current period, in `[0, 1)`
    pub fn progress(&self, seconds_since_epoch: u64) -> f32 {
        clock::progress_fraction(seconds_since_epoch, self.period)
    }

    /// Builds the otpauth:// provisioning URI for this secret,
    /// consumable by standard authenticator apps
    pub fn provisioning_uri(&self, account: &str, issuer: Option<&str>) -> String {
        provisioning::provisioning_uri(self.secret.as_str(), account, issuer)
    }
}
