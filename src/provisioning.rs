/// Issuer used when the caller does not supply one.
pub const DEFAULT_ISSUER: &str = "Employee Management";

/// Builds the otpauth:// URI that authenticator apps consume, usually
/// presented to the user as a QR code.
///
/// The secret, account and issuer are percent-encoded for safe inclusion
/// in the URI: reserved characters are escaped, unreserved ones pass
/// through. The `algorithm`, `digits` and `period` fields are fixed
/// literals reflecting this engine's fixed configuration.
pub fn provisioning_uri(secret: &str, account: &str, issuer: Option<&str>) -> String {
    let issuer = match issuer {
        Some(i) if !i.is_empty() => i,
        _ => DEFAULT_ISSUER,
    };

    format!(
        "otpauth://totp/{}:{}?secret={}&issuer={}&algorithm=SHA1&digits=6&period=30",
        urlencoding::encode(issuer),
        urlencoding::encode(account),
        urlencoding::encode(secret),
        urlencoding::encode(issuer),
    )
}
