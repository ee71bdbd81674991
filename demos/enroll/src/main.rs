use chrono::offset;
use totpkit::base32;
use totpkit::totp::Totp;

pub fn main() -> anyhow::Result<()> {
    // Mint a fresh 32-symbol secret for the account
    let secret = base32::generate_secret(32);

    let totp = Totp::new(secret);

    // The URI would normally be rendered as a QR code for scanning
    println!(
        "Scan to enroll: {}",
        totp.provisioning_uri("john.doe@email.com", None)
    );

    // Get seconds since Unix Epoch
    let now = offset::Local::now().timestamp();

    // Show the first code so the enrollment can be confirmed
    let code = totp.generate(now as u64)?;
    println!(
        "Code: {}, Remaining time: {}",
        code,
        totp.remaining_seconds(now as u64)
    );

    Ok(())
}
