use std::time::SystemTime;

use totpkit::clock;
use totpkit::totp::Totp;

pub fn main() -> anyhow::Result<()> {
    // Initialize the TOTP with the defaults (6 digits and a 30 second period)
    let totp = Totp::new("JBSWY3DPEHPK3PXP".into());

    // Calculate time since Unix Epoch
    let now = SystemTime::now();
    let time_since_epoch = now.duration_since(SystemTime::UNIX_EPOCH)?;

    // Generate the code with the seconds
    let code = totp.generate(time_since_epoch.as_secs())?;

    let remaining = totp.remaining_seconds(time_since_epoch.as_secs());

    // Print the code with its countdown and progress
    println!(
        "Code: {}, rolls over in {} ({:.0}% of the period elapsed)",
        code,
        clock::format_remaining(remaining),
        totp.progress(time_since_epoch.as_secs()) * 100.0
    );

    Ok(())
}
