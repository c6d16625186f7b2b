/// Legacy discriminator suffix carried by migrated Discord usernames.
const LEGACY_DISCRIMINATOR: &str = "#0";

/// Strips the legacy `#0` discriminator from a display name.
///
/// Usernames migrated off discriminators render their tag as `name#0`; the suffix is
/// dropped before a name is stored.
pub fn strip_discriminator(name: &str) -> String {
    name.strip_suffix(LEGACY_DISCRIMINATOR)
        .unwrap_or(name)
        .to_string()
}
