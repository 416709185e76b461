//! The rigctld command surface used by the bridge
//!
//! Only two commands are ever sent: `f` to read the primary's frequency
//! and `F <hz>` to set it on the secondary.

/// Read the current frequency
pub const GET_FREQUENCY: &str = "f";

/// Set the frequency, followed by the frequency as text
pub const SET_FREQUENCY: &str = "F";

/// Build the set-frequency command for the secondary rig.
///
/// The frequency is interpolated verbatim; no numeric validation or range
/// checking is performed.
pub fn set_frequency_command(frequency: &str) -> String {
    format!("{} {}", SET_FREQUENCY, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_frequency_command() {
        assert_eq!(set_frequency_command("14074000"), "F 14074000");
    }
}
