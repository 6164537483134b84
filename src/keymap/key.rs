use defmt::Format;

/// One cell of the key matrix.
///
/// `hid_code` is the usage ID reported when the key is pressed and
/// `modifier` the modifier mask held together with it, so a single cell
/// can produce a shifted character. `label` is the printed legend; it is
/// for diagnostics only and never reaches the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct KeyDefinition {
    pub hid_code: u8,
    pub modifier: u8,
    pub label: char,
}

impl KeyDefinition {
    /// A cell nothing is assigned to.
    pub const UNASSIGNED: KeyDefinition = KeyDefinition::new(0, 0, ' ');

    pub const fn new(hid_code: u8, modifier: u8, label: char) -> Self {
        KeyDefinition {
            hid_code,
            modifier,
            label,
        }
    }

    /// Whether this cell produces no HID output at all.
    ///
    /// Report composers should send nothing for such a cell rather than
    /// a literal usage ID 0. A modifier-only key (usage 0, mask set) is
    /// assigned.
    pub const fn is_unassigned(&self) -> bool {
        self.hid_code == 0 && self.modifier == 0
    }
}

#[cfg(test)]
mod tests {
    use super::KeyDefinition;
    use crate::hid;

    #[test]
    fn unassigned_means_no_usage_and_no_modifier() {
        assert!(KeyDefinition::UNASSIGNED.is_unassigned());
        assert!(KeyDefinition::new(0, 0, '#').is_unassigned());
        assert!(!KeyDefinition::new(hid::KEY_A, 0, 'a').is_unassigned());
        assert!(!KeyDefinition::new(0, hid::MOD_LEFT_SHIFT, '^').is_unassigned());
    }
}
