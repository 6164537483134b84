use defmt::Format;

/// The two layers of the matrix.
///
/// A layer is a complete alternate mapping of the same physical grid.
/// The layer selector in the firmware picks which table to consult;
/// switching layers never edits table contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Format)]
pub enum Layer {
    Flat,
    Symbol,
}

impl Default for Layer {
    fn default() -> Self {
        Self::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::Layer;

    #[test]
    fn flat_is_the_base_layer() {
        assert_eq!(Layer::default(), Layer::Flat);
    }
}
