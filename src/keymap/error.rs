use defmt::Format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// The scanned coordinate lies outside the 7×5 matrix. Never
    /// clamped or wrapped: a wrap would silently resolve to a
    /// neighbouring key.
    OutOfRange { row: u8, col: u8 },
}
