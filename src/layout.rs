//! Key assignments for the device.
//!
//! Two tables over the same 7×5 grid: the flat layer carries QWERTY and
//! the thumb row, the symbol layer digits and punctuation. The bottom
//! row is identical in both layers so the thumb keys never move.

use crate::hid;
use crate::keymap::{Error, KeyDefinition, KeyTable, Layer, KEY_COUNT};

/// Both layers of the matrix.
///
/// The firmware's layer selector picks one of the two tables; this type
/// only maps the selection to a table and implements no selection
/// policy.
pub struct Layout {
    flat: KeyTable,
    symbol: KeyTable,
}

impl Layout {
    pub const fn table(&self, layer: Layer) -> &KeyTable {
        match layer {
            Layer::Flat => &self.flat,
            Layer::Symbol => &self.symbol,
        }
    }

    pub const fn flat(&self) -> &KeyTable {
        &self.flat
    }

    pub const fn symbol(&self) -> &KeyTable {
        &self.symbol
    }

    /// Definition of the key at `(row, col)` on the given layer.
    pub const fn key(&self, layer: Layer, row: u8, col: u8) -> Result<KeyDefinition, Error> {
        self.table(layer).get(row, col)
    }
}

/// The device keymap, resident in read-only data.
pub static LAYOUT: Layout = Layout {
    flat: KeyTable::new(FLAT),
    symbol: KeyTable::new(SYMBOL),
};

const fn plain(hid_code: u8, label: char) -> KeyDefinition {
    KeyDefinition::new(hid_code, 0, label)
}

const fn shifted(hid_code: u8, label: char) -> KeyDefinition {
    KeyDefinition::new(hid_code, hid::MOD_LEFT_SHIFT, label)
}

/// Held-shift thumb key: modifier only, no usage ID of its own.
const SHIFT: KeyDefinition = KeyDefinition::new(0, hid::MOD_LEFT_SHIFT, '^');

/// The symbol-layer switch. The layer selector consumes this cell
/// directly, so the table assigns it nothing.
const SYM: KeyDefinition = KeyDefinition::new(0, 0, '#');

#[rustfmt::skip]
const FLAT: [KeyDefinition; KEY_COUNT] = [
    plain(hid::KEY_Q, 'q'), plain(hid::KEY_W, 'w'), plain(hid::KEY_E, 'e'),   plain(hid::KEY_R, 'r'), plain(hid::KEY_T, 't'),
    plain(hid::KEY_Y, 'y'), plain(hid::KEY_U, 'u'), plain(hid::KEY_I, 'i'),   plain(hid::KEY_O, 'o'), plain(hid::KEY_P, 'p'),
    plain(hid::KEY_A, 'a'), plain(hid::KEY_S, 's'), plain(hid::KEY_D, 'd'),   plain(hid::KEY_F, 'f'), plain(hid::KEY_G, 'g'),
    plain(hid::KEY_H, 'h'), plain(hid::KEY_J, 'j'), plain(hid::KEY_K, 'k'),   plain(hid::KEY_L, 'l'), plain(hid::KEY_BACKSPACE, '<'),
    plain(hid::KEY_Z, 'z'), plain(hid::KEY_X, 'x'), plain(hid::KEY_C, 'c'),   plain(hid::KEY_V, 'v'), plain(hid::KEY_B, 'b'),
    plain(hid::KEY_N, 'n'), plain(hid::KEY_M, 'm'), plain(hid::KEY_COMMA, ','), plain(hid::KEY_DOT, '.'), plain(hid::KEY_ENTER, '>'),
    SYM,                    SHIFT,                  plain(hid::KEY_SPACE, '_'), plain(hid::KEY_SPACE, '_'), plain(hid::KEY_SPACE, '_'),
];

#[rustfmt::skip]
const SYMBOL: [KeyDefinition; KEY_COUNT] = [
    plain(hid::KEY_1, '1'),           plain(hid::KEY_2, '2'),          plain(hid::KEY_3, '3'),            plain(hid::KEY_4, '4'),             plain(hid::KEY_5, '5'),
    plain(hid::KEY_6, '6'),           plain(hid::KEY_7, '7'),          plain(hid::KEY_8, '8'),            plain(hid::KEY_9, '9'),             plain(hid::KEY_0, '0'),
    shifted(hid::KEY_1, '!'),         shifted(hid::KEY_2, '@'),        shifted(hid::KEY_3, '#'),          shifted(hid::KEY_4, '$'),           shifted(hid::KEY_5, '%'),
    plain(hid::KEY_MINUS, '-'),       plain(hid::KEY_EQUAL, '='),      plain(hid::KEY_LEFT_BRACKET, '['), plain(hid::KEY_RIGHT_BRACKET, ']'), plain(hid::KEY_BACKSPACE, '<'),
    plain(hid::KEY_SEMICOLON, ';'),   plain(hid::KEY_APOSTROPHE, '\''), plain(hid::KEY_GRAVE, '`'),       plain(hid::KEY_SLASH, '/'),         plain(hid::KEY_BACKSLASH, '\\'),
    shifted(hid::KEY_SEMICOLON, ':'), shifted(hid::KEY_APOSTROPHE, '"'), shifted(hid::KEY_SLASH, '?'),    shifted(hid::KEY_BACKSLASH, '|'),   plain(hid::KEY_ENTER, '>'),
    SYM,                              SHIFT,                           plain(hid::KEY_SPACE, '_'),        plain(hid::KEY_SPACE, '_'),         plain(hid::KEY_SPACE, '_'),
];
