use crate::consts::LUT_SIZE;

use super::ToneCurve;

/// A 256-entry table indexed by input channel value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut {
    table: [u8; LUT_SIZE],
}

impl Lut {
    pub fn from_table(table: [u8; LUT_SIZE]) -> Self {
        Self { table }
    }

    /// Sample `curve` at every 8-bit input.
    pub fn from_curve<C: ToneCurve + ?Sized>(curve: &C) -> Self {
        let mut table = [0u8; LUT_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = curve.map_value(i as u8);
        }
        Self { table }
    }
}

impl ToneCurve for Lut {
    fn map_value(&self, value: u8) -> u8 {
        self.table[usize::from(value)]
    }
}
