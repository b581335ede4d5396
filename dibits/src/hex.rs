/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

lazy_static::lazy_static! {
    /// Two uppercase hex digits for every byte value, e.g. `HEX_TABLE[15] == *b"0F"`.
    pub static ref HEX_TABLE: [[u8; 2]; 256] = {
        let mut table = [[0u8; 2]; 256];
        for (byte, entry) in table.iter_mut().enumerate() {
            *entry = [HEX_DIGITS[byte >> 4], HEX_DIGITS[byte & 0x0F]];
        }
        table
    };
}

#[inline]
pub fn lookup(byte: u8) -> &'static [u8; 2] {
    &HEX_TABLE[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_round_trips() {
        for n in 0..=255u8 {
            let text = std::str::from_utf8(lookup(n)).unwrap();
            assert_eq!(text.len(), 2);
            assert_eq!(u8::from_str_radix(text, 16).unwrap(), n);
            assert_eq!(text, text.to_ascii_uppercase());
        }
    }

    #[test]
    fn pads_and_uppercases() {
        assert_eq!(lookup(0), b"00");
        assert_eq!(lookup(0x0F), b"0F");
        assert_eq!(lookup(0xA0), b"A0");
        assert_eq!(lookup(0xFF), b"FF");
    }
}
