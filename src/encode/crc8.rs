// CRC-8 as used by DVB-T2 for the BBHEADER and for the user packet CRC
// that replaces the transport stream sync byte.
// g(x) = x^8 + x^7 + x^6 + x^4 + x^2 + 1

pub const CRC8_POLY: u8 = 0xd5;

pub struct Crc8 {
    table: [u8; 256],
}

pub fn new_crc8() -> Crc8 {
    let mut table = [0u8; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let mut crc = 0u8;
        for j in (0..8).rev() {
            let bit = ((i >> j) & 1) as u8;
            if bit ^ (crc >> 7) != 0 {
                crc = (crc << 1) ^ CRC8_POLY;
            } else {
                crc <<= 1;
            }
        }
        *entry = crc;
    }

    Crc8 { table }
}

impl Crc8 {
    /// Advance a running remainder by one byte.
    pub fn update(&self, crc: u8, byte: u8) -> u8 {
        self.table[(crc ^ byte) as usize]
    }

    pub fn checksum(&self, bytes: &[u8]) -> u8 {
        bytes.iter().fold(0, |crc, b| self.update(crc, *b))
    }

    /// Same remainder over one-bit-per-byte cells, MSB first, without the table.
    pub fn checksum_bits(&self, bits: &[u8]) -> u8 {
        let mut crc = 0u8;
        for bit in bits {
            if (bit & 1) ^ (crc >> 7) != 0 {
                crc = (crc << 1) ^ CRC8_POLY;
            } else {
                crc <<= 1;
            }
        }
        crc
    }

    pub fn table(&self) -> &[u8; 256] {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::bytes_to_bits;

    #[test]
    fn table_holds_polynomial() {
        let crc = new_crc8();
        assert_eq!(crc.table()[0], 0);
        assert_eq!(crc.table()[1], CRC8_POLY);
    }

    #[test]
    fn sync_packet_is_deterministic_and_checks_to_zero() {
        let crc = new_crc8();
        let packet = [0x47u8; 188];
        let first = crc.checksum(&packet);
        assert_eq!(first, new_crc8().checksum(&packet));

        let mut with_crc = packet.to_vec();
        with_crc.push(first);
        assert_eq!(crc.checksum(&with_crc), 0);
    }

    #[test]
    fn bitwise_matches_table() {
        let crc = new_crc8();
        let bytes: Vec<u8> = (0..=255u8).rev().collect();
        assert_eq!(crc.checksum(&bytes), crc.checksum_bits(&bytes_to_bits(&bytes)));
    }
}
