use bitvec::prelude::*;

use crate::encode::Crc8;
use crate::params::InputMode;

pub const BB_HEADER_BITS: usize = 80;
pub const BB_HEADER_BYTES: usize = BB_HEADER_BITS / 8;

pub const INBAND_TYPE_B_BITS: usize = 104;
pub const INBAND_TYPE_B_BYTES: usize = INBAND_TYPE_B_BITS / 8;

/// Offset of the 27 bit TS_RATE field inside the in-band type B block.
pub const INBAND_TS_RATE_OFFSET: usize = 67;
pub const TS_RATE_MAX: u32 = (1 << 27) - 1;

pub const TS_PACKET_LEN: usize = 188;
pub const TS_SYNC_BYTE: u8 = 0x47;

pub const TS_GS_TRANSPORT: u8 = 0b11;

/// DVB-T2 baseband header. The CRC-8 is not stored, it is computed
/// from the other fields when the header is serialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BbHeader {
    pub ts_gs: u8,      // 2 bits
    pub sis_mis: bool,  // 1 bit
    pub ccm_acm: bool,  // 1 bit
    pub issyi: bool,    // 1 bit
    pub npd: bool,      // 1 bit
    pub ext: u8,        // 2 bits
    pub isi: u8,        // 8 bits
    pub upl: u16,       // 16 bits
    pub dfl: u16,       // 16 bits
    pub sync: u8,       // 8 bits
    pub syncd: u16,     // 16 bits
    pub mode: InputMode,
}

/// Distance in bits from the end of the header to the first packet
/// starting in the data field, given how many bytes of the current packet
/// have already been sent.
pub fn sync_distance(count: usize) -> u16 {
    if count == 0 {
        0
    } else {
        ((TS_PACKET_LEN - count) * 8) as u16
    }
}

impl BbHeader {
    /// Header of a single transport stream with constant coding and modulation.
    pub fn single_stream(mode: InputMode, dfl: u16, syncd: u16) -> Self {
        let (upl, sync) = match mode {
            InputMode::Normal => ((TS_PACKET_LEN * 8) as u16, TS_SYNC_BYTE),
            InputMode::Hem => (0, 0),
        };

        Self {
            ts_gs: TS_GS_TRANSPORT,
            sis_mis: true,
            ccm_acm: true,
            issyi: false,
            npd: false,
            ext: 0,
            isi: 0,
            upl,
            dfl,
            sync,
            syncd,
            mode,
        }
    }

    /// Serialise to ten bytes, the last one being the header CRC-8.
    pub fn to_bytes(&self, crc: &Crc8) -> [u8; BB_HEADER_BYTES] {
        let mut bits = bitarr!(u8, Msb0; 0; BB_HEADER_BITS);

        bits[0..2].store_be(self.ts_gs);
        bits.set(2, self.sis_mis);
        bits.set(3, self.ccm_acm);
        bits.set(4, self.issyi);
        bits.set(5, self.npd);
        bits[6..8].store_be(self.ext);
        // MATYPE-2 only carries the stream id for multiple input streams
        let isi = if self.sis_mis { 0 } else { self.isi };
        bits[8..16].store_be(isi);
        bits[16..32].store_be(self.upl);
        bits[32..48].store_be(self.dfl);
        bits[48..56].store_be(self.sync);
        bits[56..72].store_be(self.syncd);

        let mut bytes = bits.into_inner();
        bytes[9] = header_crc(crc, &bytes[..9], self.mode);
        bytes
    }

    /// Parse a serialised header, returning it with the CRC-8 check result.
    pub fn from_bytes(bytes: &[u8; BB_HEADER_BYTES], crc: &Crc8, mode: InputMode) -> (Self, bool) {
        let bits = bytes.view_bits::<Msb0>();

        let header = Self {
            ts_gs: bits[0..2].load_be(),
            sis_mis: bits[2],
            ccm_acm: bits[3],
            issyi: bits[4],
            npd: bits[5],
            ext: bits[6..8].load_be(),
            isi: bits[8..16].load_be(),
            upl: bits[16..32].load_be(),
            dfl: bits[32..48].load_be(),
            sync: bits[48..56].load_be(),
            syncd: bits[56..72].load_be(),
            mode,
        };
        let valid = header_crc(crc, &bytes[..9], mode) == bytes[9];

        (header, valid)
    }
}

// In high efficiency mode the CRC is XORed with MODE = 1.
fn header_crc(crc: &Crc8, bytes: &[u8], mode: InputMode) -> u8 {
    let c = crc.checksum(bytes);
    match mode {
        InputMode::Normal => c,
        InputMode::Hem => c ^ 0x01,
    }
}

/// In-band type B signalling block placed in the padding field of the first
/// BBFRAME of each signalling cycle. Only TS_RATE is populated.
pub fn inband_type_b(ts_rate: u32) -> [u8; INBAND_TYPE_B_BYTES] {
    let mut bits = bitarr!(u8, Msb0; 0; INBAND_TYPE_B_BITS);

    // PADDING_TYPE
    bits[0..2].store_be(0b01u8);
    // TTO, FIRST_ISCR, BUFS_UNIT and BUFS stay zero
    bits[INBAND_TS_RATE_OFFSET..INBAND_TS_RATE_OFFSET + 27].store_be(ts_rate & TS_RATE_MAX);

    bits.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{bytes_to_bits, new_crc8};

    #[test]
    fn matype_is_single_transport_stream() {
        let crc = new_crc8();
        let bytes = BbHeader::single_stream(InputMode::Normal, 32128, 0).to_bytes(&crc);
        assert_eq!(bytes[0], 0xf0);
        assert_eq!(bytes[1], 0);
        assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 1504);
        assert_eq!(u16::from_be_bytes([bytes[4], bytes[5]]), 32128);
        assert_eq!(bytes[6], TS_SYNC_BYTE);
        assert_eq!(crc.checksum(&bytes), 0);
    }

    #[test]
    fn parse_roundtrip_checks_crc() {
        let crc = new_crc8();
        let header = BbHeader::single_stream(InputMode::Normal, 6952, 1480);
        let mut bytes = header.to_bytes(&crc);
        let (parsed, valid) = BbHeader::from_bytes(&bytes, &crc, InputMode::Normal);
        assert!(valid);
        assert_eq!(parsed, header);

        bytes[4] ^= 0x10;
        let (_, valid) = BbHeader::from_bytes(&bytes, &crc, InputMode::Normal);
        assert!(!valid);
    }

    #[test]
    fn hem_flips_last_crc_bit() {
        let crc = new_crc8();
        let header = BbHeader::single_stream(InputMode::Hem, 32128, 0);
        let hem = header.to_bytes(&crc);
        assert_eq!(hem[2..4], [0, 0]);
        assert_eq!(hem[6], 0);

        let plain = crc.checksum(&hem[..9]);
        assert_eq!(hem[9], plain ^ 0x01);
        let bits = bytes_to_bits(&hem);
        assert_eq!(bits[79], (plain & 1) ^ 1);
    }

    #[test]
    fn sync_distance_points_at_next_packet() {
        assert_eq!(sync_distance(0), 0);
        assert_eq!(sync_distance(1), 187 * 8);
        assert_eq!(sync_distance(187), 8);
    }

    #[test]
    fn inband_carries_ts_rate() {
        let rate = 0x4c4b40; // 5 Mbit/s
        let bits = bytes_to_bits(&inband_type_b(rate));
        assert_eq!(bits.len(), INBAND_TYPE_B_BITS);
        assert_eq!(&bits[..2], &[0, 1]);
        assert!(bits[2..INBAND_TS_RATE_OFFSET].iter().all(|b| *b == 0));
        let field = &bits[INBAND_TS_RATE_OFFSET..INBAND_TS_RATE_OFFSET + 27];
        assert_eq!(crate::encode::get_bits_msb(field), rate as u64);
        assert!(bits[INBAND_TS_RATE_OFFSET + 27..].iter().all(|b| *b == 0));
    }
}
