//! Baseband frame pipeline: transport stream packets in, BCH coded
//! BBFRAMEs out.
//!
//! Each frame is an 80 bit BBHEADER, the data field, the optional in-band
//! type B block, then BCH parity. Everything before the parity is
//! randomised. Packets run across frame boundaries, so the position inside
//! the current packet and the running packet CRC are carried over in
//! [`FrameState`].

pub mod header;

use std::fmt;

use tracing::{trace, warn};

pub use header::{BbHeader, inband_type_b, sync_distance};
use header::{BB_HEADER_BITS, INBAND_TYPE_B_BITS, TS_PACKET_LEN, TS_SYNC_BYTE};

use crate::config::FramerConfig;
use crate::encode::{BchEncoder, Crc8, Randomiser, bytes_to_bits, new_bch_encoder, new_crc8, new_randomiser, put_bits_msb};
use crate::params::InputMode;

/// Per stream state carried from one frame to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameState {
    /// Bytes of the current packet already consumed, 0 at a packet boundary.
    pub count: usize,
    /// Running CRC-8 of the current packet.
    pub crc: u8,
    /// Position inside the in-band signalling cycle.
    pub fec_block: usize,
    /// Packets that did not start with the sync byte.
    pub sync_errors: u64,
}

/// One BCH coded frame and the input bytes it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasebandFrame {
    pub bits: Vec<u8>,
    pub consumed: usize,
}

pub struct BasebandFramer {
    config: FramerConfig,
    crc: Crc8,
    bch: BchEncoder,
    randomiser: Randomiser,
    state: FrameState,
}

impl fmt::Debug for BasebandFramer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BasebandFramer<{:?} {} {:?} - {:?}>",
            self.config.params.frame_size, self.config.params.code_rate, self.config.mode, self.state
        )
    }
}

pub fn new_framer(config: &FramerConfig) -> BasebandFramer {
    BasebandFramer {
        config: *config,
        crc: new_crc8(),
        bch: new_bch_encoder(&config.params),
        randomiser: new_randomiser(),
        state: FrameState::default(),
    }
}

impl BasebandFramer {
    /// Bits in each produced frame (`nbch`).
    pub fn frame_bits(&self) -> usize {
        self.config.params.nbch
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    pub fn config(&self) -> &FramerConfig {
        &self.config
    }

    fn padding(&self, fec_block: usize) -> usize {
        match self.config.inband {
            Some(_) if fec_block == 0 => INBAND_TYPE_B_BITS,
            _ => 0,
        }
    }

    /// Bytes of user data carried by a frame at this point of the cycle.
    fn data_bytes(&self, fec_block: usize) -> usize {
        (self.config.params.kbch - BB_HEADER_BITS - self.padding(fec_block)) / 8
    }

    fn next_fec_block(&self, fec_block: usize) -> usize {
        match self.config.inband {
            Some(inband) => (fec_block + 1) % inband.fec_blocks,
            None => fec_block,
        }
    }

    // Input bytes needed for one frame and the packet position after it.
    fn consumption(&self, count: usize, fec_block: usize) -> (usize, usize) {
        let wanted = self.data_bytes(fec_block);
        match self.config.mode {
            InputMode::Normal => (wanted, (count + wanted) % TS_PACKET_LEN),
            InputMode::Hem => {
                let mut count = count;
                let mut consumed = 0;
                let mut emitted = 0;
                while emitted < wanted {
                    if count != 0 {
                        emitted += 1;
                    }
                    consumed += 1;
                    count = (count + 1) % TS_PACKET_LEN;
                }
                (consumed, count)
            }
        }
    }

    /// Exact number of input bytes needed to produce `frames` frames from
    /// the current state.
    pub fn input_required(&self, frames: usize) -> usize {
        let mut count = self.state.count;
        let mut fec_block = self.state.fec_block;
        let mut total = 0;

        for _ in 0..frames {
            let (consumed, next) = self.consumption(count, fec_block);
            total += consumed;
            count = next;
            fec_block = self.next_fec_block(fec_block);
        }

        total
    }

    /// Build one frame from the front of `input`. Returns `None`, leaving
    /// the state untouched, if `input` is too short.
    pub fn try_frame(&mut self, input: &[u8]) -> Option<BasebandFrame> {
        let params = self.config.params;
        let (needed, _) = self.consumption(self.state.count, self.state.fec_block);
        if input.len() < needed {
            return None;
        }

        let padding = self.padding(self.state.fec_block);
        let dfl = (params.kbch - BB_HEADER_BITS - padding) as u16;
        let header = BbHeader::single_stream(self.config.mode, dfl, sync_distance(self.state.count));

        let mut bits = vec![0u8; params.nbch];
        let header_bits = bytes_to_bits(&header.to_bytes(&self.crc));
        bits[..BB_HEADER_BITS].copy_from_slice(&header_bits);
        let mut offset = BB_HEADER_BITS;

        let wanted = self.data_bytes(self.state.fec_block);
        let mut emitted = 0;
        let mut consumed = 0;
        while emitted < wanted {
            let byte = input[consumed];
            consumed += 1;

            if self.state.count == 0 {
                if byte != TS_SYNC_BYTE {
                    self.state.sync_errors += 1;
                    warn!(byte, sync_errors = self.state.sync_errors, "transport stream sync error");
                }
                if self.config.mode == InputMode::Normal {
                    // the sync byte is replaced by the CRC of the previous packet
                    put_bits_msb(&mut bits[offset..], self.state.crc as u64, 8);
                    offset += 8;
                    emitted += 1;
                    self.state.crc = 0;
                }
            } else {
                if self.config.mode == InputMode::Normal {
                    self.state.crc = self.crc.update(self.state.crc, byte);
                }
                put_bits_msb(&mut bits[offset..], byte as u64, 8);
                offset += 8;
                emitted += 1;
            }
            self.state.count = (self.state.count + 1) % TS_PACKET_LEN;
        }

        if let Some(inband) = self.config.inband
            && padding > 0
        {
            let block = bytes_to_bits(&inband_type_b(inband.ts_rate));
            bits[offset..offset + INBAND_TYPE_B_BITS].copy_from_slice(&block);
        }

        self.randomiser.scramble(&mut bits[..params.kbch]);
        self.bch.encode(&mut bits);

        trace!(consumed, dfl, fec_block = self.state.fec_block, "baseband frame");
        self.state.fec_block = self.next_fec_block(self.state.fec_block);

        Some(BasebandFrame { bits, consumed })
    }

    /// Produce up to `frames` frames, stopping early when `input` runs out.
    /// Returns the bytes consumed and the concatenated frames.
    pub fn work(&mut self, input: &[u8], frames: usize) -> (usize, Vec<u8>) {
        let mut consumed = 0;
        let mut output = Vec::with_capacity(frames * self.frame_bits());

        for _ in 0..frames {
            match self.try_frame(&input[consumed..]) {
                Some(frame) => {
                    consumed += frame.consumed;
                    output.extend_from_slice(&frame.bits);
                }
                None => break,
            }
        }

        (consumed, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InbandSignalling;
    use crate::encode::{bits_to_bytes, get_bits_msb};
    use crate::params::{CodeParameters, CodeRate, FrameSize};

    fn config(mode: InputMode, inband: Option<InbandSignalling>) -> FramerConfig {
        FramerConfig {
            params: CodeParameters::lookup(FrameSize::Short, CodeRate::R1_2).unwrap(),
            mode,
            inband,
        }
    }

    fn packets(n: usize) -> Vec<u8> {
        (0..n * TS_PACKET_LEN)
            .map(|i| if i % TS_PACKET_LEN == 0 { TS_SYNC_BYTE } else { (i * 13 % 251) as u8 })
            .collect()
    }

    fn derandomised(framer: &BasebandFramer, bits: &[u8]) -> Vec<u8> {
        let mut bits = bits.to_vec();
        framer.randomiser.scramble(&mut bits[..framer.config.params.kbch]);
        bits
    }

    #[test]
    fn normal_mode_consumes_exact_data_field() {
        let mut framer = new_framer(&config(InputMode::Normal, None));
        let input = packets(10);
        assert_eq!(framer.input_required(1), 869);

        let frame = framer.try_frame(&input).unwrap();
        assert_eq!(frame.consumed, 869);
        assert_eq!(frame.bits.len(), 7200);
        assert_eq!(framer.state().count, 869 % 188);
        assert_eq!(framer.state().sync_errors, 0);
    }

    #[test]
    fn sync_bytes_carry_previous_packet_crc() {
        let mut framer = new_framer(&config(InputMode::Normal, None));
        let input = packets(10);
        let frame = framer.try_frame(&input).unwrap();
        let bytes = bits_to_bytes(&derandomised(&framer, &frame.bits)[..7032]);
        let data = &bytes[10..];

        assert_eq!(data[0], 0);
        assert_eq!(&data[1..188], &input[1..188]);
        assert_eq!(data[188], new_crc8().checksum(&input[1..188]));
    }

    #[test]
    fn second_frame_header_points_at_next_packet() {
        let mut framer = new_framer(&config(InputMode::Normal, None));
        let input = packets(10);
        let first = framer.try_frame(&input).unwrap();
        let second = framer.try_frame(&input[first.consumed..]).unwrap();

        let bits = derandomised(&framer, &second.bits);
        let header: [u8; 10] = bits_to_bytes(&bits[..80]).try_into().unwrap();
        let (parsed, valid) = BbHeader::from_bytes(&header, &new_crc8(), InputMode::Normal);
        assert!(valid);
        assert_eq!(parsed.syncd as usize, (188 - 869 % 188) * 8);
    }

    #[test]
    fn hem_skips_sync_bytes() {
        let mut framer = new_framer(&config(InputMode::Hem, None));
        let input = packets(10);
        // 869 payload bytes need 5 skipped sync bytes from a packet boundary
        assert_eq!(framer.input_required(1), 874);

        let frame = framer.try_frame(&input).unwrap();
        assert_eq!(frame.consumed, 874);
        let bytes = bits_to_bytes(&derandomised(&framer, &frame.bits)[..7032]);
        assert_eq!(&bytes[10..197], &input[1..188]);
        assert_eq!(bytes[197], input[189]);

        let header: [u8; 10] = bytes[..10].try_into().unwrap();
        let (parsed, valid) = BbHeader::from_bytes(&header, &new_crc8(), InputMode::Hem);
        assert!(valid);
        assert_eq!(parsed.upl, 0);
        assert_eq!(parsed.sync, 0);
    }

    #[test]
    fn forecast_matches_consumption() {
        for mode in [InputMode::Normal, InputMode::Hem] {
            let inband = Some(InbandSignalling { fec_blocks: 3, ts_rate: 1000 });
            let mut framer = new_framer(&config(mode, inband));
            let input = packets(40);
            let needed = framer.input_required(5);
            let (consumed, output) = framer.work(&input, 5);
            assert_eq!(consumed, needed, "{:?}", mode);
            assert_eq!(output.len(), 5 * 7200);
        }
    }

    #[test]
    fn short_input_leaves_state_untouched() {
        let mut framer = new_framer(&config(InputMode::Normal, None));
        let input = packets(5);
        // one byte short of a frame
        assert_eq!(framer.input_required(1), 869);
        assert!(framer.try_frame(&input[..868]).is_none());
        assert_eq!(*framer.state(), FrameState::default());

        let (consumed, output) = framer.work(&input[..868], 3);
        assert_eq!(consumed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn inband_block_follows_data_field() {
        let inband = InbandSignalling { fec_blocks: 2, ts_rate: 0x123_4567 };
        let mut framer = new_framer(&config(InputMode::Normal, Some(inband)));
        let input = packets(20);

        let first = framer.try_frame(&input).unwrap();
        assert_eq!(first.consumed, 856);
        let bits = derandomised(&framer, &first.bits);
        assert_eq!(get_bits_msb(&bits[32..48]), 7032 - 80 - 104);
        let block = &bits[7032 - 104..7032];
        assert_eq!(&block[..2], &[0, 1]);
        assert_eq!(get_bits_msb(&block[67..94]), 0x123_4567);

        let second = framer.try_frame(&input[first.consumed..]).unwrap();
        assert_eq!(second.consumed, 869);
        assert_eq!(framer.state().fec_block, 0);
    }

    #[test]
    fn lost_sync_is_counted() {
        let mut framer = new_framer(&config(InputMode::Normal, None));
        let mut input = packets(10);
        input[188] = 0x00;
        let frame = framer.try_frame(&input);
        assert!(frame.is_some());
        assert_eq!(framer.state().sync_errors, 1);
    }
}
