use crate::params::FRAME_SIZE_NORMAL;

// BB scrambler, 1 + x^14 + x^15, loaded with 100101010000000
const SEED: u16 = 0x4a80;

/// Period of the 15 stage PRBS.
pub const PERIOD: usize = (1 << 15) - 1;

pub struct Randomiser {
    sequence: Vec<u8>,
}

pub fn new_randomiser() -> Randomiser {
    let mut sr = SEED;
    let mut sequence = Vec::with_capacity(FRAME_SIZE_NORMAL);

    for _ in 0..FRAME_SIZE_NORMAL {
        let b = ((sr ^ (sr >> 1)) & 1) as u8;
        sequence.push(b);
        sr >>= 1;
        if b != 0 {
            sr |= 0x4000;
        }
    }

    Randomiser { sequence }
}

impl Randomiser {
    /// XOR the sequence over `bits`, starting from the first sequence bit.
    pub fn scramble(&self, bits: &mut [u8]) {
        assert!(bits.len() <= self.sequence.len());
        for (bit, r) in bits.iter_mut().zip(&self.sequence) {
            *bit ^= r;
        }
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_from_seed() {
        // first bits shifted out of the 100101010000000 register
        let r = new_randomiser();
        assert_eq!(&r.sequence()[..16], &[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn sequence_is_periodic() {
        let r = new_randomiser();
        let seq = r.sequence();
        for i in 0..(seq.len() - PERIOD) {
            assert_eq!(seq[i], seq[i + PERIOD]);
        }
    }

    #[test]
    fn scrambling_twice_is_identity() {
        let r = new_randomiser();
        let plain: Vec<u8> = (0..7032).map(|i| ((i * 7 + i / 3) % 2) as u8).collect();
        let mut bits = plain.clone();
        r.scramble(&mut bits);
        assert_ne!(bits, plain);
        r.scramble(&mut bits);
        assert_eq!(bits, plain);
    }
}
