//! Constellation mapper: interleaved cell words to complex symbols.
//!
//! With rotation on, every point is rotated by a per-constellation angle and
//! the Q component of each cell is taken from the previous cell of the same
//! frame (cyclically), so a lost cell does not take both components of one
//! symbol with it.

use num_complex::{Complex64, c64};
use std::f64::consts::PI;
use std::fmt;
use tracing::debug;

use crate::config::ModulatorConfig;
use crate::error::ConfigError;
use crate::interleave::{BitInterleave, Interleaver, new_interleaver};
use crate::params::Constellation;

const QAM16_LEVELS: [f64; 4] = [3.0, 1.0, -3.0, -1.0];
const QAM64_LEVELS: [f64; 8] = [7.0, 5.0, 1.0, 3.0, -7.0, -5.0, -1.0, -3.0];
const QAM256_LEVELS: [f64; 16] = [
    15.0, 13.0, 9.0, 11.0, 1.0, 3.0, 7.0, 5.0, -15.0, -13.0, -9.0, -11.0, -1.0, -3.0, -7.0, -5.0,
];

/// Rotation angle in degrees.
pub fn rotation_angle(constellation: Constellation) -> f64 {
    match constellation {
        Constellation::Qpsk => 29.0,
        Constellation::Qam16 => 16.8,
        Constellation::Qam64 => 8.6,
        Constellation::Qam256 => 3.576334375,
    }
}

// Even bits of the cell word (counting from the MSB) select the real level,
// odd bits the imaginary one.
fn split_index(word: usize, bits: usize) -> (usize, usize) {
    let mut re = 0;
    let mut im = 0;
    for pair in (0..bits / 2).rev() {
        re = (re << 1) | ((word >> (2 * pair + 1)) & 1);
        im = (im << 1) | ((word >> (2 * pair)) & 1);
    }
    (re, im)
}

/// Unit mean energy constellation indexed by cell word.
pub fn constellation_table(constellation: Constellation, rotation: bool) -> Vec<Complex64> {
    let bits = constellation.bits_per_cell();
    let (levels, norm): (&[f64], f64) = match constellation {
        Constellation::Qpsk => (&[1.0, -1.0], 2.0f64.sqrt()),
        Constellation::Qam16 => (&QAM16_LEVELS, 10.0f64.sqrt()),
        Constellation::Qam64 => (&QAM64_LEVELS, 42.0f64.sqrt()),
        Constellation::Qam256 => (&QAM256_LEVELS, 170.0f64.sqrt()),
    };

    let mut table: Vec<Complex64> = (0..1usize << bits)
        .map(|word| {
            let (re, im) = split_index(word, bits);
            c64(levels[re] / norm, levels[im] / norm)
        })
        .collect();

    if rotation {
        let phase = Complex64::from_polar(1.0, 2.0 * PI * rotation_angle(constellation) / 360.0);
        for point in table.iter_mut() {
            *point *= phase;
        }
    }

    table
}

pub struct Modulator {
    config: ModulatorConfig,
    interleaver: Interleaver,
    table: Vec<Complex64>,
}

impl fmt::Debug for Modulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Modulator<{:?} rotation: {} - {:?}>",
            self.config.constellation, self.config.rotation, self.interleaver
        )
    }
}

pub fn new_modulator(config: &ModulatorConfig) -> Result<Modulator, ConfigError> {
    let interleaver = new_interleaver(&config.params, config.constellation)?;
    let table = constellation_table(config.constellation, config.rotation);

    debug!(
        constellation = ?config.constellation,
        rotation = config.rotation,
        cells = config.constellation.cells_per_frame(config.params.frame_size),
        "modulator ready"
    );

    Ok(Modulator {
        config: *config,
        interleaver,
        table,
    })
}

impl Modulator {
    /// Cells per FEC frame.
    pub fn cell_size(&self) -> usize {
        self.config.constellation.cells_per_frame(self.config.params.frame_size)
    }

    pub fn frame_bits(&self) -> usize {
        self.config.params.frame_bits()
    }

    /// Input bits needed to produce `cells` symbols. Only whole frames are
    /// produced, so `cells` is rounded down to a multiple of the cell size.
    pub fn input_required(&self, cells: usize) -> usize {
        (cells / self.cell_size()) * self.frame_bits()
    }

    pub fn table(&self) -> &[Complex64] {
        &self.table
    }

    /// Map one frame of cell words to symbols.
    pub fn map_cells(&self, cells: &[u8]) -> Vec<Complex64> {
        if !self.config.rotation {
            return cells.iter().map(|c| self.table[*c as usize]).collect();
        }

        let n = cells.len();
        (0..n)
            .map(|j| {
                let delayed = cells[(j + n - 1) % n];
                c64(self.table[cells[j] as usize].re, self.table[delayed as usize].im)
            })
            .collect()
    }

    /// Interleave and map one `frameSize` bit frame.
    pub fn modulate_frame(&self, frame: &[u8]) -> Vec<Complex64> {
        let mut cells = vec![0u8; self.cell_size()];
        self.interleaver.interleave(frame, &mut cells);
        self.map_cells(&cells)
    }

    /// Modulate as many whole frames of `input` as fit in `cells` symbols.
    /// Returns the bits consumed and the symbols.
    pub fn work(&self, input: &[u8], cells: usize) -> (usize, Vec<Complex64>) {
        let frame_bits = self.frame_bits();
        let frames = (cells / self.cell_size()).min(input.len() / frame_bits);

        let mut output = Vec::with_capacity(frames * self.cell_size());
        for frame in input.chunks_exact(frame_bits).take(frames) {
            output.extend(self.modulate_frame(frame));
        }

        (frames * frame_bits, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CodeParameters, CodeRate, FrameSize};

    const ALL: [Constellation; 4] = [
        Constellation::Qpsk,
        Constellation::Qam16,
        Constellation::Qam64,
        Constellation::Qam256,
    ];

    fn mean_energy(table: &[Complex64]) -> f64 {
        table.iter().map(|p| p.norm_sqr()).sum::<f64>() / table.len() as f64
    }

    fn modulator(constellation: Constellation, rotation: bool) -> Modulator {
        let config = ModulatorConfig {
            params: CodeParameters::lookup(FrameSize::Short, CodeRate::R2_3).unwrap(),
            constellation,
            rotation,
        };
        new_modulator(&config).unwrap()
    }

    #[test]
    fn tables_have_unit_energy() {
        for c in ALL {
            for rotation in [false, true] {
                let table = constellation_table(c, rotation);
                assert_eq!(table.len(), 1 << c.bits_per_cell());
                assert!((mean_energy(&table) - 1.0).abs() < 1e-9, "{:?} {}", c, rotation);
            }
        }
    }

    #[test]
    fn gray_labels_match_standard() {
        let s = 1.0 / 2.0f64.sqrt();
        let qpsk = constellation_table(Constellation::Qpsk, false);
        assert_eq!(qpsk, vec![c64(s, s), c64(s, -s), c64(-s, s), c64(-s, -s)]);

        let n = 10.0f64.sqrt();
        let qam16 = constellation_table(Constellation::Qam16, false);
        assert_eq!(qam16[0], c64(3.0 / n, 3.0 / n));
        assert_eq!(qam16[0b1010], c64(-1.0 / n, 3.0 / n));
        assert_eq!(qam16[0b0101], c64(3.0 / n, -1.0 / n));

        let n = 170.0f64.sqrt();
        let qam256 = constellation_table(Constellation::Qam256, false);
        // real bits 1,1,1,1 -> level index 15, imag bits 0,0,0,0 -> index 0
        assert_eq!(qam256[0b1010_1010], c64(-5.0 / n, 15.0 / n));
    }

    #[test]
    fn rotation_turns_points() {
        let plain = constellation_table(Constellation::Qam64, false);
        let rotated = constellation_table(Constellation::Qam64, true);
        let angle = 8.6f64.to_radians();
        for (p, r) in plain.iter().zip(&rotated) {
            assert!((r.arg() - p.arg() - angle).sin().abs() < 1e-9);
            assert!((r.norm() - p.norm()).abs() < 1e-12);
        }
    }

    #[test]
    fn q_branch_is_delayed_by_one_cell() {
        let m = modulator(Constellation::Qam16, true);
        let cells: Vec<u8> = (0..m.cell_size()).map(|i| (i * 7 % 16) as u8).collect();
        let symbols = m.map_cells(&cells);
        let n = cells.len();
        for j in 0..n {
            assert_eq!(symbols[j].re, m.table()[cells[j] as usize].re);
            assert_eq!(symbols[j].im, m.table()[cells[(j + n - 1) % n] as usize].im);
        }
    }

    #[test]
    fn no_delay_without_rotation() {
        let m = modulator(Constellation::Qpsk, false);
        let cells = vec![0u8, 3, 1, 2];
        let symbols = m.map_cells(&cells);
        for (s, c) in symbols.iter().zip(&cells) {
            assert_eq!(*s, m.table()[*c as usize]);
        }
    }

    #[test]
    fn work_produces_whole_frames() {
        let m = modulator(Constellation::Qam64, false);
        assert_eq!(m.cell_size(), 2700);
        assert_eq!(m.input_required(5400), 32400);
        assert_eq!(m.input_required(5399), 16200);

        let input = vec![0u8; 16200 * 2 + 100];
        let (consumed, symbols) = m.work(&input, 10000);
        assert_eq!(consumed, 32400);
        assert_eq!(symbols.len(), 5400);
        assert!(symbols.iter().all(|s| *s == m.table()[0]));
    }
}
