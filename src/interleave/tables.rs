// Column twist parameters, one entry per interleaver column.

pub const TWIST16N: [usize; 8] = [0, 0, 2, 4, 4, 5, 7, 7];
pub const TWIST64N: [usize; 12] = [0, 0, 2, 2, 3, 4, 4, 5, 5, 7, 8, 9];
pub const TWIST256N: [usize; 16] = [0, 2, 2, 2, 2, 3, 7, 15, 16, 20, 22, 22, 27, 27, 28, 32];

pub const TWIST16S: [usize; 8] = [0, 0, 0, 1, 7, 20, 20, 21];
pub const TWIST64S: [usize; 12] = [0, 0, 0, 2, 2, 2, 3, 3, 3, 6, 7, 7];
pub const TWIST256S: [usize; 8] = [0, 0, 0, 1, 7, 20, 20, 21];

// Demultiplexer: input bit e of a row becomes bit mux[e] of the cell word.

pub const MUX16: [usize; 8] = [7, 1, 4, 2, 5, 3, 6, 0];
pub const MUX64: [usize; 12] = [11, 7, 3, 10, 6, 2, 9, 5, 1, 8, 4, 0];
pub const MUX256: [usize; 16] = [15, 1, 13, 3, 8, 11, 9, 5, 10, 6, 4, 7, 12, 2, 14, 0];

pub const MUX16_35: [usize; 8] = [0, 5, 1, 2, 4, 7, 3, 6];
pub const MUX16_13: [usize; 8] = [6, 0, 3, 4, 5, 2, 1, 7];
pub const MUX16_25: [usize; 8] = [7, 5, 4, 0, 3, 1, 2, 6];

pub const MUX64_35: [usize; 12] = [2, 7, 6, 9, 0, 3, 1, 8, 4, 11, 5, 10];
pub const MUX64_13: [usize; 12] = [4, 2, 0, 5, 6, 1, 3, 7, 8, 9, 10, 11];
pub const MUX64_25: [usize; 12] = [4, 0, 1, 6, 2, 3, 5, 8, 7, 10, 9, 11];

pub const MUX256_35: [usize; 16] = [2, 11, 3, 4, 0, 9, 1, 8, 10, 13, 7, 14, 6, 15, 5, 12];
pub const MUX256_23: [usize; 16] = [7, 2, 9, 0, 4, 6, 13, 3, 14, 10, 15, 5, 8, 12, 11, 1];

pub const MUX256S: [usize; 8] = [7, 3, 1, 5, 2, 6, 4, 0];
pub const MUX256S_13: [usize; 8] = [4, 0, 1, 2, 5, 3, 6, 7];
pub const MUX256S_25: [usize; 8] = [4, 0, 5, 1, 2, 3, 6, 7];
