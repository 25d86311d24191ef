use dvbt2ll::bbframe::header::{BbHeader, INBAND_TS_RATE_OFFSET, INBAND_TYPE_B_BITS};
use dvbt2ll::bbframe::new_framer;
use dvbt2ll::config::Dvbt2Config;
use dvbt2ll::encode::{bits_to_bytes, get_bits_msb, new_crc8, new_randomiser};
use dvbt2ll::ldpc::new_ldpc_encoder;
use dvbt2ll::modulate::new_modulator;
use dvbt2ll::new_transmitter;
use dvbt2ll::params::{CodeRate, Constellation, FrameSize, InputMode};

fn packets(n: usize) -> Vec<u8> {
    let mut stream = Vec::with_capacity(n * 188);
    for p in 0..n {
        stream.push(0x47);
        stream.extend((1..188).map(|i| ((p * 31 + i * 7) % 256) as u8));
    }
    stream
}

fn derandomise(bits: &[u8], kbch: usize) -> Vec<u8> {
    let mut bits = bits.to_vec();
    new_randomiser().scramble(&mut bits[..kbch]);
    bits
}

#[test]
fn normal_half_rate_qpsk_frame() {
    let config = Dvbt2Config::default();
    let (framer_config, modulator_config) = config.validate().unwrap();
    let params = framer_config.params;
    let mut framer = new_framer(&framer_config);

    // 4016 bytes fill the data field of one 32208 bit BBFRAME
    let input = packets(30);
    assert_eq!(framer.input_required(1), 4016);
    let frame = framer.try_frame(&input).unwrap();
    assert_eq!(frame.consumed, 4016);
    assert_eq!(frame.bits.len(), params.nbch);

    let plain = derandomise(&frame.bits, params.kbch);
    let header: [u8; 10] = bits_to_bytes(&plain[..80]).try_into().unwrap();
    assert_eq!(&plain[..4], &[1, 1, 1, 1]);
    let (parsed, valid) = BbHeader::from_bytes(&header, &new_crc8(), InputMode::Normal);
    assert!(valid);
    assert_eq!(parsed.upl, 1504);
    assert_eq!(parsed.dfl, 32128);
    assert_eq!(parsed.sync, 0x47);
    assert_eq!(parsed.syncd, 0);

    let ldpc = new_ldpc_encoder(&params).unwrap();
    let coded = ldpc.encode_frame(&frame.bits);
    assert_eq!(coded.len(), 64800);
    assert_eq!(&coded[..params.nbch], &frame.bits[..]);

    let modulator = new_modulator(&modulator_config).unwrap();
    let symbols = modulator.modulate_frame(&coded);
    assert_eq!(symbols.len(), 32400);
    let energy = symbols.iter().map(|s| s.norm_sqr()).sum::<f64>() / symbols.len() as f64;
    assert!((energy - 1.0).abs() < 1e-9);
}

#[test]
fn inband_signalling_shrinks_data_field() {
    let ts_rate = 0x2d0_0000;
    let base = Dvbt2Config::default();
    let config = Dvbt2Config {
        inband: true,
        fec_blocks: 1,
        ts_rate,
        ..base
    };

    let (plain_config, _) = base.validate().unwrap();
    let (inband_config, _) = config.validate().unwrap();
    let kbch = inband_config.params.kbch;
    let input = packets(60);

    let plain = new_framer(&plain_config).try_frame(&input).unwrap();
    let mut framer = new_framer(&inband_config);
    let signalled = framer.try_frame(&input).unwrap();
    assert_eq!(plain.consumed - signalled.consumed, 13);

    let a = derandomise(&plain.bits, kbch);
    let b = derandomise(&signalled.bits, kbch);
    assert_eq!(get_bits_msb(&a[32..48]) - get_bits_msb(&b[32..48]), 104);

    let block = &b[kbch - INBAND_TYPE_B_BITS..kbch];
    assert_eq!(&block[..2], &[0, 1]);
    assert_eq!(get_bits_msb(&block[INBAND_TS_RATE_OFFSET..INBAND_TS_RATE_OFFSET + 27]), ts_rate as u64);

    // a cycle of one block signals in every frame
    let next = framer.try_frame(&input[signalled.consumed..]).unwrap();
    assert_eq!(next.consumed, signalled.consumed);
}

#[test]
fn every_configuration_produces_a_frame() {
    let rates = [
        CodeRate::R1_3,
        CodeRate::R2_5,
        CodeRate::R1_2,
        CodeRate::R3_5,
        CodeRate::R2_3,
        CodeRate::R3_4,
        CodeRate::R4_5,
        CodeRate::R5_6,
    ];
    let constellations = [
        Constellation::Qpsk,
        Constellation::Qam16,
        Constellation::Qam64,
        Constellation::Qam256,
    ];
    let input = packets(80);

    for code_rate in rates {
        for constellation in constellations {
            let config = Dvbt2Config {
                frame_size: FrameSize::Short,
                code_rate,
                constellation,
                rotation: true,
                mode: InputMode::Hem,
                ..Default::default()
            };
            let mut tx = new_transmitter(&config).unwrap();
            let needed = tx.input_required(1);
            let (consumed, symbols) = tx.process(&input, Some(1));
            assert_eq!(consumed, needed, "{} {:?}", code_rate, constellation);
            assert_eq!(symbols.len(), 16200 / constellation.bits_per_cell());
        }
    }
}

#[test]
fn sync_loss_is_survived() {
    let mut input = packets(30);
    input[188 * 3] = 0x00;
    let mut tx = new_transmitter(&Dvbt2Config::default()).unwrap();
    let (consumed, symbols) = tx.process(&input, None);
    assert_eq!(consumed, 4016);
    assert_eq!(symbols.len(), 32400);
    assert_eq!(tx.stats().sync_errors, 1);
}
