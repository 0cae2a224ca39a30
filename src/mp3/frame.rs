use crate::bits::BitReader;
use std::io::Cursor;

/// Length of an MPEG audio frame header in bytes
pub const FRAME_HEADER_LEN: usize = 4;

/// 11-bit frame sync pattern
const FRAME_SYNC: u32 = 0x7FF;

/// MPEG audio version, from bits 3-4 of the second header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegVersion {
    V1,
    V2,
    V25,
    Reserved,
}

impl MpegVersion {
    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => MpegVersion::V25,
            2 => MpegVersion::V2,
            3 => MpegVersion::V1,
            _ => MpegVersion::Reserved,
        }
    }

    /// Row in the bit-rate and samples-per-frame tables. MPEG-2.5 shares the MPEG-2 row.
    fn family(self) -> Option<usize> {
        match self {
            MpegVersion::V1 => Some(0),
            MpegVersion::V2 | MpegVersion::V25 => Some(1),
            MpegVersion::Reserved => None,
        }
    }

    /// Row in the sample-rate table.
    fn sample_rate_row(self) -> Option<usize> {
        match self {
            MpegVersion::V1 => Some(0),
            MpegVersion::V2 => Some(1),
            MpegVersion::V25 => Some(2),
            MpegVersion::Reserved => None,
        }
    }
}

/// MPEG audio layer, from bits 1-2 of the second header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    I,
    II,
    III,
    Reserved,
}

impl Layer {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Layer::III,
            2 => Layer::II,
            3 => Layer::I,
            _ => Layer::Reserved,
        }
    }

    fn column(self) -> Option<usize> {
        match self {
            Layer::I => Some(0),
            Layer::II => Some(1),
            Layer::III => Some(2),
            Layer::Reserved => None,
        }
    }
}

/// Bit rates in kbps, indexed by [version family][layer][bit-rate index].
/// Index 0 is free format and index 15 is reserved; both map to 0.
const BIT_RATES_KBPS: [[[u32; 16]; 3]; 2] = [
    [
        [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0],
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0],
        [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0],
    ],
    [
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
    ],
];

/// Sample rates in Hz, indexed by [version][sample-rate index]; index 3 is reserved.
const SAMPLE_RATES_HZ: [[u32; 4]; 3] = [
    [44100, 48000, 32000, 0],
    [22050, 24000, 16000, 0],
    [11025, 12000, 8000, 0],
];

/// Samples per frame, indexed by [version family][layer].
const SAMPLES_PER_FRAME: [[u32; 3]; 2] = [[384, 1152, 1152], [384, 1152, 576]];

/// Returns true when `data` starts with the 11-bit MPEG frame sync.
pub fn is_frame_sync(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0xFF && (data[1] & 0xE0) == 0xE0
}

/// A decoded MPEG audio frame header.
///
/// Reserved or unsupported field values decode to zero rates and a zero
/// frame size rather than failing; see [`FrameHeader::is_playable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: Layer,
    pub bit_rate_kbps: u32,
    pub sample_rate_hz: u32,
    pub padding: bool,
    pub samples_per_frame: u32,
    pub frame_size: usize,
}

impl FrameHeader {
    /// Decode the first four bytes of `data`. Returns `None` when there is no
    /// frame sync or fewer than four bytes.
    pub fn decode(data: &[u8]) -> Option<Self> {
        let header = data.get(..FRAME_HEADER_LEN)?;
        let mut reader = BitReader::new(Cursor::new(header));
        if reader.read(11) != FRAME_SYNC {
            return None;
        }
        let version = MpegVersion::from_bits(reader.read(2));
        let layer = Layer::from_bits(reader.read(2));
        reader.skip(1); // protection
        let bit_rate_index = reader.read(4) as usize;
        let sample_rate_index = reader.read(2) as usize;
        let padding = reader.read_flag();
        if reader.acc_error().is_some() {
            return None;
        }

        let (bit_rate_kbps, samples_per_frame) = match (version.family(), layer.column()) {
            (Some(family), Some(column)) => (
                BIT_RATES_KBPS[family][column][bit_rate_index],
                SAMPLES_PER_FRAME[family][column],
            ),
            _ => (0, 0),
        };
        let sample_rate_hz = version
            .sample_rate_row()
            .map_or(0, |row| SAMPLE_RATES_HZ[row][sample_rate_index]);

        Some(FrameHeader {
            version,
            layer,
            bit_rate_kbps,
            sample_rate_hz,
            padding,
            samples_per_frame,
            frame_size: frame_size(
                layer,
                samples_per_frame,
                bit_rate_kbps,
                sample_rate_hz,
                padding,
            ),
        })
    }

    /// True when the frame can be skipped over and counted.
    pub fn is_playable(&self) -> bool {
        self.frame_size > 0 && self.samples_per_frame > 0
    }

    /// Playback time of this frame in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        f64::from(self.samples_per_frame) / f64::from(self.sample_rate_hz)
    }
}

/// Frame length in bytes including the header. Layer I pads in 4-byte slots.
fn frame_size(
    layer: Layer,
    samples: u32,
    bit_rate_kbps: u32,
    sample_rate_hz: u32,
    padding: bool,
) -> usize {
    if samples == 0 || bit_rate_kbps == 0 || sample_rate_hz == 0 {
        return 0;
    }
    let body = u64::from(samples) * u64::from(bit_rate_kbps) * 125 / u64::from(sample_rate_hz);
    let slot = match layer {
        Layer::I => 4,
        _ => 1,
    };
    (body + if padding { slot } else { 0 }) as usize
}
