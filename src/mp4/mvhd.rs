use crate::bits::read_i32_be_at;

/// Movie header atom type
pub const MVHD_SIGNATURE: &[u8; 4] = b"mvhd";
/// Bytes read from the signature onwards to decode a candidate
pub const MVHD_CANDIDATE_LEN: usize = 32;

const TIME_SCALE_OFFSET: usize = 16;
const DURATION_OFFSET: usize = 20;

/// Timescale and duration of a movie header atom, relative to its type signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieHeaderAtom {
    pub time_scale: i32,
    pub duration: i32,
}

impl MovieHeaderAtom {
    /// Decode from bytes starting at the `mvhd` signature.
    pub fn decode(candidate: &[u8]) -> Option<Self> {
        if candidate.len() < MVHD_CANDIDATE_LEN || &candidate[..4] != MVHD_SIGNATURE {
            return None;
        }
        Some(MovieHeaderAtom {
            time_scale: read_i32_be_at(candidate, TIME_SCALE_OFFSET)?,
            duration: read_i32_be_at(candidate, DURATION_OFFSET)?,
        })
    }

    /// Both fields must be positive for the match to be trusted.
    pub fn is_plausible(&self) -> bool {
        self.time_scale > 0 && self.duration > 0
    }

    pub fn duration_ms(&self) -> u64 {
        if !self.is_plausible() {
            return 0;
        }
        (f64::from(self.duration) / f64::from(self.time_scale) * 1000.0).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(time_scale: i32, duration: i32) -> Vec<u8> {
        let mut data = vec![0u8; MVHD_CANDIDATE_LEN];
        data[..4].copy_from_slice(MVHD_SIGNATURE);
        data[16..20].copy_from_slice(&time_scale.to_be_bytes());
        data[20..24].copy_from_slice(&duration.to_be_bytes());
        data
    }

    #[test]
    fn test_decode_fields() {
        let atom = MovieHeaderAtom::decode(&candidate(44100, 441000)).expect("atom");
        assert_eq!(atom.time_scale, 44100);
        assert_eq!(atom.duration, 441000);
        assert!(atom.is_plausible());
        assert_eq!(atom.duration_ms(), 10_000);
    }

    #[test]
    fn test_duration_rounds_to_nearest_ms() {
        let atom = MovieHeaderAtom::decode(&candidate(600, 12347)).expect("atom");
        // 20.578333 s
        assert_eq!(atom.duration_ms(), 20578);
        let atom = MovieHeaderAtom::decode(&candidate(3, 2)).expect("atom");
        assert_eq!(atom.duration_ms(), 667);
    }

    #[test]
    fn test_non_positive_fields_are_implausible() {
        let zero_scale = MovieHeaderAtom::decode(&candidate(0, 1000)).expect("atom");
        assert!(!zero_scale.is_plausible());
        assert_eq!(zero_scale.duration_ms(), 0);

        let negative = MovieHeaderAtom::decode(&candidate(1000, -5)).expect("atom");
        assert!(!negative.is_plausible());
    }

    #[test]
    fn test_short_or_mismatched_candidate() {
        assert!(MovieHeaderAtom::decode(&candidate(1, 1)[..31]).is_none());
        let mut wrong = candidate(1, 1);
        wrong[..4].copy_from_slice(b"moov");
        assert!(MovieHeaderAtom::decode(&wrong).is_none());
    }
}
