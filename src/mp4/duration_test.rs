#[cfg(test)]
mod tests {
    use crate::mp4::duration::{duration_from_source, find_movie_header_racing, ScanOptions};
    use crate::mp4::mvhd_finder::ScanDirection;
    use crate::streams::MemorySource;
    use std::sync::Arc;

    fn make_box(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(payload.len() + 8);
        buf.extend_from_slice(&((payload.len() + 8) as u32).to_be_bytes());
        buf.extend_from_slice(name);
        buf.extend_from_slice(payload);
        buf
    }

    /// Version 0 mvhd box: version/flags, creation, modification, timescale, duration, rest zeroed
    fn make_mvhd_box(time_scale: i32, duration: i32) -> Vec<u8> {
        let mut payload = vec![0u8; 100];
        payload[12..16].copy_from_slice(&time_scale.to_be_bytes());
        payload[16..20].copy_from_slice(&duration.to_be_bytes());
        make_box(b"mvhd", &payload)
    }

    fn make_m4a(mdat_len: usize, moov_first: bool, time_scale: i32, duration: i32) -> Vec<u8> {
        let ftyp = make_box(b"ftyp", b"M4A \x00\x00\x00\x00M4A mp42isom");
        let moov = make_box(b"moov", &make_mvhd_box(time_scale, duration));
        let mdat = make_box(b"mdat", &vec![0x5Au8; mdat_len]);
        if moov_first {
            [ftyp, moov, mdat].concat()
        } else {
            [ftyp, mdat, moov].concat()
        }
    }

    #[tokio::test]
    async fn test_fast_start_layout() {
        let data = make_m4a(100_000, true, 44100, 44100 * 95 / 10);
        let source = Arc::new(MemorySource::new(data));
        let duration = duration_from_source(source, ScanOptions::with_window_size(4096))
            .await
            .unwrap();
        assert_eq!(duration, 9500);
    }

    #[tokio::test]
    async fn test_trailing_moov_found_by_backward_scan_with_few_reads() {
        let data = make_m4a(256 * 1024, false, 1000, 183_456);
        let windows = data.len() / 1024;
        let source = Arc::new(MemorySource::new(data));

        let outcome = find_movie_header_racing(Arc::clone(&source), ScanOptions::with_window_size(1024))
            .await
            .unwrap()
            .expect("movie header");

        assert_eq!(outcome.direction, ScanDirection::Backward);
        assert_eq!(outcome.duration_ms(), 183_456);
        assert!(
            source.total_reads() < 8,
            "{} reads for {} windows",
            source.total_reads(),
            windows
        );
    }

    #[tokio::test]
    async fn test_implausible_match_is_passed_over() {
        let mut data = vec![0u8; 64 * 1024];
        // mvhd signature followed by timescale = 0
        data[100..104].copy_from_slice(b"mvhd");
        data[120..124].copy_from_slice(&500i32.to_be_bytes());
        let plausible = make_mvhd_box(600, 90_000);
        data[40_000..40_000 + plausible.len()].copy_from_slice(&plausible);

        let source = Arc::new(MemorySource::new(data));
        let duration = duration_from_source(source, ScanOptions::with_window_size(1024))
            .await
            .unwrap();
        assert_eq!(duration, 150_000);
    }

    #[tokio::test]
    async fn test_implausible_match_near_end_does_not_stop_backward_scan() {
        let mut data = make_m4a(8 * 1024, true, 48000, 96_000);
        let mut bogus = vec![0u8; 32];
        bogus[..4].copy_from_slice(b"mvhd");
        bogus[20..24].copy_from_slice(&(-1i32).to_be_bytes());
        data.extend_from_slice(&bogus);

        let source = Arc::new(MemorySource::new(data));
        let duration = duration_from_source(source, ScanOptions::with_window_size(512))
            .await
            .unwrap();
        assert_eq!(duration, 2000);
    }

    #[tokio::test]
    async fn test_no_movie_header_is_zero() {
        let data = make_box(b"mdat", &vec![0u8; 10_000]);
        let source = Arc::new(MemorySource::new(data));
        let duration = duration_from_source(source, ScanOptions::with_window_size(256))
            .await
            .unwrap();
        assert_eq!(duration, 0);
    }

    #[tokio::test]
    async fn test_empty_source_is_zero() {
        let source = Arc::new(MemorySource::new(Vec::new()));
        let duration = duration_from_source(source, ScanOptions::default())
            .await
            .unwrap();
        assert_eq!(duration, 0);
    }

    #[tokio::test]
    async fn test_repeated_calls_agree() {
        let source = Arc::new(MemorySource::new(make_m4a(50_000, false, 22050, 1_234_567)));
        let first = duration_from_source(Arc::clone(&source), ScanOptions::with_window_size(2048))
            .await
            .unwrap();
        let second = duration_from_source(source, ScanOptions::with_window_size(2048))
            .await
            .unwrap();
        assert_eq!(first, 55_989);
        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_multi_threaded_race_agrees() {
        let data = make_m4a(200_000, false, 1000, 42_000);
        let source = Arc::new(MemorySource::new(data));
        let duration = duration_from_source(source, ScanOptions::with_window_size(1024))
            .await
            .unwrap();
        assert_eq!(duration, 42_000);
    }

    #[test]
    fn test_window_size_has_a_floor() {
        assert_eq!(ScanOptions::with_window_size(0).window_size, 16);
        assert_eq!(ScanOptions::default().window_size, 32 * 1024);
    }
}
