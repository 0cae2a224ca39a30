pub mod duration;
pub use duration::{
    duration_from_source, find_movie_header_racing, m4a_duration, ScanOptions, ScanOutcome,
};
pub mod mvhd;
pub use mvhd::{MovieHeaderAtom, MVHD_SIGNATURE};
pub mod mvhd_finder;
pub use mvhd_finder::{find_movie_header, MovieHeaderMatch, ScanCancel, ScanDirection};

mod duration_test;
