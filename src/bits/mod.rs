pub mod reader;
pub use reader::{read_i32_be_at, read_synchsafe_u32, BitReader};
