use crate::bits::read_synchsafe_u32;

/// Size of the ID3v2 header, and of the optional footer
pub const ID3V2_HEADER_LEN: usize = 10;
/// Fixed size of an ID3v1 tag
pub const ID3V1_TAG_LEN: usize = 128;

const ID3V2_MAGIC: &[u8; 3] = b"ID3";
const ID3V1_MAGIC: &[u8; 3] = b"TAG";
const ID3V2_FOOTER_FLAG: u8 = 0x10;

/// Number of leading bytes occupied by an ID3v2 tag (header, body and footer).
///
/// Returns 0 when `header` does not start with an ID3v2 signature or the size
/// field is not a valid synchsafe integer.
pub fn id3v2_skip_len(header: &[u8]) -> usize {
    if header.len() < ID3V2_HEADER_LEN || &header[0..3] != ID3V2_MAGIC {
        return 0;
    }
    let Some(tag_size) = read_synchsafe_u32(&header[6..10]) else {
        return 0;
    };
    let footer = if header[5] & ID3V2_FOOTER_FLAG != 0 {
        ID3V2_HEADER_LEN
    } else {
        0
    };
    ID3V2_HEADER_LEN + tag_size as usize + footer
}

/// Returns true when `data` starts with an ID3v1 `TAG` signature.
pub fn is_id3v1_tag(data: &[u8]) -> bool {
    data.len() >= 3 && &data[0..3] == ID3V1_MAGIC
}
