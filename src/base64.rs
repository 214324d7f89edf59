//! Standard base64 (RFC 4648, `=` padded) used to render binary values.

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: char = '=';

/// Appends the base64 form of `bytes` to `out`.
pub(crate) fn encode_into(out: &mut String, bytes: &[u8]) {
    out.reserve((bytes.len() + 2) / 3 * 4);

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let n = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        push_sextets(out, n, 4);
    }

    match *chunks.remainder() {
        [o1] => {
            push_sextets(out, u32::from(o1) << 16, 2);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            push_sextets(out, (u32::from(o1) << 16) | (u32::from(o2) << 8), 3);
            out.push(PAD);
        }
        _ => {}
    }
}

// Writes the top `count` sextets of a 24-bit group.
fn push_sextets(out: &mut String, group: u32, count: usize) {
    for i in 0..count {
        let index = (group >> (18 - 6 * i)) & 0b11_1111;
        out.push(char::from(ALPHABET[index as usize]));
    }
}
