//! Digest Module
//!
//! Computes message ids from message content.

/// Compute the fingerprint of the given string
///
/// The output is a 64 bit number: two Jenkins hash32 passes over the UTF-8
/// bytes, the first one in the high word.
pub fn fingerprint(s: &str) -> u64 {
    let utf8 = s.as_bytes();
    let mut hi = hash32(utf8, 0);
    let mut lo = hash32(utf8, 102072);

    if hi == 0 && (lo == 0 || lo == 1) {
        hi ^= 0x130f9bef;
        lo ^= 0x94a0a928;
    }

    ((hi as u64) << 32) | (lo as u64)
}

/// Compute the message id of a canonical message string.
///
/// The meaning participates in the id, the description does not. The result
/// is a 63 bit number rendered in decimal.
pub fn compute_msg_id(msg: &str, meaning: &str) -> String {
    let mut msg_fingerprint = fingerprint(msg);

    if !meaning.is_empty() {
        // Rotate the 64-bit message fingerprint one bit to the left and then add the meaning
        // fingerprint.
        msg_fingerprint = msg_fingerprint.rotate_left(1);
        msg_fingerprint = msg_fingerprint.wrapping_add(fingerprint(meaning));
    }

    (msg_fingerprint & 0x7FFF_FFFF_FFFF_FFFF).to_string()
}

fn hash32(bytes: &[u8], mut c: u32) -> u32 {
    let mut a = 0x9e3779b9u32;
    let mut b = 0x9e3779b9u32;
    let length = bytes.len();
    let mut index = 0;

    while index + 12 <= length {
        a = a.wrapping_add(read_u32_le(bytes, index));
        b = b.wrapping_add(read_u32_le(bytes, index + 4));
        c = c.wrapping_add(read_u32_le(bytes, index + 8));
        let (na, nb, nc) = mix(a, b, c);
        a = na;
        b = nb;
        c = nc;
        index += 12;
    }

    let remainder = length - index;
    // the first byte of c is reserved for the length
    c = c.wrapping_add(length as u32);

    if remainder >= 4 {
        a = a.wrapping_add(read_u32_le(bytes, index));
        index += 4;

        if remainder >= 8 {
            b = b.wrapping_add(read_u32_le(bytes, index));
            index += 4;

            // Partial 32-bit word for c
            if remainder >= 9 {
                c = c.wrapping_add((read_u8(bytes, index) as u32) << 8);
                index += 1;
            }
            if remainder >= 10 {
                c = c.wrapping_add((read_u8(bytes, index) as u32) << 16);
                index += 1;
            }
            if remainder == 11 {
                c = c.wrapping_add((read_u8(bytes, index) as u32) << 24);
            }
        } else {
            // Partial 32-bit word for b
            if remainder >= 5 {
                b = b.wrapping_add(read_u8(bytes, index) as u32);
                index += 1;
            }
            if remainder >= 6 {
                b = b.wrapping_add((read_u8(bytes, index) as u32) << 8);
                index += 1;
            }
            if remainder == 7 {
                b = b.wrapping_add((read_u8(bytes, index) as u32) << 16);
            }
        }
    } else {
        // Partial 32-bit word for a
        if remainder >= 1 {
            a = a.wrapping_add(read_u8(bytes, index) as u32);
            index += 1;
        }
        if remainder >= 2 {
            a = a.wrapping_add((read_u8(bytes, index) as u32) << 8);
            index += 1;
        }
        if remainder == 3 {
            a = a.wrapping_add((read_u8(bytes, index) as u32) << 16);
        }
    }

    mix(a, b, c).2
}

fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    a = a.wrapping_sub(b);
    a = a.wrapping_sub(c);
    a ^= c >> 13;
    b = b.wrapping_sub(c);
    b = b.wrapping_sub(a);
    b ^= a << 8;
    c = c.wrapping_sub(a);
    c = c.wrapping_sub(b);
    c ^= b >> 13;
    a = a.wrapping_sub(b);
    a = a.wrapping_sub(c);
    a ^= c >> 12;
    b = b.wrapping_sub(c);
    b = b.wrapping_sub(a);
    b ^= a << 16;
    c = c.wrapping_sub(a);
    c = c.wrapping_sub(b);
    c ^= b >> 5;
    a = a.wrapping_sub(b);
    a = a.wrapping_sub(c);
    a ^= c >> 3;
    b = b.wrapping_sub(c);
    b = b.wrapping_sub(a);
    b ^= a << 10;
    c = c.wrapping_sub(a);
    c = c.wrapping_sub(b);
    c ^= b >> 15;
    (a, b, c)
}

fn read_u32_le(bytes: &[u8], index: usize) -> u32 {
    if index + 4 <= bytes.len() {
        u32::from_le_bytes([bytes[index], bytes[index + 1], bytes[index + 2], bytes[index + 3]])
    } else {
        0
    }
}

fn read_u8(bytes: &[u8], index: usize) -> u8 {
    bytes.get(index).copied().unwrap_or(0)
}
