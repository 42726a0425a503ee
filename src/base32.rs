use crate::error::CodecError;
use bitvec::prelude::*;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz234567";
const ALPHABET_ARRAY: [char; 32] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '2', '3', '4', '5', '6', '7',
];

const GROUP_BITS: usize = 5;
const BYTE_BITS: usize = 8;

/// Encode bytes as a string of alphabet symbols, 5 bits per symbol.
///
/// There is no pad character: a short final group is right-padded with
/// zero bits, so the output is always `ceil(bits / 5)` symbols long.
pub fn encode(bytes: &[u8]) -> String {
    let bits = bytes.view_bits::<Msb0>();
    let mut encoded = String::with_capacity((bits.len() + GROUP_BITS - 1) / GROUP_BITS);
    for chunk in bits.chunks(GROUP_BITS) {
        let mut value: u8 = chunk.load_be();
        // a short final chunk carries its bits high, zeros low
        value <<= GROUP_BITS - chunk.len();
        encoded.push(ALPHABET_ARRAY[value as usize]);
    }
    encoded
}

/// Decode a string of alphabet symbols back into bytes.
///
/// The reconstructed bitstream is cut down to a whole number of bytes;
/// the dropped tail is the zero padding added by [`encode`]. Text that
/// did not come from [`encode`] still decodes (symbol-wise) but the tail
/// bits carry no meaning.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut bits: BitVec<Msb0, u8> = BitVec::with_capacity(text.len() * GROUP_BITS);
    for symbol in text.chars() {
        let value = index_of(symbol)?;
        let value_bits: &BitSlice<Msb0, u8> = value.view_bits();
        bits.extend_from_bitslice(&value_bits[(BYTE_BITS - GROUP_BITS)..BYTE_BITS]);
    }

    bits.truncate(bits.len() / BYTE_BITS * BYTE_BITS);
    Ok(bits.into_vec())
}

fn index_of(symbol: char) -> Result<u8, CodecError> {
    match ALPHABET.find(symbol) {
        Some(index) => Ok(index as u8),
        None => Err(CodecError::InvalidSymbol(symbol)),
    }
}
