use crate::base32;
use crate::error::CodecError;
use encoding_rs::{Encoding, UTF_8};

/// Text encoding used by the label-free variants.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Encode a string using [`DEFAULT_ENCODING`].
pub fn encode(input: &str) -> String {
    let (bytes, _, _) = UTF_8.encode(input);
    base32::encode(&bytes)
}

/// Encode a string, converting it to bytes through the text encoding
/// named by `label` (a WHATWG encoding label such as `"utf-8"` or
/// `"gbk"`).
pub fn encode_with(input: &str, label: &str) -> Result<String, CodecError> {
    let (bytes, _, _) = lookup(label)?.encode(input);
    Ok(base32::encode(&bytes))
}

/// Decode alphabet text back into a string using [`DEFAULT_ENCODING`].
pub fn decode(input: &str) -> Result<String, CodecError> {
    decode_with(input, DEFAULT_ENCODING)
}

/// Decode alphabet text back into a string, interpreting the recovered
/// bytes through the text encoding named by `label`.
///
/// Both ends of a round trip must use the same label; mixing labels is
/// well-defined but yields mojibake, as with any charset mismatch.
pub fn decode_with(input: &str, label: &str) -> Result<String, CodecError> {
    let encoding = lookup(label)?;
    let bytes = base32::decode(input)?;
    // no BOM sniffing: a leading U+FEFF in the input must survive the
    // round trip as-is
    let (text, _) = encoding.decode_without_bom_handling(&bytes);
    Ok(text.into_owned())
}

fn lookup(label: &str) -> Result<&'static Encoding, CodecError> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| CodecError::UnsupportedEncoding(label.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known() {
        assert!(encode("aaa") == "mfqwc")
    }

    #[test]
    fn decode_known() {
        assert!(decode("mfqwc").unwrap() == "aaa")
    }

    #[test]
    fn empty() {
        assert!(encode("").is_empty());
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn round_trip() {
        for input in ["a", "Hello, 世界", "exit", "\u{feff}bom stays"] {
            assert!(decode(&encode(input)).unwrap() == input);
        }
    }

    #[test]
    fn round_trip_gbk() {
        let input = "哈尔滨市，世界";
        let encoded = encode_with(input, "gbk").unwrap();
        assert!(decode_with(&encoded, "gbk").unwrap() == input);
        // GBK and UTF-8 disagree on the bytes, so the texts differ too
        assert!(encoded != encode(input));
    }

    #[test]
    fn explicit_label_matches_default() {
        let input = "Hello, 世界";
        assert!(encode_with(input, "utf-8").unwrap() == encode(input));
    }

    #[test]
    fn unknown_label() {
        assert!(matches!(
            encode_with("aaa", "utf-99"),
            Err(CodecError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            decode_with("mfqwc", "utf-99"),
            Err(CodecError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn invalid_symbol_propagates() {
        assert!(matches!(
            decode("mfqw="),
            Err(CodecError::InvalidSymbol('='))
        ));
    }
}
