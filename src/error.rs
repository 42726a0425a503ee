use std::error::Error;
use std::fmt::Display;

#[derive(Debug)]
pub enum CodecError {
    /// A character in decoder input is outside the 32-symbol alphabet
    InvalidSymbol(char),
    /// The requested text encoding label is not recognized
    UnsupportedEncoding(String),
}
impl Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string: String = match &self {
            CodecError::InvalidSymbol(symbol) => {
                format!("character {symbol:?} is not in the alphabet")
            }
            CodecError::UnsupportedEncoding(label) => {
                format!("unknown text encoding {label:?}")
            }
        };
        write!(f, "{string}")
    }
}
impl Error for CodecError {}
