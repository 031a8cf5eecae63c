pub mod digit;
pub mod filter;

pub use digit::{parse_digit, DigitClassifier, UnicodeDigits};
pub use filter::{
    filter_phone_characters, filter_phone_characters_with, parse_phone_character, DialString,
};
