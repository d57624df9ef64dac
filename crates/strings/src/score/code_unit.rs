/// How characters of a string are mapped to numeric codes when scoring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeUnit {
    /// Each UTF-8 byte is one character, valued `0..=255`.
    #[default]
    Byte,

    /// Each Unicode scalar value is one character, valued by its code point.
    Char,
}
