use encoding_rs::WINDOWS_1250;

/// Encoding label written in the XML declaration of import files.
pub const OUTPUT_ENCODING: &str = "Windows-1250";

/// Encode text as Windows-1250.
///
/// Characters outside the code page become `&#NNNN;` references, which stay
/// valid inside XML text and attribute values. The flag reports whether any
/// such replacement happened.
pub fn encode_windows_1250(text: &str) -> (Vec<u8>, bool) {
    let (bytes, _, lossy) = WINDOWS_1250.encode(text);
    (bytes.into_owned(), lossy)
}

/// Rewrite all line endings to CRLF.
pub fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
