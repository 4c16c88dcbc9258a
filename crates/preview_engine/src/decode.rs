use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not valid {encoding} text ({byte_len} bytes)")]
    NotText {
        encoding: &'static str,
        byte_len: usize,
    },
    #[error("payload decodes as {encoding} but contains control characters ({byte_len} bytes)")]
    ControlCharacters {
        encoding: &'static str,
        byte_len: usize,
    },
}

/// Decode a response payload as text using: BOM -> Content-Type charset -> UTF-8.
///
/// Decoding is strict: any malformed sequence rejects the whole payload, and so
/// does any C0 control character other than common whitespace and escape. The
/// latter also rejects binary labelled with a single-byte charset such as
/// `iso-8859-1`, which would otherwise decode.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding, bytes.len());
    }

    let encoding = content_type
        .and_then(extract_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    decode_with(bytes, encoding, bytes.len())
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(&['"', '\''][..]).to_string())
        })
        .next()
}

fn decode_with(
    bytes: &[u8],
    encoding: &'static Encoding,
    byte_len: usize,
) -> Result<String, DecodeError> {
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(DecodeError::NotText {
            encoding: encoding.name(),
            byte_len,
        })?;
    if text.chars().any(is_binary_control) {
        return Err(DecodeError::ControlCharacters {
            encoding: encoding.name(),
            byte_len,
        });
    }
    Ok(text.into_owned())
}

fn is_binary_control(c: char) -> bool {
    c < ' ' && !matches!(c, '\t' | '\n' | '\r' | '\x0c' | '\x1b')
}

#[cfg(test)]
mod tests {
    use super::{decode_body, extract_charset, DecodeError};

    #[test]
    fn plain_utf8_decodes() {
        assert_eq!(decode_body(b"Hello", None).unwrap(), "Hello");
    }

    #[test]
    fn empty_payload_is_empty_text() {
        assert_eq!(decode_body(b"", Some("text/plain")).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_body(&[0xff, 0xfe, 0xfd, 0x00, 0x80], None).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NotText {
                encoding: "UTF-8",
                byte_len: 5
            }
        );
    }

    #[test]
    fn control_only_payload_is_rejected() {
        let err = decode_body(&[0u8; 37], Some("application/octet-stream")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ControlCharacters {
                encoding: "UTF-8",
                byte_len: 37
            }
        );
    }

    #[test]
    fn binary_labelled_single_byte_charset_is_rejected() {
        let png_header = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
        assert!(decode_body(png_header, Some("image/png; charset=iso-8859-1")).is_err());
    }

    #[test]
    fn whitespace_and_escape_controls_are_text() {
        let text = "a\tb\r\nc\x0c\x1b[1mbold";
        assert_eq!(decode_body(text.as_bytes(), None).unwrap(), text);
    }

    #[test]
    fn bom_is_stripped() {
        assert_eq!(decode_body(b"\xEF\xBB\xBFhi", None).unwrap(), "hi");
    }

    #[test]
    fn charset_from_content_type_is_used() {
        // 0xE9 is 'é' in windows-1252 but malformed as UTF-8.
        let bytes = b"caf\xE9";
        assert!(decode_body(bytes, Some("text/html")).is_err());
        assert_eq!(
            decode_body(bytes, Some("text/html; charset=\"ISO-8859-1\"")).unwrap(),
            "café"
        );
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        assert_eq!(
            decode_body("ü".as_bytes(), Some("text/plain; charset=klingon")).unwrap(),
            "ü"
        );
    }

    #[test]
    fn charset_parameter_is_case_insensitive() {
        assert_eq!(
            extract_charset("text/html; Charset=utf-8").as_deref(),
            Some("utf-8")
        );
        assert_eq!(extract_charset("text/html"), None);
    }
}
