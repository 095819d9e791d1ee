use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes as {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode a fetched body into UTF-8: BOM first, then the Content-Type
/// charset, then `chardetng` detection as the fallback.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedText, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return run_decoder(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(charset_of) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return run_decoder(bytes, encoding);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    run_decoder(bytes, detector.guess(None, true))
}

fn charset_of(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.eq_ignore_ascii_case("charset") {
            Some(value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        } else {
            None
        }
    })
}

fn run_decoder(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}
