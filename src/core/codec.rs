use crate::domain::model::{Envelope, Payload};
use crate::utils::error::{ProcessorError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// base64 → gzip → UTF-8 → JSON
///
/// 接受串接的多個 gzip member，解壓後依序接起來
pub fn decode_envelope(data: &str) -> Result<Envelope> {
    let compressed = STANDARD.decode(data.trim())?;

    let mut decoder = MultiGzDecoder::new(compressed.as_slice());
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(ProcessorError::DecompressError)?;

    let text = String::from_utf8(raw)?;
    let envelope = serde_json::from_str(&text)?;
    Ok(envelope)
}

/// decode_envelope 的反向操作，供本機產生測試資料使用
pub fn encode_envelope(envelope: &Envelope) -> Result<String> {
    let json = serde_json::to_vec(envelope)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(STANDARD.encode(compressed))
}

/// 輸出不壓縮：結構化資料先轉 JSON 再 base64，原始字串直接 base64
pub fn encode_payload(payload: &Payload) -> Result<String> {
    match payload {
        Payload::Structured(value) => {
            let json = serde_json::to_string(value)?;
            Ok(STANDARD.encode(json.as_bytes()))
        }
        Payload::Raw(text) => Ok(STANDARD.encode(text.as_bytes())),
    }
}

pub fn decode_payload(data: &str) -> Result<String> {
    let bytes = STANDARD.decode(data.trim())?;
    Ok(String::from_utf8(bytes)?)
}
