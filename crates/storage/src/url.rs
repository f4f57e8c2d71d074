// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compact, URL-safe encoding of a dashboard and its application states.
//!
//! Pipeline: JSON, then zstd, then unpadded base64url.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dxw_dashboard::DashboardGroup;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

const ZSTD_LEVEL: i32 = 19;

/// Upper bound on the decompressed payload, against hostile links.
const MAX_DECODED_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("corrupted payload: {0}")]
    Compression(#[from] std::io::Error),
    #[error("payload exceeds {MAX_DECODED_BYTES} bytes")]
    TooLarge,
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a shared link carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedDashboard {
    pub layout: Vec<DashboardGroup>,
    /// Application state by item id.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub states: IndexMap<String, serde_json::Value>,
}

pub fn encode(shared: &SharedDashboard) -> Result<String, CodecError> {
    let json = serde_json::to_vec(shared)?;
    let compressed = zstd::encode_all(json.as_slice(), ZSTD_LEVEL)?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

pub fn decode(encoded: &str) -> Result<SharedDashboard, CodecError> {
    let compressed = URL_SAFE_NO_PAD.decode(encoded.trim())?;
    let decoder = zstd::stream::read::Decoder::new(compressed.as_slice())?;
    let mut json = Vec::new();
    decoder.take(MAX_DECODED_BYTES + 1).read_to_end(&mut json)?;
    if json.len() as u64 > MAX_DECODED_BYTES {
        return Err(CodecError::TooLarge);
    }
    Ok(serde_json::from_slice(&json)?)
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
