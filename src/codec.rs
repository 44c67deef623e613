//! Whole-buffer compression entry points.
//!
//! These tie the frequency table, header and payload together. Input is
//! always fully buffered: the table has to be known before the first code is
//! written, and decoding needs the table before the first bit is read.

use std::io::{Read, Write};

use crate::code::CodeTable;
use crate::error::Result;
use crate::format;
use crate::frequency::FrequencyTable;
use crate::huffman::{HuffmanDecoder, HuffmanEncoder};
use crate::tree::HuffmanTree;

/// Compress `data` into a self-describing artifact.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let table = FrequencyTable::from_bytes(data);
    let encoder = HuffmanEncoder::new(&table);

    let mut out = Vec::new();
    format::write_header(&table, &mut out);
    let header = out.len();
    out.extend_from_slice(&encoder.encode(data)?);

    tracing::debug!(
        input = data.len(),
        symbols = table.len(),
        header,
        payload = out.len() - header,
        "compressed"
    );
    Ok(out)
}

/// Compress `data` and write the artifact to `writer`.
pub fn compress_to<W: Write>(data: &[u8], mut writer: W) -> Result<()> {
    writer.write_all(&compress(data)?)?;
    writer.flush()?;
    Ok(())
}

/// Decompress an artifact produced by [`compress`].
///
/// Trailing bits after the last symbol are ignored.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let (table, payload) = format::read_header(data)?;
    let out = HuffmanDecoder::new(&table).decode(payload)?;
    tracing::debug!(
        input = data.len(),
        symbols = table.len(),
        output = out.len(),
        "decompressed"
    );
    Ok(out)
}

/// Read an entire artifact from `reader` and decompress it.
pub fn decompress_from<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decompress(&data)
}

/// What an artifact contains, derived from its header alone.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Decoded frequency table.
    pub table: FrequencyTable,
    /// Tree rebuilt from the table.
    pub tree: HuffmanTree,
    /// Codes derived from the tree.
    pub codes: CodeTable,
    /// Size of the header in bytes.
    pub header_bytes: usize,
    /// Size of the packed payload in bytes.
    pub payload_bytes: usize,
}

impl Summary {
    /// Bits the payload must hold to decode every symbol.
    pub fn required_bits(&self) -> u64 {
        self.table
            .iter()
            .filter_map(|(s, count)| {
                let len = self.codes.get(s)?.len() as u64;
                Some(count.saturating_mul(len))
            })
            .fold(0u64, u64::saturating_add)
    }

    /// True if the payload holds at least [`required_bits`](Self::required_bits).
    pub fn payload_complete(&self) -> bool {
        (self.payload_bytes as u64).saturating_mul(8) >= self.required_bits()
    }
}

/// Parse an artifact's header and describe it without decoding the payload.
pub fn inspect(data: &[u8]) -> Result<Summary> {
    let (table, payload) = format::read_header(data)?;
    let encoder = HuffmanEncoder::new(&table);
    Ok(Summary {
        header_bytes: data.len() - payload.len(),
        payload_bytes: payload.len(),
        tree: encoder.tree().clone(),
        codes: encoder.codes().clone(),
        table,
    })
}
