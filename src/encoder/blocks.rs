/// Codeword block splitting, per-block Reed-Solomon coding, and interleaving
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables;
use crate::models::{ECLevel, Version};

/// One error correction block: data codewords plus computed EC codewords.
#[derive(Debug, Clone)]
pub struct CodewordBlock {
    /// Data codewords assigned to this block.
    pub data: Vec<u8>,
    /// Reed-Solomon remainder codewords for this block.
    pub ecc: Vec<u8>,
}

/// Split padded data codewords into blocks per the version/level block
/// structure and compute each block's EC codewords.
///
/// Some version/level combinations use two block sizes: the first
/// `num_blocks - (data_len % num_blocks)` blocks are one codeword shorter.
pub fn split_into_blocks(data: &[u8], version: Version, level: ECLevel) -> Vec<CodewordBlock> {
    let info = tables::ec_block_info(version, level);
    debug_assert_eq!(data.len(), tables::data_codewords(version, level));

    let short_len = data.len() / info.num_blocks;
    let num_long = data.len() % info.num_blocks;
    let rs = ReedSolomonEncoder::new(info.ecc_per_block);

    let mut blocks = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for i in 0..info.num_blocks {
        let len = if i < info.num_blocks - num_long {
            short_len
        } else {
            short_len + 1
        };
        let block_data = data[offset..offset + len].to_vec();
        offset += len;
        let ecc = rs.remainder(&block_data);
        blocks.push(CodewordBlock {
            data: block_data,
            ecc,
        });
    }
    debug_assert_eq!(offset, data.len());
    blocks
}

/// Interleave the blocks into the final codeword sequence: data codeword i
/// of every block in block order, shorter blocks skipped once exhausted,
/// then all EC codewords the same way.
pub fn interleave(blocks: &[CodewordBlock]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let mut result = Vec::with_capacity(total);

    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for i in 0..max_data {
        for block in blocks {
            if let Some(&cw) = block.data.get(i) {
                result.push(cw);
            }
        }
    }

    let max_ecc = blocks.iter().map(|b| b.ecc.len()).max().unwrap_or(0);
    for i in 0..max_ecc {
        for block in blocks {
            if let Some(&cw) = block.ecc.get(i) {
                result.push(cw);
            }
        }
    }

    result
}
