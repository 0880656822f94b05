// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The 32-byte fixed-position header of an `index.bin` file.

use crate::error::IndexError;

pub const MAGIC: &[u8; 4] = b"SIDX";
pub const VERSION: u32 = 1;
pub const HEADER_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub term_count: u32,
    pub document_count: u32,
    pub inverted_offset: u64,
    pub forward_offset: u64,
}

impl Header {
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(MAGIC);
        buf[4..8].copy_from_slice(&VERSION.to_le_bytes());
        buf[8..12].copy_from_slice(&self.term_count.to_le_bytes());
        buf[12..16].copy_from_slice(&self.document_count.to_le_bytes());
        buf[16..24].copy_from_slice(&self.inverted_offset.to_le_bytes());
        buf[24..32].copy_from_slice(&self.forward_offset.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, IndexError> {
        if buf.len() < HEADER_LEN {
            return Err(IndexError::Truncated("header"));
        }
        if &buf[0..4] != MAGIC {
            return Err(IndexError::BadMagic);
        }
        let version = u32::from_le_bytes(buf[4..8].try_into().unwrap());
        if version != VERSION {
            return Err(IndexError::BadMagic);
        }
        let term_count = u32::from_le_bytes(buf[8..12].try_into().unwrap());
        let document_count = u32::from_le_bytes(buf[12..16].try_into().unwrap());
        let inverted_offset = u64::from_le_bytes(buf[16..24].try_into().unwrap());
        let forward_offset = u64::from_le_bytes(buf[24..32].try_into().unwrap());
        Ok(Header {
            term_count,
            document_count,
            inverted_offset,
            forward_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let h = Header {
            term_count: 3,
            document_count: 2,
            inverted_offset: 32,
            forward_offset: 1000,
        };
        let bytes = h.to_bytes();
        assert_eq!(&bytes[0..4], MAGIC);
        let back = Header::from_bytes(&bytes).unwrap();
        assert_eq!(h, back);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = Header {
            term_count: 0,
            document_count: 0,
            inverted_offset: 32,
            forward_offset: 32,
        }
        .to_bytes();
        bytes[0] = b'X';
        assert!(matches!(Header::from_bytes(&bytes), Err(IndexError::BadMagic)));
    }

    #[test]
    fn rejects_truncated_header() {
        assert!(matches!(
            Header::from_bytes(&[0u8; 10]),
            Err(IndexError::Truncated(_))
        ));
    }
}
