//! Bounds-checked little-endian reads and minimal-width id helpers.

use crate::error::{RTreeCompressError, Result};

/// The smallest width in {1, 2, 4} able to represent `id`.
pub(crate) fn id_width(id: u32) -> u8 {
    if id <= 0xff {
        1
    } else if id <= 0xffff {
        2
    } else {
        4
    }
}

pub(crate) fn write_id(dst: &mut Vec<u8>, id: u32, width: u8) {
    match width {
        1 => dst.push(id as u8),
        2 => dst.extend_from_slice(&(id as u16).to_le_bytes()),
        _ => dst.extend_from_slice(&id.to_le_bytes()),
    }
}

fn read_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(RTreeCompressError::UnexpectedEof {
            offset,
            len: data.len(),
        })
}

pub(crate) fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    Ok(read_slice(data, offset, 1)?[0])
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let bytes = read_slice(data, offset, 4)?;
    Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
}

pub(crate) fn read_f64(data: &[u8], offset: usize) -> Result<f64> {
    let bytes = read_slice(data, offset, 8)?;
    Ok(f64::from_le_bytes(bytes.try_into().unwrap()))
}

/// Read one payload id of the given width.
pub(crate) fn read_id(data: &[u8], offset: usize, width: u8) -> Result<u32> {
    match width {
        1 => Ok(read_u8(data, offset)? as u32),
        2 => {
            let bytes = read_slice(data, offset, 2)?;
            Ok(u16::from_le_bytes(bytes.try_into().unwrap()) as u32)
        }
        4 => read_u32(data, offset),
        _ => Err(RTreeCompressError::InvalidIdWidth(width)),
    }
}
