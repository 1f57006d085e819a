//! Big-endian encoding of the non-bit primitives and of field tables.
//!
//! Shared by the method-argument and content-header codecs, which differ only
//! in how they treat bits.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read};

use crate::error::{WireError, WireResult};
use crate::value::{FieldTable, FieldValue};

pub(crate) fn write_shortstr(w: &mut Vec<u8>, s: &str) -> WireResult<()> {
    let len = u8::try_from(s.len()).map_err(|_| WireError::ShortstrTooLong { len: s.len() })?;
    w.write_u8(len)?;
    w.extend_from_slice(s.as_bytes());
    Ok(())
}

pub(crate) fn write_longstr(w: &mut Vec<u8>, bytes: &[u8]) -> WireResult<()> {
    w.write_u32::<BigEndian>(length_prefix(bytes.len())?)?;
    w.extend_from_slice(bytes);
    Ok(())
}

pub(crate) fn write_table(w: &mut Vec<u8>, table: &FieldTable) -> WireResult<()> {
    let mut body = Vec::new();
    for (key, value) in table {
        write_shortstr(&mut body, key)?;
        write_field_value(&mut body, value)?;
    }
    write_longstr(w, &body)
}

fn write_field_value(w: &mut Vec<u8>, value: &FieldValue) -> WireResult<()> {
    w.write_u8(value.tag())?;
    match value {
        FieldValue::LongString(bytes) => write_longstr(w, bytes)?,
        FieldValue::Int(v) => w.write_i32::<BigEndian>(*v)?,
        FieldValue::LongLong(v) => w.write_i64::<BigEndian>(*v)?,
        FieldValue::Byte(v) => w.write_i8(*v)?,
        FieldValue::Short(v) => w.write_i16::<BigEndian>(*v)?,
        FieldValue::Bool(v) => w.write_u8(u8::from(*v))?,
        FieldValue::Double(v) => w.write_f64::<BigEndian>(*v)?,
        FieldValue::Timestamp(v) => w.write_u64::<BigEndian>(*v)?,
        FieldValue::Table(table) => write_table(w, table)?,
        FieldValue::Array(items) => {
            let mut body = Vec::new();
            for item in items {
                write_field_value(&mut body, item)?;
            }
            write_longstr(w, &body)?;
        }
        FieldValue::Void => {}
    }
    Ok(())
}

fn length_prefix(len: usize) -> WireResult<u32> {
    u32::try_from(len).map_err(|_| {
        WireError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{len} bytes exceed the 32-bit length prefix"),
        ))
    })
}

pub(crate) fn read_shortstr(r: &mut Cursor<&[u8]>) -> WireResult<String> {
    let len = r.read_u8()?;
    let bytes = read_exact(r, usize::from(len))?;
    Ok(String::from_utf8(bytes)?)
}

pub(crate) fn read_longstr(r: &mut Cursor<&[u8]>) -> WireResult<Vec<u8>> {
    let len = r.read_u32::<BigEndian>()?;
    read_exact(r, len as usize)
}

pub(crate) fn read_table(r: &mut Cursor<&[u8]>) -> WireResult<FieldTable> {
    let body = read_longstr(r)?;
    let mut inner = Cursor::new(body.as_slice());
    let mut table = FieldTable::new();

    while (inner.position() as usize) < body.len() {
        let key = read_shortstr(&mut inner)?;
        let value = read_field_value(&mut inner)?;
        table.insert(key, value);
    }

    Ok(table)
}

fn read_field_value(r: &mut Cursor<&[u8]>) -> WireResult<FieldValue> {
    let tag = r.read_u8()?;
    let value = match tag {
        b'S' => FieldValue::LongString(read_longstr(r)?),
        b'I' => FieldValue::Int(r.read_i32::<BigEndian>()?),
        b'l' => FieldValue::LongLong(r.read_i64::<BigEndian>()?),
        b'b' => FieldValue::Byte(r.read_i8()?),
        b's' => FieldValue::Short(r.read_i16::<BigEndian>()?),
        b't' => FieldValue::Bool(r.read_u8()? != 0),
        b'd' => FieldValue::Double(r.read_f64::<BigEndian>()?),
        b'T' => FieldValue::Timestamp(r.read_u64::<BigEndian>()?),
        b'F' => FieldValue::Table(read_table(r)?),
        b'A' => {
            let body = read_longstr(r)?;
            let mut inner = Cursor::new(body.as_slice());
            let mut items = Vec::new();
            while (inner.position() as usize) < body.len() {
                items.push(read_field_value(&mut inner)?);
            }
            FieldValue::Array(items)
        }
        b'V' => FieldValue::Void,
        tag => return Err(WireError::InvalidFieldTag { tag }),
    };
    Ok(value)
}

fn read_exact(r: &mut Cursor<&[u8]>, len: usize) -> WireResult<Vec<u8>> {
    let remaining = r.get_ref().len().saturating_sub(r.position() as usize);
    if len > remaining {
        return Err(WireError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("need {len} bytes, {remaining} remaining"),
        )));
    }
    let mut bytes = vec![0; len];
    r.read_exact(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "encoding/encoding_tests.rs"]
mod encoding_tests;
