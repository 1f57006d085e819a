//! Method argument encoding.
//!
//! Arguments are written back to back in declaration order. Consecutive
//! `bit` arguments share octets, least significant bit first, eight per
//! octet. Any other argument closes the pending octet before it is written.

use amqp_spec::Primitive;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

use crate::encoding;
use crate::error::WireResult;
use crate::value::{FieldTable, Value};

/// Pending bit octet: accumulated bits and how many are used.
#[derive(Debug, Clone, Copy)]
struct BitOctet {
    bits: u8,
    used: u8,
}

/// Writes method arguments into a byte buffer.
#[derive(Debug, Default)]
pub struct MethodArgumentWriter {
    out: Vec<u8>,
    pending: Option<BitOctet>,
}

impl MethodArgumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_octet(&mut self, v: u8) -> WireResult<()> {
        self.flush_bits();
        self.out.write_u8(v)?;
        Ok(())
    }

    pub fn write_short(&mut self, v: u16) -> WireResult<()> {
        self.flush_bits();
        self.out.write_u16::<BigEndian>(v)?;
        Ok(())
    }

    pub fn write_long(&mut self, v: u32) -> WireResult<()> {
        self.flush_bits();
        self.out.write_u32::<BigEndian>(v)?;
        Ok(())
    }

    pub fn write_longlong(&mut self, v: u64) -> WireResult<()> {
        self.flush_bits();
        self.out.write_u64::<BigEndian>(v)?;
        Ok(())
    }

    pub fn write_bit(&mut self, v: bool) {
        let octet = match self.pending {
            Some(octet) if octet.used < 8 => octet,
            _ => {
                self.flush_bits();
                BitOctet { bits: 0, used: 0 }
            }
        };

        self.pending = Some(BitOctet {
            bits: octet.bits | (u8::from(v) << octet.used),
            used: octet.used + 1,
        });
    }

    pub fn write_shortstr(&mut self, v: &str) -> WireResult<()> {
        self.flush_bits();
        encoding::write_shortstr(&mut self.out, v)
    }

    pub fn write_longstr(&mut self, v: &[u8]) -> WireResult<()> {
        self.flush_bits();
        encoding::write_longstr(&mut self.out, v)
    }

    pub fn write_table(&mut self, v: &FieldTable) -> WireResult<()> {
        self.flush_bits();
        encoding::write_table(&mut self.out, v)
    }

    pub fn write_timestamp(&mut self, v: u64) -> WireResult<()> {
        self.write_longlong(v)
    }

    /// Write any value with its primitive encoding.
    pub fn write_value(&mut self, value: &Value) -> WireResult<()> {
        match value {
            Value::Octet(v) => self.write_octet(*v),
            Value::Short(v) => self.write_short(*v),
            Value::Long(v) => self.write_long(*v),
            Value::Longlong(v) => self.write_longlong(*v),
            Value::Bit(v) => {
                self.write_bit(*v);
                Ok(())
            }
            Value::Shortstr(v) => self.write_shortstr(v),
            Value::Longstr(v) => self.write_longstr(v),
            Value::Table(v) => self.write_table(v),
            Value::Timestamp(v) => self.write_timestamp(*v),
        }
    }

    /// Close any pending bit octet and return the encoded arguments.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush_bits();
        self.out
    }

    fn flush_bits(&mut self) {
        if let Some(octet) = self.pending.take() {
            self.out.push(octet.bits);
        }
    }
}

/// Reads method arguments from a byte slice.
#[derive(Debug)]
pub struct MethodArgumentReader<'a> {
    input: Cursor<&'a [u8]>,
    pending: Option<BitOctet>,
}

impl<'a> MethodArgumentReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input: Cursor::new(input),
            pending: None,
        }
    }

    pub fn read_octet(&mut self) -> WireResult<u8> {
        self.pending = None;
        Ok(self.input.read_u8()?)
    }

    pub fn read_short(&mut self) -> WireResult<u16> {
        self.pending = None;
        Ok(self.input.read_u16::<BigEndian>()?)
    }

    pub fn read_long(&mut self) -> WireResult<u32> {
        self.pending = None;
        Ok(self.input.read_u32::<BigEndian>()?)
    }

    pub fn read_longlong(&mut self) -> WireResult<u64> {
        self.pending = None;
        Ok(self.input.read_u64::<BigEndian>()?)
    }

    pub fn read_bit(&mut self) -> WireResult<bool> {
        let octet = match self.pending {
            Some(octet) if octet.used < 8 => octet,
            _ => BitOctet {
                bits: self.input.read_u8()?,
                used: 0,
            },
        };

        self.pending = Some(BitOctet {
            bits: octet.bits,
            used: octet.used + 1,
        });
        Ok(octet.bits & (1 << octet.used) != 0)
    }

    pub fn read_shortstr(&mut self) -> WireResult<String> {
        self.pending = None;
        encoding::read_shortstr(&mut self.input)
    }

    pub fn read_longstr(&mut self) -> WireResult<Vec<u8>> {
        self.pending = None;
        encoding::read_longstr(&mut self.input)
    }

    pub fn read_table(&mut self) -> WireResult<FieldTable> {
        self.pending = None;
        encoding::read_table(&mut self.input)
    }

    pub fn read_timestamp(&mut self) -> WireResult<u64> {
        self.read_longlong()
    }

    /// Read one value of the given primitive.
    pub fn read_value(&mut self, primitive: Primitive) -> WireResult<Value> {
        Ok(match primitive {
            Primitive::Octet => Value::Octet(self.read_octet()?),
            Primitive::Short => Value::Short(self.read_short()?),
            Primitive::Long => Value::Long(self.read_long()?),
            Primitive::Longlong => Value::Longlong(self.read_longlong()?),
            Primitive::Bit => Value::Bit(self.read_bit()?),
            Primitive::Shortstr => Value::Shortstr(self.read_shortstr()?),
            Primitive::Longstr => Value::Longstr(self.read_longstr()?),
            Primitive::Table => Value::Table(self.read_table()?),
            Primitive::Timestamp => Value::Timestamp(self.read_timestamp()?),
        })
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.input.position() as usize
    }
}
