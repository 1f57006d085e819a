//! Content-header property encoding.
//!
//! A header starts with presence flags, one per declared field in order,
//! packed into 16-bit big-endian words from bit 15 down to bit 1. Bit 0 of a
//! word is set when another flag word follows. Values of present fields come
//! after the last flag word, with no bit packing: a bit property is one octet.

use amqp_spec::Primitive;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

use crate::encoding;
use crate::error::WireResult;
use crate::value::Value;

const FLAGS_PER_WORD: u8 = 15;
const CONTINUATION: u16 = 1;

fn flag_mask(index: u8) -> u16 {
    1 << (15 - index)
}

/// Writes a presence block followed by property values.
#[derive(Debug, Default)]
pub struct ContentHeaderPropertyWriter {
    flags: Vec<u16>,
    word: u16,
    used: u8,
    values: Vec<u8>,
}

impl ContentHeaderPropertyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether the next declared field is present.
    pub fn write_presence(&mut self, present: bool) {
        if self.used == FLAGS_PER_WORD {
            self.flags.push(self.word | CONTINUATION);
            self.word = 0;
            self.used = 0;
        }
        if present {
            self.word |= flag_mask(self.used);
        }
        self.used += 1;
    }

    /// Close the presence block. Must be called once, before any value.
    pub fn finish_presence(&mut self) {
        self.flags.push(self.word);
        self.word = 0;
        self.used = 0;
    }

    pub fn write_value(&mut self, value: &Value) -> WireResult<()> {
        let w = &mut self.values;
        match value {
            Value::Octet(v) => w.write_u8(*v)?,
            Value::Short(v) => w.write_u16::<BigEndian>(*v)?,
            Value::Long(v) => w.write_u32::<BigEndian>(*v)?,
            Value::Longlong(v) | Value::Timestamp(v) => w.write_u64::<BigEndian>(*v)?,
            Value::Bit(v) => w.write_u8(u8::from(*v))?,
            Value::Shortstr(v) => encoding::write_shortstr(w, v)?,
            Value::Longstr(v) => encoding::write_longstr(w, v)?,
            Value::Table(v) => encoding::write_table(w, v)?,
        }
        Ok(())
    }

    /// Return the flag words followed by the values.
    pub fn finish(self) -> WireResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.flags.len() * 2 + self.values.len());
        for word in &self.flags {
            out.write_u16::<BigEndian>(*word)?;
        }
        out.extend_from_slice(&self.values);
        Ok(out)
    }
}

/// Reads a presence block followed by property values.
#[derive(Debug)]
pub struct ContentHeaderPropertyReader<'a> {
    input: Cursor<&'a [u8]>,
    word: Option<u16>,
    used: u8,
}

impl<'a> ContentHeaderPropertyReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input: Cursor::new(input),
            word: None,
            used: 0,
        }
    }

    /// Whether the next declared field is present.
    ///
    /// Flags past the last word read as absent.
    pub fn read_presence(&mut self) -> WireResult<bool> {
        let word = match self.word {
            None => self.next_word()?,
            Some(word) if self.used == FLAGS_PER_WORD => {
                if word & CONTINUATION == 0 {
                    return Ok(false);
                }
                self.next_word()?
            }
            Some(word) => word,
        };

        let present = word & flag_mask(self.used) != 0;
        self.used += 1;
        Ok(present)
    }

    /// Skip any remaining flag words so the reader sits at the first value.
    pub fn finish_presence(&mut self) -> WireResult<()> {
        let mut word = match self.word {
            Some(word) => word,
            None => self.next_word()?,
        };
        while word & CONTINUATION != 0 {
            word = self.next_word()?;
        }
        Ok(())
    }

    pub fn read_value(&mut self, primitive: Primitive) -> WireResult<Value> {
        let r = &mut self.input;
        Ok(match primitive {
            Primitive::Octet => Value::Octet(r.read_u8()?),
            Primitive::Short => Value::Short(r.read_u16::<BigEndian>()?),
            Primitive::Long => Value::Long(r.read_u32::<BigEndian>()?),
            Primitive::Longlong => Value::Longlong(r.read_u64::<BigEndian>()?),
            Primitive::Timestamp => Value::Timestamp(r.read_u64::<BigEndian>()?),
            Primitive::Bit => Value::Bit(r.read_u8()? != 0),
            Primitive::Shortstr => Value::Shortstr(encoding::read_shortstr(r)?),
            Primitive::Longstr => Value::Longstr(encoding::read_longstr(r)?),
            Primitive::Table => Value::Table(encoding::read_table(r)?),
        })
    }

    fn next_word(&mut self) -> WireResult<u16> {
        let word = self.input.read_u16::<BigEndian>()?;
        self.word = Some(word);
        self.used = 0;
        Ok(word)
    }
}
