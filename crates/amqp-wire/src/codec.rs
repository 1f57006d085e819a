//! Decode-by-id for whole method and content-header payloads.

use amqp_spec::ProtocolSpec;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

use crate::argument::{MethodArgumentReader, MethodArgumentWriter};
use crate::error::{WireError, WireResult};
use crate::method::{Method, Properties, properties_class};
use crate::property::{ContentHeaderPropertyReader, ContentHeaderPropertyWriter};

/// A content-header payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentHeader {
    /// Total size of the content body that follows.
    pub body_size: u64,
    pub properties: Properties,
}

/// Payload codec over a validated protocol spec.
#[derive(Debug, Clone)]
pub struct Codec {
    spec: ProtocolSpec,
}

impl Codec {
    /// Create a codec; the spec is validated once here.
    pub fn new(spec: ProtocolSpec) -> WireResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &ProtocolSpec {
        &self.spec
    }

    /// Decode a method payload: class id, method id, then the arguments.
    pub fn read_method_from(&self, payload: &[u8]) -> WireResult<Method> {
        let mut cursor = Cursor::new(payload);
        let class_id = cursor.read_u16::<BigEndian>()?;
        let method_id = cursor.read_u16::<BigEndian>()?;

        if self.spec.method(class_id, method_id).is_none() {
            tracing::debug!("Rejecting method frame for unknown id {}/{}", class_id, method_id);
            return Err(WireError::UnknownClassOrMethodId {
                class_id,
                method_id: i32::from(method_id),
            });
        }

        let offset = cursor.position() as usize;
        let mut reader = MethodArgumentReader::new(&payload[offset..]);
        let method = Method::read_arguments_from(&self.spec, class_id, method_id, &mut reader)?;

        tracing::trace!(
            "Decoded method {}/{} ({} argument bytes)",
            class_id,
            method_id,
            reader.position()
        );
        Ok(method)
    }

    /// Encode a method payload.
    pub fn write_method_to(&self, method: &Method) -> WireResult<Vec<u8>> {
        let mut writer = MethodArgumentWriter::new();
        method.write_arguments_to(&self.spec, &mut writer)?;
        let arguments = writer.finish();

        let mut out = Vec::with_capacity(4 + arguments.len());
        out.write_u16::<BigEndian>(method.class_id)?;
        out.write_u16::<BigEndian>(method.method_id)?;
        out.extend_from_slice(&arguments);
        Ok(out)
    }

    /// Decode a content-header payload.
    ///
    /// Only classes declaring header fields resolve. Any other class id is
    /// reported with method id `-1`.
    pub fn read_content_header_from(&self, payload: &[u8]) -> WireResult<ContentHeader> {
        let mut cursor = Cursor::new(payload);
        let class_id = cursor.read_u16::<BigEndian>()?;
        properties_class(&self.spec, class_id)?;

        let _weight = cursor.read_u16::<BigEndian>()?;
        let body_size = cursor.read_u64::<BigEndian>()?;

        let offset = cursor.position() as usize;
        let mut reader = ContentHeaderPropertyReader::new(&payload[offset..]);
        let properties = Properties::read_properties_from(&self.spec, class_id, &mut reader)?;

        Ok(ContentHeader {
            body_size,
            properties,
        })
    }

    /// Encode a content-header payload with weight zero.
    pub fn write_content_header_to(&self, header: &ContentHeader) -> WireResult<Vec<u8>> {
        let mut writer = ContentHeaderPropertyWriter::new();
        header.properties.write_properties_to(&self.spec, &mut writer)?;
        let properties = writer.finish()?;

        let mut out = Vec::with_capacity(12 + properties.len());
        out.write_u16::<BigEndian>(header.properties.class_id)?;
        out.write_u16::<BigEndian>(0)?;
        out.write_u64::<BigEndian>(header.body_size)?;
        out.extend_from_slice(&properties);
        Ok(out)
    }
}
