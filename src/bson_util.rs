use crate::{
    bson::{doc, Bson, Document, RawDocumentBuf},
    error::Result,
};

/// A document under construction that option values can be appended to.
///
/// Implementations must keep entries in insertion order: command documents are compared
/// structurally, including key order, by some servers and test harnesses.
pub trait DocumentBuilder {
    /// Appends `value` under `key`.
    fn append_bson(&mut self, key: &str, value: Bson) -> Result<()>;
}

impl DocumentBuilder for Document {
    fn append_bson(&mut self, key: &str, value: Bson) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

impl DocumentBuilder for RawDocumentBuf {
    fn append_bson(&mut self, key: &str, value: Bson) -> Result<()> {
        let single = RawDocumentBuf::from_document(&doc! { key: value })?;
        extend_raw_document_buf(self, single)
    }
}

/// Coerce numeric types into an `i64` if it would be lossless to do so. If this Bson is not numeric
/// or the conversion would be lossy (e.g. 1.5 -> 1), this returns `None`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn get_int(val: &Bson) -> Option<i64> {
    match *val {
        Bson::Int32(i) => Some(i64::from(i)),
        Bson::Int64(i) => Some(i),
        Bson::Double(f) if (f - (f as i64 as f64)).abs() <= f64::EPSILON => Some(f as i64),
        _ => None,
    }
}

/// Coerce numeric types into an `u64` if it would be lossless to do so. If this Bson is not numeric
/// or the conversion would be lossy (e.g. 1.5 -> 1), this returns `None`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn get_u64(val: &Bson) -> Option<u64> {
    match *val {
        Bson::Int32(i) => u64::try_from(i).ok(),
        Bson::Int64(i) => u64::try_from(i).ok(),
        Bson::Double(f) if (f - (f as u64 as f64)).abs() <= f64::EPSILON => Some(f as u64),
        _ => None,
    }
}

pub(crate) fn first_key(document: &Document) -> Option<&str> {
    document.keys().next().map(String::as_str)
}

pub(crate) fn extend_raw_document_buf(
    this: &mut RawDocumentBuf,
    other: RawDocumentBuf,
) -> Result<()> {
    for result in other.iter() {
        let (k, v) = result?;
        this.append(k, v.to_raw_bson());
    }
    Ok(())
}
