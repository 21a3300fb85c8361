use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use std::io::Read;
use thiserror::Error;

const VERSION: &str = "1.0/Serato ScratchLive Crate";

const TAG_VERSION: &[u8; 4] = b"vrsn";
const TAG_SORT: &[u8; 4] = b"osrt";
const TAG_SORT_REVERSE: &[u8; 4] = b"brev";
const TAG_COLUMN: &[u8; 4] = b"ovct";
const TAG_COLUMN_NAME: &[u8; 4] = b"tvcn";
const TAG_COLUMN_WIDTH: &[u8; 4] = b"tvcw";
const TAG_TRACK: &[u8; 4] = b"otrk";
const TAG_TRACK_PATH: &[u8; 4] = b"ptrk";

/// Columns shown for a freshly generated crate, in display order.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "song", "artist", "album", "length", "bpm", "key", "comment",
];

const DEFAULT_COLUMN_WIDTH: &str = "0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrateFileError {
    #[error("not a Serato crate: missing version header")]
    NotACrate,
    #[error("truncated '{0}' record")]
    Truncated(String),
    #[error("invalid UTF-16 text in '{0}' record")]
    InvalidText(String),
}

/// A column of the crate view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub width: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: DEFAULT_COLUMN_WIDTH.to_string(),
        }
    }
}

/// In-memory Serato crate: a column layout and an ordered track list.
///
/// The file format is a flat list of records, each a four byte ASCII tag, a
/// big-endian `u32` length and the payload. Text is UTF-16BE. Container
/// records (`osrt`, `ovct`, `otrk`) hold nested records of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crate {
    version: String,
    sort_column: Option<String>,
    sort_reverse: bool,
    columns: Vec<Column>,
    tracks: Vec<String>,
}

impl Crate {
    /// Empty crate sorted by its first column.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<Column> = columns.into_iter().map(Column::new).collect();
        Self {
            version: VERSION.to_string(),
            sort_column: columns.first().map(|c| c.name.clone()),
            sort_reverse: false,
            columns,
            tracks: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn with_default_columns() -> Self {
        Self::new(DEFAULT_COLUMNS.iter().copied())
    }

    /// Append a volume-relative track path. Insertion order is kept.
    pub fn add_track(&mut self, path: impl Into<String>) {
        self.tracks.push(path.into());
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_record(&mut out, TAG_VERSION, &utf16_be(&self.version));

        if let Some(sort) = &self.sort_column {
            let mut inner = Vec::new();
            write_record(&mut inner, TAG_COLUMN_NAME, &utf16_be(sort));
            write_record(&mut inner, TAG_SORT_REVERSE, &[u8::from(self.sort_reverse)]);
            write_record(&mut out, TAG_SORT, &inner);
        }

        for column in &self.columns {
            let mut inner = Vec::new();
            write_record(&mut inner, TAG_COLUMN_NAME, &utf16_be(&column.name));
            write_record(&mut inner, TAG_COLUMN_WIDTH, &utf16_be(&column.width));
            write_record(&mut out, TAG_COLUMN, &inner);
        }

        for track in &self.tracks {
            let mut inner = Vec::new();
            write_record(&mut inner, TAG_TRACK_PATH, &utf16_be(track));
            write_record(&mut out, TAG_TRACK, &inner);
        }

        out
    }

    /// Decode a crate file. Unknown records are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CrateFileError> {
        let records = read_records(data)?;

        let version = match records.first() {
            Some((tag, payload)) if tag == TAG_VERSION => decode_utf16_be(tag, payload)?,
            _ => return Err(CrateFileError::NotACrate),
        };

        let mut c = Self {
            version,
            sort_column: None,
            sort_reverse: false,
            columns: Vec::new(),
            tracks: Vec::new(),
        };

        for (tag, payload) in records.iter().skip(1) {
            match tag {
                t if t == TAG_SORT => {
                    for (inner_tag, inner) in read_records(payload)? {
                        if &inner_tag == TAG_COLUMN_NAME {
                            c.sort_column = Some(decode_utf16_be(&inner_tag, inner)?);
                        } else if &inner_tag == TAG_SORT_REVERSE {
                            c.sort_reverse = inner.first().is_some_and(|b| *b != 0);
                        }
                    }
                }
                t if t == TAG_COLUMN => {
                    let mut column = Column::new(String::new());
                    for (inner_tag, inner) in read_records(payload)? {
                        if &inner_tag == TAG_COLUMN_NAME {
                            column.name = decode_utf16_be(&inner_tag, inner)?;
                        } else if &inner_tag == TAG_COLUMN_WIDTH {
                            column.width = decode_utf16_be(&inner_tag, inner)?;
                        }
                    }
                    c.columns.push(column);
                }
                t if t == TAG_TRACK => {
                    for (inner_tag, inner) in read_records(payload)? {
                        if &inner_tag == TAG_TRACK_PATH {
                            c.tracks.push(decode_utf16_be(&inner_tag, inner)?);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(c)
    }
}

fn utf16_be(s: &str) -> Vec<u8> {
    let units: Vec<u16> = s.encode_utf16().collect();
    let mut out = vec![0u8; units.len() * 2];
    BigEndian::write_u16_into(&units, &mut out);
    out
}

fn decode_utf16_be(tag: &[u8; 4], payload: &[u8]) -> Result<String, CrateFileError> {
    if payload.len() % 2 != 0 {
        return Err(CrateFileError::InvalidText(tag_name(tag)));
    }
    let mut units = vec![0u16; payload.len() / 2];
    BigEndian::read_u16_into(payload, &mut units);
    String::from_utf16(&units).map_err(|_| CrateFileError::InvalidText(tag_name(tag)))
}

fn write_record(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    let mut len = [0u8; 4];
    BigEndian::write_u32(&mut len, payload.len() as u32);
    out.extend_from_slice(tag);
    out.extend_from_slice(&len);
    out.extend_from_slice(payload);
}

fn read_records(mut data: &[u8]) -> Result<Vec<([u8; 4], &[u8])>, CrateFileError> {
    let mut records = Vec::new();

    while !data.is_empty() {
        let mut tag = [0u8; 4];
        data.read_exact(&mut tag)
            .map_err(|_| CrateFileError::Truncated(tag_name(&tag)))?;
        let len = data
            .read_u32::<BigEndian>()
            .map_err(|_| CrateFileError::Truncated(tag_name(&tag)))? as usize;
        if data.len() < len {
            return Err(CrateFileError::Truncated(tag_name(&tag)));
        }
        let (payload, rest) = data.split_at(len);
        records.push((tag, payload));
        data = rest;
    }

    Ok(records)
}

fn tag_name(tag: &[u8; 4]) -> String {
    String::from_utf8_lossy(tag).trim_end_matches('\0').to_string()
}
