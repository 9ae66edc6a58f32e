//! Getting a [`Bundle`] in and out of a file.
//!
//! Two formats are supported: an opaque `bincode` blob for round-tripping a
//! bundle between runs of this crate, and a source-embeddable listing of
//! every table as Rust `static` items, for baking a bundle directly into a
//! compiled program the way the construction this is grounded on emits a C
//! struct literal via its `--create-c-file` mode.

use {
    super::tables::Bundle,
    std::{fmt, fs, io, path::Path},
};

/// A bundle could not be read from or written to disk.
#[derive(Debug)]
pub enum BundleIoError {
    Io(io::Error),
    Deserialize(bincode::Error),
}

impl fmt::Display for BundleIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleIoError::Io(e) => write!(f, "bundle I/O error: {e}"),
            BundleIoError::Deserialize(e) => write!(f, "bundle deserialization error: {e}"),
        }
    }
}

impl std::error::Error for BundleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BundleIoError::Io(e) => Some(e),
            BundleIoError::Deserialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for BundleIoError {
    fn from(e: io::Error) -> Self {
        BundleIoError::Io(e)
    }
}

/// Serializes a bundle to `path` with `bincode`.
pub fn save_bundle(bundle: &Bundle, path: impl AsRef<Path>) -> Result<(), BundleIoError> {
    let bytes = bincode::serialize(bundle).map_err(BundleIoError::Deserialize)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Deserializes a bundle previously written by [`save_bundle`].
pub fn load_bundle(path: impl AsRef<Path>) -> Result<Bundle, BundleIoError> {
    let bytes = fs::read(path)?;
    bincode::deserialize(&bytes).map_err(BundleIoError::Deserialize)
}

/// Renders a bundle as a Rust source listing of `static` array items, one
/// per table field, suitable for `include!`-ing into a compiled program that
/// wants the tables baked in at compile time rather than loaded from disk.
pub fn source_listing(bundle: &Bundle) -> String {
    let mut out = String::new();
    out.push_str("// Generated white-box AES-128 table bundle.\n\n");
    out.push_str(&format!("pub static USES_MIXING: bool = {};\n\n", bundle.uses_mixing));

    write_tbox_array(&mut out, "FINAL_T_BOXES", bundle.final_t_boxes.as_ref());
    write_tyi_rounds(&mut out, "TYI", bundle.tyi.as_ref());
    write_xor_rounds(&mut out, "XOR", bundle.xor.as_ref());
    write_mixing_rounds(&mut out, "MIXING", bundle.mixing.as_ref());
    write_xor_rounds(&mut out, "MIXING_XOR", bundle.mixing_xor.as_ref());

    out
}

fn write_tbox_array(out: &mut String, name: &str, tables: &[[u8; 256]; 16]) {
    out.push_str(&format!("pub static {name}: [[u8; 256]; 16] = [\n"));
    for table in tables {
        out.push_str("    [");
        for b in table {
            out.push_str(&format!("{b},"));
        }
        out.push_str("],\n");
    }
    out.push_str("];\n\n");
}

fn write_tyi_rounds(out: &mut String, name: &str, rounds: &[[[u32; 256]; 16]; 9]) {
    out.push_str(&format!("pub static {name}: [[[u32; 256]; 16]; 9] = [\n"));
    for round in rounds {
        out.push_str("  [\n");
        for table in round {
            out.push_str("    [");
            for v in table {
                out.push_str(&format!("{v},"));
            }
            out.push_str("],\n");
        }
        out.push_str("  ],\n");
    }
    out.push_str("];\n\n");
}

fn write_xor_rounds(out: &mut String, name: &str, rounds: &[[[u8; 256]; 96]; 9]) {
    out.push_str(&format!("pub static {name}: [[[u8; 256]; 96]; 9] = [\n"));
    for round in rounds {
        out.push_str("  [\n");
        for table in round {
            out.push_str("    [");
            for b in table {
                out.push_str(&format!("{b},"));
            }
            out.push_str("],\n");
        }
        out.push_str("  ],\n");
    }
    out.push_str("];\n\n");
}

fn write_mixing_rounds(out: &mut String, name: &str, rounds: &[[[u32; 256]; 16]; 9]) {
    write_tyi_rounds(out, name, rounds);
}
