//! Data URI construction for a single classified image.
//!
//! | Format | Mode | Output |
//! |--------|------|--------|
//! | raster | any | `data:<mime>;base64,<payload>` |
//! | SVG | `base64` | `data:image/svg+xml;base64,<payload>` |
//! | SVG | `uri` | `data:image/svg+xml;<percent-encoded text>` |
//! | SVG | `mini` | `data:image/svg+xml,<minified text>` |
//! | SVG | `mini-srcset` | as `mini`, spaces escaped |
//!
//! The `uri` form deliberately has no `utf8,` marker after the MIME type.
//! Text modes read the file as UTF-8, replacing invalid sequences, and drop
//! every CR/LF before encoding.

use crate::error::CodifyError;
use crate::options::SvgMode;
use crate::svg;
use crate::types::ImageEntry;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs;
use std::path::Path;

/// Read `entry` from disk and build its data URI.
pub fn encode(entry: &ImageEntry, svg_mode: SvgMode) -> Result<String, CodifyError> {
    let path = &entry.source_path;
    Ok(match effective_mode(entry, svg_mode) {
        SvgMode::Base64 => base64_data_uri(&read_bytes(path)?, entry.mime_type),
        SvgMode::Uri => uri_data_uri(&read_svg_source(path)?, entry.mime_type),
        SvgMode::Mini => svg::mini_data_uri(&read_svg_source(path)?),
        SvgMode::MiniSrcset => svg::mini_srcset_data_uri(&read_svg_source(path)?),
    })
}

/// Raster formats ignore the configured mode.
pub fn effective_mode(entry: &ImageEntry, svg_mode: SvgMode) -> SvgMode {
    if entry.is_vector_format {
        svg_mode
    } else {
        SvgMode::Base64
    }
}

pub fn base64_data_uri(bytes: &[u8], mime_type: &str) -> String {
    let payload = strip_line_breaks(&BASE64.encode(bytes));
    format!("data:{mime_type};base64,{payload}")
}

/// Percent-encoded text form, without a charset marker.
pub fn uri_data_uri(source: &str, mime_type: &str) -> String {
    format!("data:{mime_type};{}", svg::encode_uri_component(source))
}

/// Remove every carriage return and line feed.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|&c| c != '\r' && c != '\n').collect()
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, CodifyError> {
    fs::read(path).map_err(|source| CodifyError::IoFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Read SVG source as text with line breaks removed.
fn read_svg_source(path: &Path) -> Result<String, CodifyError> {
    let bytes = read_bytes(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    Ok(strip_line_breaks(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::image_entry;
    use crate::error::ErrorKind;
    use proptest::prelude::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    const SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\">\r\n  <rect fill=\"#f00\"/>\n</svg>\n";

    fn write(dir: &TempDir, name: &str, contents: &[u8]) -> ImageEntry {
        fs::write(dir.path().join(name), contents).unwrap();
        image_entry(dir.path(), OsStr::new(name)).unwrap()
    }

    #[test]
    fn raster_is_always_base64() {
        let tmp = TempDir::new().unwrap();
        let png = write(&tmp, "dot.png", &[0x89, b'P', b'N', b'G', 0, 1, 2]);

        for mode in SvgMode::ALL {
            assert_eq!(encode(&png, mode).unwrap(), "data:image/png;base64,iVBORwABAg==");
        }
    }

    #[test]
    fn jpeg_uses_jpeg_mime() {
        let tmp = TempDir::new().unwrap();
        let jpg = write(&tmp, "a.jpeg", b"abc");
        assert_eq!(encode(&jpg, SvgMode::Mini).unwrap(), "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn svg_base64_keeps_exact_bytes() {
        let tmp = TempDir::new().unwrap();
        let entry = write(&tmp, "icon.svg", SVG.as_bytes());
        let uri = encode(&entry, SvgMode::Base64).unwrap();
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        assert_eq!(BASE64.decode(payload).unwrap(), SVG.as_bytes());
    }

    #[test]
    fn svg_uri_has_no_charset_marker() {
        let tmp = TempDir::new().unwrap();
        let entry = write(&tmp, "icon.svg", b"<svg/>\n");
        assert_eq!(
            encode(&entry, SvgMode::Uri).unwrap(),
            "data:image/svg+xml;%3Csvg%2F%3E"
        );
    }

    #[test]
    fn svg_mini_drops_line_breaks_without_adding_spaces() {
        let tmp = TempDir::new().unwrap();
        let entry = write(&tmp, "icon.svg", SVG.as_bytes());
        assert_eq!(
            encode(&entry, SvgMode::Mini).unwrap(),
            "data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg'%3e %3crect fill='red'/%3e%3c/svg%3e"
        );
    }

    #[test]
    fn svg_mini_srcset() {
        let tmp = TempDir::new().unwrap();
        let entry = write(&tmp, "icon.svg", b"<svg a=\"1, 2\"/>");
        assert_eq!(
            encode(&entry, SvgMode::MiniSrcset).unwrap(),
            "data:image/svg+xml,%3csvg%20a='1%2c%202'/%3e"
        );
    }

    #[test]
    fn svg_modes_in_order() {
        let tmp = TempDir::new().unwrap();
        let entry = write(&tmp, "icon.svg", b"<svg/>");
        let uris: Vec<String> = SvgMode::ALL
            .iter()
            .map(|&mode| encode(&entry, mode).unwrap())
            .collect();
        assert_eq!(
            uris,
            vec![
                "data:image/svg+xml;base64,PHN2Zy8+",
                "data:image/svg+xml;%3Csvg%2F%3E",
                "data:image/svg+xml,%3csvg/%3e",
                "data:image/svg+xml,%3csvg/%3e",
            ]
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_in_text_modes() {
        let tmp = TempDir::new().unwrap();
        let entry = write(&tmp, "broken.svg", b"<svg>\xff</svg>");
        assert_eq!(
            encode(&entry, SvgMode::Uri).unwrap(),
            "data:image/svg+xml;%3Csvg%3E%EF%BF%BD%3C%2Fsvg%3E"
        );
    }

    #[test]
    fn missing_file_is_io_failure() {
        let tmp = TempDir::new().unwrap();
        let entry = image_entry(tmp.path(), OsStr::new("gone.png")).unwrap();
        let err = encode(&entry, SvgMode::Base64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn directory_with_image_name_is_io_failure() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("folder.svg")).unwrap();
        let entry = image_entry(tmp.path(), OsStr::new("folder.svg")).unwrap();
        let err = encode(&entry, SvgMode::Mini).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn strip_line_breaks_removes_cr_and_lf() {
        assert_eq!(strip_line_breaks("a\r\nb\n\nc\rd"), "abcd");
    }

    proptest! {
        #[test]
        fn prop_base64_payload_decodes_to_bytes(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
            let uri = base64_data_uri(&bytes, "image/gif");
            let payload = uri.strip_prefix("data:image/gif;base64,").unwrap();
            prop_assert_eq!(BASE64.decode(payload).unwrap(), bytes);
        }

        #[test]
        fn prop_uri_mode_decodes_to_source(text in "[^\r\n]*") {
            let uri = uri_data_uri(&text, "image/svg+xml");
            let payload = uri.strip_prefix("data:image/svg+xml;").unwrap();
            let decoded = percent_encoding::percent_decode_str(payload).decode_utf8().unwrap();
            prop_assert_eq!(decoded.as_ref(), text.as_str());
        }
    }
}
