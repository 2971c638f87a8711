//! `.geo` map files.

use crate::error::{IoError, Result};
use crate::params::TokenStream;
use biosim_core::ConfigError;
use biosim_data::GeographyLayout;
use std::path::Path;

pub fn read_geography(path: &Path) -> Result<GeographyLayout> {
    let content = crate::error::read_to_string(path)?;
    parse_geography(path, &content)
}

/// Parses `Rader <rows>` and `Kolonner <cols>`, in either order, followed by
/// `rows * cols` terrain letters. Whitespace and line breaks between letters
/// are optional.
pub fn parse_geography(path: &Path, content: &str) -> Result<GeographyLayout> {
    let mut stream = TokenStream::new(path, content);
    let (mut rows, mut cols) = (None, None);
    let (rows, cols) = loop {
        if let (Some(rows), Some(cols)) = (rows, cols) {
            break (rows, cols);
        }
        let Some(key) = stream.next_key() else {
            return Err(malformed(path, "map dimensions missing"));
        };
        let slot = match key.text.as_str() {
            "Rader" => &mut rows,
            "Kolonner" => &mut cols,
            other => {
                return Err(IoError::parse(
                    path,
                    key.line,
                    format!("expected 'Rader' or 'Kolonner', found '{other}'"),
                ))
            }
        };
        let value: usize = stream.expect_value("a map dimension")?;
        if value == 0 || value >= biosim_core::grid::MAX_EXTENT {
            return Err(malformed(
                path,
                &format!("'{}' must lie in 1..{}", key.text, biosim_core::grid::MAX_EXTENT),
            ));
        }
        *slot = Some(value);
    };

    let mut letters = Vec::with_capacity(rows * cols);
    while letters.len() < rows * cols {
        let Some(token) = stream.next_key() else {
            return Err(malformed(
                path,
                &format!("expected {} letters, found {}", rows * cols, letters.len()),
            ));
        };
        letters.extend(token.text.chars());
    }
    stream.skip_comments();
    if letters.len() > rows * cols || !stream.is_empty() {
        tracing::warn!(path = %path.display(), "ignoring letters past the end of the map");
    }
    letters.truncate(rows * cols);

    Ok(GeographyLayout {
        rows,
        cols,
        lines: letters.chunks(cols).map(<[char]>::to_vec).collect(),
    })
}

fn malformed(path: &Path, problem: &str) -> IoError {
    ConfigError::MalformedGeography(format!("{}: {problem}", path.display())).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_of_letters() {
        let layout = parse_geography(
            Path::new("island.geo"),
            "# tiny island\nRader 3\nKolonner 4\nHHHH\nHJSH\nHHHH\n",
        )
        .unwrap();
        assert_eq!((layout.rows, layout.cols), (3, 4));
        assert_eq!(layout.letter(1, 1), Some('J'));
        assert_eq!(layout.letter(2, 1), Some('S'));
        assert!(layout.is_rectangular());
    }

    #[test]
    fn test_dimensions_in_any_order_and_spaced_letters() {
        let layout = parse_geography(
            Path::new("island.geo"),
            "Kolonner 2\nRader 2\nH J\nS O\n",
        )
        .unwrap();
        assert_eq!(layout.lines, vec![vec!['H', 'J'], vec!['S', 'O']]);
    }

    #[test]
    fn test_row_breaks_are_optional() {
        let layout = parse_geography(Path::new("g.geo"), "Rader 2 Kolonner 3 HJSOHH").unwrap();
        assert_eq!(layout.letter(0, 1), Some('O'));
    }

    #[test]
    fn test_trailing_comments_between_rows() {
        let layout = parse_geography(
            Path::new("island.geo"),
            "Rader 2   # tall\nKolonner 3 # wide\nHJH # top row\nHSH\n# done\n",
        )
        .unwrap();
        assert_eq!(layout.lines, vec![vec!['H', 'J', 'H'], vec!['H', 'S', 'H']]);
    }

    #[test]
    fn test_too_few_letters() {
        let err = parse_geography(Path::new("g.geo"), "Rader 2\nKolonner 2\nHJ\n").unwrap_err();
        assert!(matches!(err, IoError::Config(ConfigError::MalformedGeography(_))));
    }

    #[test]
    fn test_zero_dimension() {
        let err = parse_geography(Path::new("g.geo"), "Rader 0\nKolonner 2\nHJ\n").unwrap_err();
        assert!(matches!(err, IoError::Config(ConfigError::MalformedGeography(_))));
    }
}
