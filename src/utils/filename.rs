use std::path::Path;

use thiserror::Error;

use crate::models::record::ValidRecord;

#[derive(Error, Debug, PartialEq)]
pub enum FilenameError {
    #[error("malformed filename '{0}': expected <title>_<author>_<year>.<ext>")]
    Malformed(String),
}

/// Metadata recovered from a `title-with-dashes_author_year.ext` filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFilename {
    pub title: String,
    pub author: String,
    pub year: String,
}

/// Split a conventional filename back into title, author and year. The
/// directory and extension are ignored; the basename must contain exactly
/// two underscores.
pub fn parse_filename(path: &Path) -> Result<ParsedFilename, FilenameError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| FilenameError::Malformed(path.display().to_string()))?;

    let parts: Vec<&str> = stem.split('_').collect();
    match parts.as_slice() {
        [title, author, year] => Ok(ParsedFilename {
            title: title.replace('-', " "),
            author: author.to_string(),
            year: year.to_string(),
        }),
        _ => Err(FilenameError::Malformed(path.display().to_string())),
    }
}

/// Extension of `path` including the leading dot, or an empty string when
/// there is none.
pub fn file_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext),
        None => String::new(),
    }
}

/// Canonical lowercase filename for a record: dashed title, author surname
/// and first publish year joined by underscores, plus the extension
/// (leading dot included).
pub fn normalized_name(record: &ValidRecord, extension: &str) -> String {
    let author = record.authors.first().map(String::as_str).unwrap_or_default();
    let surname = author.split_whitespace().last().unwrap_or(author);

    format!(
        "{}_{}_{}{}",
        record.title.replace(' ', "-"),
        surname,
        record.year,
        extension
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn gatsby_record() -> ValidRecord {
        ValidRecord {
            title: "The Great Gatsby".to_string(),
            authors: vec!["F. Scott Fitzgerald".to_string()],
            publisher: "Scribner".to_string(),
            isbn: "9780743273565".to_string(),
            year: "1925".to_string(),
        }
    }

    #[test]
    fn parses_conventional_filename() {
        let parsed = parse_filename(Path::new("the-great-gatsby_Fitzgerald_1925.epub"))
            .expect("filename should parse");

        assert_eq!(parsed.title, "the great gatsby");
        assert_eq!(parsed.author, "Fitzgerald");
        assert_eq!(parsed.year, "1925");
    }

    #[test]
    fn parse_ignores_leading_directories() {
        let parsed = parse_filename(Path::new("/books/fiction/moby-dick_Melville_1851.pdf"))
            .expect("filename should parse");
        assert_eq!(parsed.title, "moby dick");
    }

    #[test]
    fn parse_rejects_too_few_segments() {
        let err = parse_filename(Path::new("onlyonepart.pdf")).expect_err("should fail");
        assert_eq!(err, FilenameError::Malformed("onlyonepart.pdf".to_string()));
    }

    #[test]
    fn parse_rejects_too_many_segments() {
        parse_filename(Path::new("a_b_c_d.pdf")).expect_err("should fail");
    }

    #[test]
    fn normalizes_record_to_lowercase_name() {
        assert_eq!(
            normalized_name(&gatsby_record(), ".epub"),
            "the-great-gatsby_fitzgerald_1925.epub"
        );
    }

    #[test]
    fn normalize_round_trips_with_parse() {
        let name = normalized_name(&gatsby_record(), ".epub");
        let parsed = parse_filename(Path::new(&name)).expect("normalized name should parse");

        assert_eq!(parsed.title, "the great gatsby");
        assert_eq!(parsed.author, "fitzgerald");
        assert_eq!(parsed.year, "1925");
    }

    #[test]
    fn single_word_title_needs_no_dashes() {
        let record = ValidRecord {
            title: "Frankenstein".to_string(),
            authors: vec!["Mary Wollstonecraft Shelley".to_string()],
            publisher: "Lackington".to_string(),
            isbn: "9780486282114".to_string(),
            year: "1818".to_string(),
        };
        assert_eq!(
            normalized_name(&record, ".epub"),
            "frankenstein_shelley_1818.epub"
        );
    }

    #[test]
    fn mononymous_author_is_used_whole() {
        let record = ValidRecord {
            title: "Meditations".to_string(),
            authors: vec!["Voltaire".to_string()],
            publisher: "Somewhere".to_string(),
            isbn: "123".to_string(),
            year: "1764".to_string(),
        };
        assert_eq!(
            normalized_name(&record, ".txt"),
            "meditations_voltaire_1764.txt"
        );
    }

    #[test]
    fn extension_includes_leading_dot() {
        assert_eq!(file_extension(Path::new("book.epub")), ".epub");
        assert_eq!(file_extension(Path::new("book")), "");
    }

    #[test]
    fn extension_of_pathbuf_with_directories() {
        assert_eq!(file_extension(&PathBuf::from("/a/b/c.mobi")), ".mobi");
    }
}
