//! Integration tests for the flatmatter library
//!
//! These exercise the public API end to end: parsing, accessors,
//! generation, the shared cache and the file layer.

use flatmatter::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const POST: &str = "---\ntitle: Hello\nauthor: Nick\n---\nContent here";

#[test]
fn test_parse_example_document() {
    let document = parse(POST).unwrap();

    let pairs: Vec<_> = document.metadata().iter().collect();
    assert_eq!(pairs, vec![("title", "Hello"), ("author", "Nick")]);
    assert_eq!(document.content(), "Content here");
}

#[test]
fn test_parse_never_fails() {
    let inputs = [
        "",
        "no frontmatter here",
        "---",
        "---\n",
        "---\n---\n",
        "---\n\n---\n",
        "---\nunterminated: block",
        "   ---\ntitle: indented\n---\nbody",
        "---\n:\n::\n---\n",
        "---\r\ntitle: crlf\r\n---\r\nbody",
    ];
    for input in inputs {
        assert!(parse(input).is_ok(), "parse failed for {:?}", input);
    }
}

#[test]
fn test_text_without_leading_delimiter_is_all_content() {
    for input in ["no frontmatter here", "\n---\na: 1\n---\nbody", "---\na: 1\n"] {
        let document = parse(input).unwrap();
        assert!(document.metadata().is_empty());
        assert_eq!(document.content(), input);
    }
}

#[test]
fn test_blank_metadata_line_block() {
    // a single empty line between the delimiters is a valid, empty block
    let document = parse("---\n\n---\nbody").unwrap();
    assert!(document.metadata().is_empty());
    assert_eq!(document.content(), "body");
}

#[test]
fn test_crlf_delimiters_are_tolerated() {
    let document = parse("---\r\ntitle: crlf\r\n---\r\nbody").unwrap();
    assert_eq!(document.get("title"), "crlf");
    assert_eq!(document.content(), "body");
}

#[test]
fn test_repeated_parse_is_consistent() {
    let input = "---\nrepeat: yes\n---\nsame body";
    let first = parse(input).unwrap();
    let second = parse(input).unwrap();

    assert_eq!(first.metadata(), second.metadata());
    assert_eq!(first.content(), second.content());
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_round_trip_through_generate() {
    let input = "---\ntitle: Round Trip\ntags: rust cli\ndraft:\n---\n# Heading\n\nText.\n";
    let document = parse(input).unwrap();
    let output = generate(Some(&*document)).unwrap();
    let reparsed = parse(&output).unwrap();

    assert_eq!(reparsed.metadata(), document.metadata());
    assert_eq!(reparsed.content(), document.content());
}

#[test]
fn test_generate_examples() {
    assert_eq!(generate(Some(&Document::body_only("Body"))).unwrap(), "Body");

    let mut document = Document::body_only("Body");
    document.set("title", "Test");
    assert_eq!(generate(Some(&document)).unwrap(), "---\ntitle: Test\n---\nBody");

    assert!(matches!(
        generate(None),
        Err(FlatMatterError::InvalidArgument { .. })
    ));
}

#[test]
fn test_accessors_and_validation() {
    let mut document = Arc::unwrap_or_clone(parse(POST).unwrap());

    document.set("k", "v");
    assert!(document.has("k"));
    document.remove("k");
    assert!(!document.has("k"));

    assert!(document.validate_required(Vec::<&str>::new()).is_ok());
    let err = document.validate_required(["missing"]).unwrap_err();
    assert!(matches!(&err, FlatMatterError::MissingMetadata { key } if key == "missing"));

    // the cached copy is untouched
    assert!(!parse(POST).unwrap().has("k"));
}

#[test]
fn test_concurrent_parsing_shares_results() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| parse("---\nthreaded: yes\n---\nbody").unwrap()))
        .collect();

    let documents: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for document in &documents {
        assert_eq!(document.get("threaded"), "yes");
        assert_eq!(document.content(), "body");
    }
}

#[test]
fn test_file_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("post.md");
    fs::write(&file_path, "---\ntitle: Original\n---\n# Post\n").unwrap();

    let reader = FrontMatterReader::new();
    let mut document = reader.read_file(&file_path).unwrap();
    assert_eq!(document.get("title"), "Original");

    let edited = Arc::make_mut(&mut document);
    edited.set("title", "Updated");
    edited.set("author", "Nick");

    let writer = FrontMatterWriter::new();
    let result = writer.write_file(edited, &file_path, None).unwrap();
    assert!(result.modified);

    assert_eq!(
        fs::read_to_string(&file_path).unwrap(),
        "---\ntitle: Updated\nauthor: Nick\n---\n# Post\n"
    );

    let reread = reader.read_file(&file_path).unwrap();
    assert!(reread.validate_required(["title", "author"]).is_ok());
}
