// Integration tests for deck building and the PPTX package

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use seatshow::content::{Code, FunctionSample, FUNCTION_SAMPLES};
use seatshow::error::Result;
use seatshow::export::{
    sanitize_code, Deck, DeckExporter, DeckWriter, PptxWriter, Section, OUTPUT_FILE_NAME,
};
use seatshow::highlight::{annotate, plain_text, to_markup};
use seatshow::markup::strip_markup;

fn read_part<R: std::io::Read + std::io::Seek>(archive: &mut zip::ZipArchive<R>, name: &str) -> String {
    let mut part = archive.by_name(name).expect("part missing");
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

fn markup_sample() -> FunctionSample {
    FunctionSample {
        name: "markup()",
        description: "Sample stored as highlighted markup",
        complexity: "O(1)",
        return_type: "int",
        code: Code::Markup(r#"<span class="x">int</span> <span>main</span>()"#),
        output: "",
    }
}

#[test]
fn test_slide_count_and_order() {
    let exporter = DeckExporter::new();
    let deck = exporter.build();

    assert_eq!(deck.len(), 2 + 1 + FUNCTION_SAMPLES.len() + 1 + 1 + 1);
    assert_eq!(deck.len(), exporter.expected_slides());
    assert_eq!(
        deck.sections(),
        vec![
            Section::Title,
            Section::Context,
            Section::Solution,
            Section::Function(0),
            Section::Function(1),
            Section::Function(2),
            Section::Function(3),
            Section::Function(4),
            Section::Demo,
            Section::Future,
            Section::Thanks,
        ]
    );
}

#[test]
fn test_markup_is_sanitized() {
    assert_eq!(
        sanitize_code(Code::Markup(r#"<span class="x">int</span> <span>main</span>()"#)),
        "int main()"
    );
    assert_eq!(
        sanitize_code(Code::Markup("<b>a</b> &lt;&lt; &#39;x&#39; &gt;")),
        "a << 'x' >"
    );

    let deck = DeckExporter::with_samples(vec![markup_sample()]).build();
    assert_eq!(deck.len(), 7);
    let texts: Vec<&str> = deck.slides[3].texts().collect();
    assert!(texts.contains(&"int main()"));
    assert!(texts.iter().all(|t| !t.contains("<span")));
}

#[test]
fn test_plain_samples_pass_through() {
    for sample in &FUNCTION_SAMPLES {
        assert_eq!(sanitize_code(sample.code), sample.code.source());
    }
}

#[test]
fn test_markup_tag_shapes_are_sanitized() {
    assert_eq!(
        sanitize_code(Code::Markup(r#"<span class="kw">int main()"#)),
        "int main()"
    );
    assert_eq!(sanitize_code(Code::Markup("int<br/>main()")), "intmain()");
    assert_eq!(
        sanitize_code(Code::Markup("<span\nclass=\"kw\">int</span>")),
        "int"
    );
}

#[test]
fn test_plain_source_with_tag_like_text_is_kept() {
    let source = "std::cout << \"</td>\";";
    assert_eq!(sanitize_code(Code::Plain(source)), source);
    let source = "std::cout << \"&lt;\" << '<' << \"<b>\";";
    assert_eq!(sanitize_code(Code::Plain(source)), source);
}

#[test]
fn test_token_layer_projections() {
    for sample in &FUNCTION_SAMPLES {
        let source = sample.code.source();
        let tokens = annotate(source);
        assert_eq!(plain_text(&tokens), source, "{}", sample.name);
        assert_eq!(strip_markup(&to_markup(&tokens)), source, "{}", sample.name);
    }
}

#[test]
fn test_package_in_memory() {
    let deck = DeckExporter::new().build();
    let buffer = PptxWriter.write(&deck, Cursor::new(Vec::new())).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/theme/theme1.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
    ] {
        assert!(archive.by_name(part).is_ok(), "{part}");
    }

    let presentation = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 11);

    let content_types = read_part(&mut archive, "[Content_Types].xml");
    for n in 1..=11 {
        let slide = read_part(&mut archive, &format!("ppt/slides/slide{n}.xml"));
        assert!(!slide.contains("<span"), "slide{n}");
        assert!(content_types.contains(&format!("/ppt/slides/slide{n}.xml")));
    }
    assert!(archive.by_name("ppt/slides/slide12.xml").is_err());

    let first = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(first.contains("Smart Seating Allocation Engine"));
    let code = read_part(&mut archive, "ppt/slides/slide4.xml");
    assert!(code.contains("assignSeat(&quot;S_001&quot;);"));
}

#[test]
fn test_export_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = DeckExporter::new().export(dir.path()).unwrap();

    assert_eq!(path, dir.path().join(OUTPUT_FILE_NAME));
    let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let slides = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide"))
        .count();
    assert_eq!(slides, 11);
}

#[test]
fn test_export_into_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = DeckExporter::new().export(&dir.path().join("nope"));
    assert!(result.is_err());
}

struct FailingWriter;

impl DeckWriter for FailingWriter {
    fn write_file(&self, _deck: &Deck, _path: &Path) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

#[test]
fn test_writer_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let err = DeckExporter::new()
        .export_with(&FailingWriter, dir.path())
        .unwrap_err();
    assert!(err.to_string().contains("read-only"));
}
