use super::Framer;

#[test]
fn it_reconstructs_a_line_across_chunks() {
    let mut framer = Framer::new();
    assert!(framer.feed(b"he").is_empty());
    assert_eq!(framer.feed(b"llo\n"), vec!["hello".to_string()]);
    assert!(framer.buffered().is_empty());
}

#[test]
fn it_retains_trailing_content_after_the_delimiter() {
    let mut framer = Framer::new();
    assert_eq!(framer.feed(b"a\nb"), vec!["a".to_string()]);
    assert_eq!(framer.buffered(), b"b");
}

#[test]
fn it_only_emits_when_the_new_chunk_has_a_delimiter() {
    // The gate is on the arriving chunk, not the cumulative buffer. A chunk
    // without a delimiter accumulates silently even though a prior call left
    // data behind.
    let mut framer = Framer::new();
    assert_eq!(framer.feed(b"a\n"), vec!["a".to_string()]);
    assert!(framer.feed(b"b").is_empty());
    assert_eq!(framer.buffered(), b"b");
}

#[test]
fn it_emits_multiple_lines_from_one_chunk() {
    let mut framer = Framer::new();
    assert_eq!(
        framer.feed(b"one\ntwo\nthree\n"),
        vec!["one".to_string(), "two".to_string(), "three".to_string()]
    );
    assert!(framer.buffered().is_empty());
}

#[test]
fn it_emits_empty_lines_between_delimiters() {
    let mut framer = Framer::new();
    assert_eq!(
        framer.feed(b"a\n\nb\n"),
        vec!["a".to_string(), "".to_string(), "b".to_string()]
    );
}

#[test]
fn it_flushes_the_buffered_tail_with_the_next_delimited_chunk() {
    let mut framer = Framer::new();
    assert!(framer.feed(b"partial").is_empty());
    assert_eq!(
        framer.feed(b" line\nnext"),
        vec!["partial line".to_string()]
    );
    assert_eq!(framer.buffered(), b"next");
}

#[test]
fn it_replaces_invalid_utf8_in_emitted_lines() {
    let mut framer = Framer::new();
    let lines = framer.feed(b"a\xff\n");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('a'));
}
