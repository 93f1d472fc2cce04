//! End-to-end tests of the partial parse engine against the caller protocol:
//! absorb what can be absorbed, reject the rest, and let the caller fall
//! back to a full parse exactly once per rejection.

use rstest::rstest;
use weft::{
    EditHandler, PartialParseResult, PartialParser, SourceChange, SyntaxKind, SyntaxTree,
    SyntaxTreeBuilder, TextRange, TextSize,
};

/// Leaf spans `[0,5)="hello"` (accepts internal edits) and `[5,11)=" world"`
/// (no handler, rejects everything).
fn hello_world() -> SyntaxTree {
    let mut builder = SyntaxTreeBuilder::new();
    builder.start_node(SyntaxKind::DOCUMENT);
    builder.token_with_handler(SyntaxKind::MARKUP_TEXT, "hello", EditHandler::MarkupText);
    builder.token(SyntaxKind::MARKUP_TEXT, " world");
    builder.finish_node();
    builder.finish().unwrap()
}

/// `x @{` - an unclosed statement block whose opening brace carries the
/// auto-complete capability.
fn unclosed_block() -> SyntaxTree {
    let mut builder = SyntaxTreeBuilder::new();
    builder.start_node(SyntaxKind::DOCUMENT);
    builder.token_with_handler(SyntaxKind::MARKUP_TEXT, "x ", EditHandler::MarkupText);
    builder.token(SyntaxKind::TRANSITION, "@");
    builder.start_node(SyntaxKind::STATEMENT_BLOCK);
    builder.token_with_handler(
        SyntaxKind::L_BRACE,
        "{",
        EditHandler::AutoCompleteBlock { closer: "}".into() },
    );
    builder.finish_node();
    builder.finish_node();
    builder.finish().unwrap()
}

/// A caller that owns the full-parse fallback, counting how often it runs.
struct Editor {
    tree: SyntaxTree,
    parser: PartialParser,
    full_parses: usize,
}

impl Editor {
    fn new(tree: SyntaxTree) -> Self {
        let parser = PartialParser::new(tree.clone());
        Self {
            tree,
            parser,
            full_parses: 0,
        }
    }

    fn type_change(&mut self, change: SourceChange) -> PartialParseResult {
        let (result, new_tree) = self.parser.parse(&change);
        if result.is_rejected() {
            // Contract: discard the engine and rebuild from a full parse.
            // The test trees never change shape, so re-binding to the same
            // tree stands in for the real parser here.
            self.full_parses += 1;
            self.parser = PartialParser::new(self.tree.clone());
        } else {
            self.tree = new_tree;
        }
        result
    }
}

#[test]
fn boundary_insert_is_owned_by_hello() {
    let mut parser = PartialParser::new(hello_world());
    let (result, tree) = parser.parse(&SourceChange::insert(TextSize::new(5), "!"));

    assert!(result.is_accepted());
    assert_eq!(tree.root().children()[0].text(), Some("hello!"));
    assert_eq!(tree.root().children()[1].text(), Some(" world"));
}

#[test]
fn internal_edit_leaves_sibling_untouched_by_reference() {
    let original = hello_world();
    let mut parser = PartialParser::new(original.clone());
    let change = SourceChange::replace(TextRange::new(TextSize::new(2), TextSize::new(3)), "L");
    let (result, tree) = parser.parse(&change);

    assert!(result.is_accepted());
    assert_eq!(tree.root().children()[0].text(), Some("heLlo"));
    assert!(tree.root().children()[1].ptr_eq(&original.root().children()[1]));
}

#[rstest]
#[case::inside_hello(SourceChange::insert(TextSize::new(2), "x"), true)]
#[case::boundary(SourceChange::insert(TextSize::new(5), "!"), true)]
#[case::inside_world(SourceChange::insert(TextSize::new(8), "x"), false)]
#[case::transition_in_markup(SourceChange::insert(TextSize::new(2), "@"), false)]
#[case::past_the_end(SourceChange::insert(TextSize::new(50), "x"), false)]
fn first_keystroke_classification(#[case] change: SourceChange, #[case] accepted: bool) {
    let mut parser = PartialParser::new(hello_world());
    let (result, _) = parser.parse(&change);
    assert_eq!(result.is_accepted(), accepted);
}

#[test]
fn each_rejection_triggers_exactly_one_full_parse() {
    let mut editor = Editor::new(hello_world());

    assert!(editor.type_change(SourceChange::insert(TextSize::new(2), "x")).is_accepted());
    assert_eq!(editor.full_parses, 0);

    // Lands on the handler-less leaf
    assert!(editor.type_change(SourceChange::insert(TextSize::new(9), "x")).is_rejected());
    assert_eq!(editor.full_parses, 1);

    // The replacement engine carries no residue and absorbs edits again
    assert!(editor.type_change(SourceChange::insert(TextSize::new(2), "y")).is_accepted());
    assert_eq!(editor.full_parses, 1);
}

#[test]
fn typing_session_absorbs_a_whole_word() {
    let mut parser = PartialParser::new(hello_world());
    let mut at = 5u32;
    for c in ["!", "?", "."] {
        let (result, _) = parser.parse(&SourceChange::insert(TextSize::new(at), c));
        assert!(result.is_accepted());
        at += 1;
    }
    assert_eq!(parser.modified_root().children()[0].text(), Some("hello!?."));
}

#[test]
fn newline_after_open_brace_requests_auto_completion() {
    let mut parser = PartialParser::new(unclosed_block());
    // The brace sits at [3,4); the newline goes right after it
    let (result, tree) = parser.parse(&SourceChange::insert(TextSize::new(4), "\n"));

    assert!(result.is_accepted());
    assert!(result.has_auto_complete_block());

    let block = &tree.root().children()[2];
    assert_eq!(block.children()[0].text(), Some("{\n"));
    let closer = block.children()[0]
        .handler()
        .and_then(EditHandler::auto_complete_string);
    assert_eq!(closer, Some("}"));
}

#[test]
fn non_newline_in_unclosed_block_falls_back_to_full_parse() {
    let mut editor = Editor::new(unclosed_block());
    assert!(editor.type_change(SourceChange::insert(TextSize::new(4), "x")).is_rejected());
    assert_eq!(editor.full_parses, 1);
}

#[test]
fn diagnostics_survive_partial_parsing_unchanged() {
    let mut builder = SyntaxTreeBuilder::new();
    builder.start_node(SyntaxKind::DOCUMENT);
    builder.token_with_handler(SyntaxKind::MARKUP_TEXT, "hello", EditHandler::MarkupText);
    builder.finish_node();
    builder.diagnostic("unterminated block", TextRange::empty(TextSize::new(5)));
    let tree = builder.finish().unwrap();

    let mut parser = PartialParser::new(tree);
    let (_, new_tree) = parser.parse(&SourceChange::insert(TextSize::new(5), "!"));
    assert_eq!(new_tree.diagnostics().len(), 1);
    assert_eq!(new_tree.diagnostics()[0].message, "unterminated block");
}
