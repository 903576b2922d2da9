use cobtrace::application::AnalyzeUsecase;
use cobtrace::domain::calltree::CallTree;
use cobtrace::domain::scanner::CobolScanner;
use cobtrace::infrastructure::TextRenderer;

fn analyze(source: &str, start: &str) -> cobtrace::application::AnalysisReport {
    let scanner = CobolScanner::new();
    let usecase = AnalyzeUsecase {
        scanner: &scanner,
        renderer: &TextRenderer,
    };
    usecase.run(source, start).unwrap()
}

#[test]
fn source_without_paragraphs_yields_a_clean_single_leaf() {
    let report = analyze("MOVE A TO B.\nDISPLAY 'X'.\n", "100-START");
    assert_eq!(report.tree.name, "100-START");
    assert!(report.tree.children.is_empty());
    assert!(!report.tree.uses_sql);
    assert!(!report.contains_sql);
    assert_eq!(report.rendered, "- 100-START\n");
}

#[test]
fn sql_in_a_performed_paragraph_is_reachable() {
    let source = "\
100-START
    PERFORM 200-PROC
200-PROC
    EXEC SQL SELECT 1 END-EXEC
";
    let report = analyze(source, "100-START");
    assert_eq!(report.tree.children.len(), 1);
    let child = &report.tree.children[0];
    assert_eq!(child.name, "200-PROC");
    assert!(child.uses_sql);
    assert!(report.contains_sql);
    assert_eq!(
        report.rendered,
        "- 100-START\n  - 200-PROC (Uses EXEC SQL)\n"
    );
}

#[test]
fn self_performing_paragraph_terminates() {
    let source = "\
100-START.
    PERFORM 100-START.
";
    let report = analyze(source, "100-START");
    assert_eq!(report.tree.name, "100-START");
    assert_eq!(report.tree.children.len(), 1);
    let second = &report.tree.children[0];
    assert_eq!(second.name, "100-START");
    assert!(second.children.is_empty());
    assert!(!report.contains_sql);
}

#[test]
fn leaf_start_paragraph_without_sql_is_clean() {
    let source = "\
100-START.
    DISPLAY 'DONE'.
";
    let report = analyze(source, "100-START");
    assert!(report.tree.children.is_empty());
    assert!(!report.contains_sql);
}

#[test]
fn mutual_recursion_produces_a_finite_tree() {
    let source = "\
100-A.
    PERFORM 200-B.
200-B.
    PERFORM 100-A.
";
    let report = analyze(source, "100-A");
    // A -> B -> A(truncated)
    let b = &report.tree.children[0];
    assert_eq!(b.name, "200-B");
    let truncated = &b.children[0];
    assert_eq!(truncated.name, "100-A");
    assert!(truncated.children.is_empty());
}

#[test]
fn realistic_program_flags_transitive_sql_use() {
    let source = "\
       IDENTIFICATION DIVISION.
       PROGRAM-ID. ORDERRPT.
       PROCEDURE DIVISION.
       100-MAIN.
           PERFORM 200-INIT
           PERFORM 300-PROCESS UNTIL EOF-REACHED
           PERFORM 400-CLEANUP
           STOP RUN.
       200-INIT.
           OPEN INPUT ORDER-FILE.
       300-PROCESS.
           READ ORDER-FILE
           PERFORM 310-LOOKUP-CUSTOMER.
       310-LOOKUP-CUSTOMER.
           EXEC SQL
               SELECT NAME INTO :WS-NAME FROM CUSTOMERS
           END-EXEC.
       400-CLEANUP.
           CLOSE ORDER-FILE.
";
    let report = analyze(source, "100-MAIN");
    let names: Vec<&str> = report
        .tree
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["200-INIT", "300-PROCESS", "400-CLEANUP"]);
    assert!(report.contains_sql);
    assert!(report.rendered.contains("    - 310-LOOKUP-CUSTOMER (Uses EXEC SQL)"));
}

#[test]
fn start_from_a_clean_subtree_ignores_sql_elsewhere() {
    let source = "\
100-MAIN.
    PERFORM 200-DB.
200-DB.
    EXEC SQL DELETE FROM T END-EXEC.
300-UTIL.
    DISPLAY 'NO DB HERE'.
";
    let report = analyze(source, "300-UTIL");
    assert!(!report.contains_sql);
    assert_eq!(report.rendered, "- 300-UTIL\n");
}

#[test]
fn tree_is_identical_across_repeated_runs() {
    let source = "\
100-MAIN.
    PERFORM 200-A.
    PERFORM 200-A.
200-A.
    PERFORM 300-B.
300-B.
";
    let first = CallTree::build(&CobolScanner::new().scan(source), "100-MAIN");
    let second = CallTree::build(&CobolScanner::new().scan(source), "100-MAIN");

    // First 200-A expands, the duplicate sibling is truncated. Both runs agree.
    for tree in [&first, &second] {
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].children.len(), 1);
        assert!(tree.children[1].children.is_empty());
    }
}
