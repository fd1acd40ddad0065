//! Record-rendering scenarios locked against the shell's output contract:
//! copy-pasting any rendered value back into a query must mean the same
//! thing it meant in the result.

use gloam_shell::graph::{Edge, Node, Path};
use gloam_shell::prettyprint::{Format, LineBuffer, PrettyPrinter};
use gloam_shell::result::{ListResult, Record, Summary};
use gloam_shell::value::Value;

fn format_records(records: Vec<Record>) -> String {
    let printer = PrettyPrinter::new(Format::Plain, -1, false);
    let mut result = ListResult::new(records, Summary::default());
    let mut sink = LineBuffer::new();
    printer
        .format(&mut result, &mut sink)
        .expect("formatting succeeds");
    sink.into_string()
}

#[test]
fn prints_header_once_and_lists_per_record() {
    let first = Record::new(
        vec!["col1".to_string(), "col2".to_string()],
        vec![
            Value::List(vec![Value::from("val1_1"), Value::from("val1_2")]),
            Value::List(vec![Value::from("val2_1")]),
        ],
    );
    let second = Record::new(
        vec!["col1".to_string()],
        vec![Value::List(vec![Value::from("val2_1")])],
    );
    assert_eq!(
        format_records(vec![first, second]),
        "col1, col2\n[val1_1, val1_2], [val2_1]\n[val2_1]\n"
    );
}

#[test]
fn empty_results_print_nothing() {
    assert_eq!(format_records(Vec::new()), "");
}

#[test]
fn prints_node_with_labels_and_properties() {
    let node = Node::new(1)
        .with_label("label1")
        .with_label("label2")
        .with_property("prop1", "prop1_value")
        .with_property("prop2", "prop2_value");
    let record = Record::new(vec!["node".to_string()], vec![Value::Node(node)]);
    assert_eq!(
        format_records(vec![record]),
        "node\n(:label1:label2 {prop1: prop1_value, prop2: prop2_value})\n"
    );
}

#[test]
fn prints_relationship_with_type_and_properties() {
    let edge = Edge::new(7, 1, 2, "RELATIONSHIP_TYPE")
        .with_property("prop1", "prop1_value")
        .with_property("prop2", "prop2_value");
    let record = Record::new(vec!["rel".to_string()], vec![Value::Edge(edge)]);
    assert_eq!(
        format_records(vec![record]),
        "rel\n[:RELATIONSHIP_TYPE {prop1: prop1_value, prop2: prop2_value}]\n"
    );
}

#[test]
fn escapes_identifiers_but_never_property_values() {
    let edge = Edge::new(7, 1, 2, "RELATIONSHIP,TYPE")
        .with_property("prop1", "\"prop1, value\"")
        .with_property("prop2", "prop2_value");
    let node = Node::new(1)
        .with_label("label `1")
        .with_label("label2")
        .with_property("prop1", "\"prop1:value\"")
        .with_property("1prop2", "\"\"")
        .with_property("ä", "not-escaped");
    let record = Record::new(
        vec!["rel".to_string(), "node".to_string()],
        vec![Value::Edge(edge), Value::Node(node)],
    );
    assert_eq!(
        format_records(vec![record]),
        "rel, node\n\
         [:`RELATIONSHIP,TYPE` {prop1: \"prop1, value\", prop2: prop2_value}], \
         (:`label ``1`:label2 {`1prop2`: \"\", prop1: \"prop1:value\", ä: not-escaped})\n"
    );
}

#[test]
fn path_arrows_follow_traversal_not_canonical_direction() {
    let start = Node::new(1)
        .with_label("start")
        .with_property("prop1", "prop1_value");
    let middle = Node::new(2).with_label("middle");
    let end = Node::new(3)
        .with_label("end")
        .with_property("prop2", "prop2_value");

    // Same relationship type both hops; the second hop runs against its
    // relationship's canonical direction (canonical start is the far node).
    let forward = Edge::new(10, 1, 2, "RELATIONSHIP_TYPE");
    let backward = Edge::new(10, 3, 2, "RELATIONSHIP_TYPE");
    let path = Path::new(start.clone())
        .with_segment(start, middle.clone(), forward)
        .with_segment(middle, end, backward);

    let record = Record::new(vec!["path".to_string()], vec![Value::Path(path)]);
    assert_eq!(
        format_records(vec![record]),
        "path\n\
         (:start {prop1: prop1_value})-[:RELATIONSHIP_TYPE]->\
         (:middle)<-[:RELATIONSHIP_TYPE]-(:end {prop2: prop2_value})\n"
    );
}

#[test]
fn single_segment_path_renders_forward() {
    let start = Node::new(1).with_label("start");
    let end = Node::new(2).with_label("end");
    let edge = Edge::new(10, 1, 2, "RELATIONSHIP_TYPE");
    let path = Path::new(start.clone()).with_segment(start, end, edge);

    let record = Record::new(vec!["path".to_string()], vec![Value::Path(path)]);
    assert_eq!(
        format_records(vec![record]),
        "path\n(:start)-[:RELATIONSHIP_TYPE]->(:end)\n"
    );
}

#[test]
fn three_segment_path_flips_direction_twice() {
    let start = Node::new(1).with_label("start");
    let second = Node::new(2).with_label("second");
    let third = Node::new(3).with_label("third");
    let end = Node::new(4).with_label("end");

    let hop1 = Edge::new(10, 1, 2, "RELATIONSHIP_TYPE");
    let hop2 = Edge::new(11, 3, 2, "RELATIONSHIP_TYPE");
    let hop3 = Edge::new(12, 3, 4, "RELATIONSHIP_TYPE");
    let path = Path::new(start.clone())
        .with_segment(start, second.clone(), hop1)
        .with_segment(second, third.clone(), hop2)
        .with_segment(third, end, hop3);

    let record = Record::new(vec!["path".to_string()], vec![Value::Path(path)]);
    assert_eq!(
        format_records(vec![record]),
        "path\n\
         (:start)-[:RELATIONSHIP_TYPE]->(:second)\
         <-[:RELATIONSHIP_TYPE]-(:third)-[:RELATIONSHIP_TYPE]->(:end)\n"
    );
}
