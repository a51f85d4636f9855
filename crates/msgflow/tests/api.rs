//! Tests for the public API in lib.rs

use msgflow::prelude::*;
use msgflow::{parse, render, render_lines, render_reader};

const RULE: &str = r"#!MF:regex:(\w+)->(\w+): (\w+) (.*), #!MF:reformat_to:src:@1, dst:@2, msg_id:@3, extra_info:@4";

#[test]
fn test_round_trip_extraction() {
    let config = MsgFlowConfig::new().with_rule(ExtractionRule::new(
        r"(\w+)->(\w+): (\w+) (.*)",
        "src:@1, dst:@2, msg_id:@3, extra_info:@4",
    ));
    let flow = msgflow::flow::extract("A->B: REQ details here", &config).unwrap();
    assert_eq!(flow.source, "A");
    assert_eq!(flow.destination, "B");
    assert_eq!(flow.message_id, "REQ");
    assert_eq!(flow.extra_info, "details here");
}

#[test]
fn test_ping_scenario() {
    let input = format!("{}\n#!MF:main_actor:A\nA->B: PING hello", RULE);
    let output = render(&input).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "A   B   ");
    assert_eq!(lines[1], "|-->|    PING   hello");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_unmatched_line_tagged_zero() {
    let input = "#!MF:unknwn_msg_as_extra_info:\nsystem booting";
    let output = render(input).unwrap();
    assert_eq!(output, "   \n[0] system booting\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(render("").unwrap(), "   \n");
    assert_eq!(render_lines(Vec::<String>::new()), "   \n");
}

#[test]
fn test_no_rules_only_main_actor() {
    let output = render("#!MF:main_actor:gw\nA->B: PING x\nB->A: PONG y").unwrap();
    assert_eq!(output, "gw   \n");
}

#[test]
fn test_draw_from_right() {
    let input = format!(
        "{}\n#!MF:main_actor:A\n#!MF:draw_from_right:\nA->B: PING hello",
        RULE
    );
    let output = render(&input).unwrap();
    assert_eq!(output, "B   A   \n|<--|    PING   hello\n");
}

#[test]
fn test_self_message_and_ordinals() {
    let input = format!(
        "{}\n#!MF:main_actor:A\n#!MF:unknwn_msg_as_extra_info:\nA->A: TICK self\nnoise\nA->B: PING x",
        RULE
    );
    let output = render(&input).unwrap();
    assert_eq!(
        output,
        "A   B   \n*   |    TICK   [1] self\n|-->|    PING   [2] x\n[1] noise\n"
    );
}

#[test]
fn test_reader_matches_str() {
    let input = format!("{}\n#!MF:main_actor:A\nA->B: PING hello\nB->C: FWD it\n", RULE);
    assert_eq!(render_reader(input.as_bytes()).unwrap(), render(&input).unwrap());
}

#[test]
fn test_parse_exposes_rule_rejections() {
    let input = "#!MF:regex:no groups, #!MF:reformat_to:x\n#!MF:regex:(a)(b, #!MF:reformat_to:y";
    let db = parse(input).unwrap();
    let reasons: Vec<_> = db
        .config()
        .rules
        .iter()
        .map(|r| r.rejection().cloned())
        .collect();
    assert_eq!(
        reasons,
        vec![
            Some(RuleRejection::NoGroups),
            Some(RuleRejection::Unbalanced { open: 2, close: 1 }),
        ]
    );
}

#[test]
fn test_trait_pipeline() {
    let parser = MsgFlowParser::new();
    let mut db = MsgFlowDatabase::new();
    parser
        .parse(&format!("{}\nX->Y: M e", RULE), &mut db)
        .unwrap();

    let actors = order_actors(db.flows(), db.config());
    assert_eq!(actors.as_slice(), ["", "X", "Y"]);

    let output = MsgFlowRenderer::new().render(&db).unwrap();
    assert_eq!(output, "   X   Y   \n|  |-->|    M   e\n");
}
