use crate::parser::parse;
use crate::semantic::*;
use crate::{FerryError, ResourceLimits, Side};

const FARMER: &str = r#"
# the classic
puzzle farmer "Ferry a wolf, a goat and a cabbage"
boat capacity 2 at left
passenger Farmer navigator
passenger Wolf
passenger Goat
passenger Cabbage weight 1
Goat dies with Wolf unless Farmer
Cabbage dies with Goat unless Farmer
start left
goal right
"#;

fn parse_ok(input: &str) -> Vec<PuzzleDoc> {
    parse(input, "test.river", &ResourceLimits::default()).unwrap()
}

#[test]
fn test_parse_farmer() {
    let docs = parse_ok(FARMER);
    assert_eq!(docs.len(), 1);

    let doc = &docs[0];
    assert_eq!(doc.name, "farmer");
    assert_eq!(
        doc.description.as_deref(),
        Some("Ferry a wolf, a goat and a cabbage")
    );
    assert_eq!(doc.start_line, 3);
    assert_eq!(doc.source, "test.river");

    assert_eq!(doc.boats.len(), 1);
    assert_eq!(doc.boats[0].capacity, 2);
    assert_eq!(doc.boats[0].side, Some(Side::Left));
    assert!(!doc.boats[0].keep_passengers);

    let species: Vec<&str> = doc.passengers.iter().map(|p| p.species.as_str()).collect();
    assert_eq!(species, vec!["Farmer", "Wolf", "Goat", "Cabbage"]);
    assert!(doc.passengers[0].navigator);
    assert!(!doc.passengers[1].navigator);

    assert_eq!(doc.threats.len(), 2);
    assert_eq!(doc.starts[0].side, Side::Left);
    assert_eq!(doc.goals[0].side, Side::Right);
}

#[test]
fn test_parse_guarded_threat() {
    let docs = parse_ok(FARMER);
    let threat = &docs[0].threats[0];
    assert_eq!(threat.subject, "Goat");
    match &threat.threat {
        ThreatExpr::Guarded {
            killer,
            protector: Some(protector),
        } => {
            assert_eq!(killer.kind, RelationExprKind::Species("Wolf".to_string()));
            assert_eq!(
                protector.kind,
                RelationExprKind::Species("Farmer".to_string())
            );
        }
        other => panic!("Expected guarded threat, got {:?}", other),
    }
}

#[test]
fn test_parse_multiplicity_weight_and_quotes() {
    let docs = parse_ok(
        r#"
puzzle couples
boat capacity 3 at right keep passengers
passenger "Husband 1" navigator
passenger Ox x2 weight 3
start right
goal left
"#,
    );
    let doc = &docs[0];
    assert_eq!(doc.boats[0].side, Some(Side::Right));
    assert!(doc.boats[0].keep_passengers);
    assert_eq!(doc.passengers[0].species, "Husband 1");
    assert_eq!(doc.passengers[1].count, 2);
    assert_eq!(doc.passengers[1].weight, 3);
    assert!(doc.description.is_none());
}

#[test]
fn test_and_binds_tighter_than_or() {
    let docs = parse_ok(
        r#"
puzzle p
boat capacity 2
passenger A navigator
passenger B
passenger C
passenger D
D dies with A or B and C
start left
goal right
"#,
    );
    let ThreatExpr::Guarded { killer, protector } = &docs[0].threats[0].threat else {
        panic!("Expected guarded threat");
    };
    assert!(protector.is_none());
    assert_eq!(killer.to_string(), "(A or (B and C))");
}

#[test]
fn test_parentheses_group() {
    let docs = parse_ok(
        r#"
puzzle p
boat capacity 2
passenger A navigator
passenger B
passenger C
C dies with (A or B) and C unless A
start left
goal right
"#,
    );
    let ThreatExpr::Guarded { killer, .. } = &docs[0].threats[0].threat else {
        panic!("Expected guarded threat");
    };
    assert_eq!(killer.to_string(), "((A or B) and C)");
    let leaves: Vec<&str> = killer.leaves().into_iter().map(|(name, _)| name).collect();
    assert_eq!(leaves, vec!["A", "B", "C"]);
}

#[test]
fn test_parse_count_threat() {
    let docs = parse_ok(
        r#"
puzzle missionaries
boat capacity 2
passenger Missionary x3 navigator
passenger Cannibal x3 navigator
Missionary dies when Cannibal outnumbers Missionary
start left
goal right
"#,
    );
    match &docs[0].threats[0].threat {
        ThreatExpr::Count {
            killers,
            protectors,
        } => {
            assert_eq!(killers.to_string(), "Cannibal");
            assert_eq!(protectors.to_string(), "Missionary");
        }
        other => panic!("Expected count threat, got {:?}", other),
    }
}

#[test]
fn test_species_may_start_with_keyword() {
    let docs = parse_ok(
        r#"
puzzle p
boat capacity 2
passenger Orca navigator
passenger Android
passenger starling
starling dies with Orca or Android
start left
goal right
"#,
    );
    assert_eq!(docs[0].threats[0].subject, "starling");
    let ThreatExpr::Guarded { killer, .. } = &docs[0].threats[0].threat else {
        panic!("Expected guarded threat");
    };
    assert_eq!(killer.to_string(), "(Orca or Android)");
}

#[test]
fn test_several_puzzles_in_one_file() {
    let docs = parse_ok(
        r#"
puzzle first
boat capacity 1
passenger Rower navigator
start left
goal right

puzzle second
boat capacity 1
passenger Rower navigator
start right
goal left
"#,
    );
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].name, "second");
    assert_eq!(docs[1].start_line, 8);
}

#[test]
fn test_empty_input_has_no_puzzles() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("  \n# only a comment\n").is_empty());
}

#[test]
fn test_syntax_error_has_position() {
    let result = parse(
        "puzzle p\nboat capacity two\n",
        "broken.river",
        &ResourceLimits::default(),
    );
    match result {
        Err(FerryError::Parse(details)) => {
            assert_eq!(details.source_id, "broken.river");
            assert_eq!(details.span.line, 2);
            assert!(details.message.starts_with("Parse error"));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_number_too_large() {
    let result = parse(
        "puzzle p\nboat capacity 99999999999\nstart left\ngoal right\n",
        "big.river",
        &ResourceLimits::default(),
    );
    match result {
        Err(FerryError::Parse(details)) => {
            assert!(details.message.contains("too large"));
            assert_eq!(details.puzzle_name, "p");
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_file_size_limit() {
    let limits = ResourceLimits {
        max_file_size_bytes: 50,
        ..ResourceLimits::default()
    };
    match parse(FARMER, "big.river", &limits) {
        Err(FerryError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_file_size_bytes");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_relation_depth_limit_on_parentheses() {
    let limits = ResourceLimits {
        max_relation_depth: 4,
        ..ResourceLimits::default()
    };
    let input = format!(
        "puzzle p\nboat capacity 1\npassenger A navigator\nA dies with {}A{}\nstart left\ngoal right\n",
        "(".repeat(10),
        ")".repeat(10)
    );
    match parse(&input, "deep.river", &limits) {
        Err(FerryError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_relation_depth");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_long_operator_chain_stays_shallow() {
    let chain = vec!["Wolf"; 70].join(" or ");
    let input = format!(
        "puzzle p\nboat capacity 1\npassenger Goat navigator\npassenger Wolf\nGoat dies with {}\nstart left\ngoal right\n",
        chain
    );
    let docs = parse_ok(&input);
    let ThreatExpr::Guarded { killer, .. } = &docs[0].threats[0].threat else {
        panic!("Expected guarded threat");
    };
    assert_eq!(killer.leaves().len(), 70);
}

#[test]
fn test_operator_chain_keeps_leaf_order() {
    let docs = parse_ok(
        "puzzle p\nboat capacity 1\npassenger A navigator\npassenger B\npassenger C\npassenger D\nA dies with B and C and D and A\nstart left\ngoal right\n",
    );
    let ThreatExpr::Guarded { killer, .. } = &docs[0].threats[0].threat else {
        panic!("Expected guarded threat");
    };
    assert_eq!(killer.to_string(), "((B and C) and (D and A))");
}

#[test]
fn test_relation_depth_limit_on_operator_chain() {
    let limits = ResourceLimits {
        max_relation_depth: 4,
        ..ResourceLimits::default()
    };
    // 32 operands fold into a tree six levels deep
    let chain = vec!["A"; 32].join(" or ");
    let input = format!(
        "puzzle p\nboat capacity 1\npassenger A navigator\nA dies with {}\nstart left\ngoal right\n",
        chain
    );
    match parse(&input, "chain.river", &limits) {
        Err(FerryError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_relation_depth");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_parentheses_in_comments_are_ignored() {
    let limits = ResourceLimits {
        max_relation_depth: 2,
        ..ResourceLimits::default()
    };
    let input = "# ((((((((\npuzzle p \"(((((\"\nboat capacity 1\npassenger A navigator\nstart left\ngoal right\n";
    assert_eq!(parse(input, "c.river", &limits).unwrap().len(), 1);
}
