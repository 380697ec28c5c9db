use super::source_map::*;

#[test]
fn test_vlq_encode_positive() {
    assert_eq!(vlq::encode(0), "A");
    assert_eq!(vlq::encode(1), "C");
    assert_eq!(vlq::encode(15), "e");
    assert_eq!(vlq::encode(16), "gB");
}

#[test]
fn test_vlq_encode_negative() {
    assert_eq!(vlq::encode(-1), "D");
    assert_eq!(vlq::encode(-15), "f");
}

#[test]
fn test_vlq_decode() {
    for value in [-100, -1, 0, 1, 100, 1000, 123_456] {
        let encoded = vlq::encode(value);
        let (decoded, consumed) = vlq::decode(&encoded).unwrap();
        assert_eq!(decoded, value, "Failed for value {}", value);
        assert_eq!(consumed, encoded.len());
    }
}

#[test]
fn test_vlq_decode_rejects_bad_input() {
    assert_eq!(vlq::decode(""), None);
    assert_eq!(vlq::decode("!"), None);
    // Continuation bit set with nothing following.
    assert_eq!(vlq::decode("g"), None);
}

#[test]
fn test_generator_registers_sources_once() {
    let mut generator = SourceMapGenerator::new("main.brs");
    assert_eq!(generator.add_source("source/main.bs"), 0);
    assert_eq!(generator.add_source("source/lib.bs"), 1);
    assert_eq!(generator.add_source("source/main.bs"), 0);
    let map = generator.generate();
    assert_eq!(map.sources, vec!["source/main.bs", "source/lib.bs"]);
    assert_eq!(map.version, 3);
    assert_eq!(map.file, "main.brs");
}

#[test]
fn test_generator_encodes_lines_and_deltas() {
    let mut generator = SourceMapGenerator::new("out.brs");
    let source = generator.add_source("in.bs");
    generator.add_mapping(Mapping {
        generated_line: 0,
        generated_column: 0,
        source,
        original_line: 0,
        original_column: 0,
        name: None,
    });
    generator.add_mapping(Mapping {
        generated_line: 0,
        generated_column: 4,
        source,
        original_line: 0,
        original_column: 6,
        name: None,
    });
    generator.add_mapping(Mapping {
        generated_line: 2,
        generated_column: 2,
        source,
        original_line: 3,
        original_column: 1,
        name: None,
    });
    let map = generator.generate();
    // line 0: [0,0,0,0] [4,0,0,6]; line 1 empty; line 2: [2,0,3,-5]
    assert_eq!(map.mappings, "AAAA,IAAM;;EAGL");
}

#[test]
fn test_generator_coalesces_identical_origins() {
    let mut generator = SourceMapGenerator::new("out.brs");
    let source = generator.add_source("in.bs");
    let mapping = Mapping {
        generated_line: 1,
        generated_column: 0,
        source,
        original_line: 5,
        original_column: 2,
        name: None,
    };
    generator.add_mapping(mapping);
    generator.add_mapping(Mapping {
        generated_column: 7,
        ..mapping
    });
    assert_eq!(generator.mappings().len(), 1);

    // Same origin on a new generated line is kept.
    generator.add_mapping(Mapping {
        generated_line: 2,
        ..mapping
    });
    assert_eq!(generator.mappings().len(), 2);
}

#[test]
fn test_generator_names_are_encoded() {
    let mut generator = SourceMapGenerator::new("out.brs");
    let source = generator.add_source("in.bs");
    let name = generator.add_name("Foo_bar");
    assert_eq!(generator.add_name("Foo_bar"), name);
    generator.add_mapping(Mapping {
        generated_line: 0,
        generated_column: 0,
        source,
        original_line: 0,
        original_column: 0,
        name: Some(name),
    });
    let map = generator.generate();
    assert_eq!(map.names, vec!["Foo_bar"]);
    assert_eq!(map.mappings, "AAAAA");
}

#[test]
fn test_source_map_json_round_trip() {
    let mut generator = SourceMapGenerator::new("out.brs");
    generator.set_source_root(Some("pkg:/".to_string()));
    generator.add_source("in.bs");
    let map = generator.generate();
    let json = map.to_json().unwrap();
    assert!(json.contains("\"sourceRoot\":\"pkg:/\""), "json: {json}");
    assert_eq!(SourceMap::from_json(&json).unwrap(), map);
}
