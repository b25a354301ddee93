//! KEGG list parser integration tests

use kegg_common::types::{
    AddendumGeneRecord, Category, GenomicLocation, ListRecord, OrthologRecord, Strand,
};
use kegg_common::KeggError;
use kegg_ingest::list::{parse_list, ListParser};

const PATHWAY_LIST: &str = "map00010\tGlycolysis / Gluconeogenesis\n\
                            map00020\tCitrate cycle (TCA cycle)\n\
                            map00030\tPentose phosphate pathway\n";

const KO_LIST: &str = "K00001\tE1.1.1.1, adh; alcohol dehydrogenase [EC:1.1.1.1]\n\
                       K00844\tHK; hexokinase [EC:2.7.1.1]\n\
                       K99999\tsome enzyme\n";

const GENE_LIST: &str = "hsa:001\tCDS\t1\tTP53; tumor protein\n\
                         hsa:002\tCDS\t1:complement(100..200)\tFOO; bar\n\
                         hsa:003\tncRNA\tX:5..10, Y:complement(20..30)\tuncharacterized RNA\n";

#[test]
fn test_pathway_records_follow_input_order() {
    let records = parse_list(PATHWAY_LIST, "pathway").unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["map00010", "map00020", "map00030"]);
    assert!(records.iter().all(|r| r.category() == Category::Pathway));
}

#[test]
fn test_ortholog_examples() {
    let records = parse_list(KO_LIST, "ko").unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(
        records[1],
        ListRecord::Ortholog(OrthologRecord {
            id: "K00844".to_string(),
            symbols: vec!["HK".to_string()],
            name: "hexokinase".to_string(),
            enzyme_codes: vec!["2.7.1.1".to_string()],
        })
    );
    assert_eq!(
        records[2],
        ListRecord::Ortholog(OrthologRecord {
            id: "K99999".to_string(),
            symbols: vec![],
            name: "some enzyme".to_string(),
            enzyme_codes: vec![],
        })
    );
}

#[test]
fn test_gene_locations() {
    let records = parse_list(GENE_LIST, "genes").unwrap();
    assert_eq!(records.len(), 3);

    let genes: Vec<_> = records
        .into_iter()
        .map(|r| match r {
            ListRecord::Gene(gene) => gene,
            other => panic!("Expected gene record, got {:?}", other),
        })
        .collect();

    assert_eq!(genes[0].locations, vec![GenomicLocation::unplaced("1")]);
    assert_eq!(genes[0].symbols, vec!["TP53"]);
    assert_eq!(genes[0].description, "tumor protein");

    assert_eq!(
        genes[1].locations,
        vec![GenomicLocation::ranged("1", Strand::Forward, 100, 200)]
    );

    assert_eq!(
        genes[2].locations,
        vec![
            GenomicLocation::ranged("X", Strand::Reverse, 5, 10),
            GenomicLocation::ranged("Y", Strand::Forward, 20, 30),
        ]
    );
    assert!(genes[2].symbols.is_empty());
    assert!(genes.iter().flat_map(|g| &g.locations).all(|l| l.is_consistent()));
}

#[test]
fn test_addendum_gene_without_symbol() {
    let records = parse_list("ag:1\tsome protein (EC:1.1.1.1)\n", "ag").unwrap();

    assert_eq!(
        records,
        vec![ListRecord::AddendumGene(AddendumGeneRecord {
            id: "ag:1".to_string(),
            symbol: None,
            name: "some protein".to_string(),
            enzyme_codes: vec!["1.1.1.1".to_string()],
        })]
    );
}

#[test]
fn test_viral_lists() {
    let genes = parse_list(
        "vg:155971\tE6; Human papillomavirus type 16; transforming protein E6\n",
        "vg",
    )
    .unwrap();
    let ListRecord::ViralGene(gene) = &genes[0] else {
        panic!("Expected viral gene record");
    };
    assert_eq!(gene.symbols, vec!["E6"]);
    assert_eq!(gene.organism, "Human papillomavirus type 16");

    let peptides = parse_list("vp:155971_1\tE6 protein\nvp:155971_2\tE7 protein\n", "vp").unwrap();
    assert_eq!(peptides.len(), 2);
}

#[test]
fn test_brite_and_module_lists() {
    let brite = parse_list("br08901\tKEGG pathway maps\nbr08902\tBRITE hierarchy files\n", "brite")
        .unwrap();
    assert_eq!(brite.len(), 2);

    let modules = parse_list("M00001\tGlycolysis (Embden-Meyerhof pathway)\n", "module").unwrap();
    assert_eq!(modules[0].category(), Category::Module);
}

#[test]
fn test_malformed_pathway_aborts_whole_call() {
    let content = "map00010\tGlycolysis\nmap00020\tCitrate cycle\textra\nmap00030\tPentose\n";

    let err = parse_list(content, "pathway").unwrap_err();
    assert_eq!(err.line_num(), Some(2));
    assert!(matches!(
        err.innermost(),
        KeggError::MalformedLine {
            category: Category::Pathway,
            ..
        }
    ));
}

#[test]
fn test_bad_coordinate_aborts_whole_call() {
    let content = "hsa:001\tCDS\t1\tTP53; tumor protein\nhsa:002\tCDS\t1:complement(100..\tFOO; bar\n";

    let err = parse_list(content, "genes").unwrap_err();
    assert_eq!(err.line_num(), Some(2));
    assert!(matches!(err.innermost(), KeggError::NumericParse { .. }));
}

#[test]
fn test_unsupported_categories() {
    for tag in ["organism", "compound", "glycan", "reaction", "enzyme"] {
        let err = parse_list("C00001\tH2O; Water\n", tag).unwrap_err();
        assert!(matches!(err, KeggError::UnsupportedCategory(ref t) if t == tag));
    }
}

#[test]
fn test_crlf_line_endings() {
    let records = parse_list("M00001\tGlycolysis\r\nM00002\tGlycolysis core\r\n", "module").unwrap();
    let ListRecord::Module(module) = &records[1] else {
        panic!("Expected module record");
    };
    assert_eq!(module.name, "Glycolysis core");
}

#[test]
fn test_parsers_are_independent_across_threads() {
    let parser = ListParser::new(Category::Gene).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parser.parse(GENE_LIST).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for records in &results {
        assert_eq!(records, &results[0]);
    }
}
