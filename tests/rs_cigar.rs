use rs_cigar::{
    join,
    mode::{AlleleMerge, ParseMode},
    ops::{AlignOp, FromAlignOp},
    Cigar, CigarConfig, CigarRun, ParseError, VariantAllele,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Stand-in for an alignment library's own operation type.
#[derive(Debug, Clone, PartialEq)]
struct LibOp {
    len: u32,
    kind: u8,
}

impl AlignOp for LibOp {
    fn length(&self) -> u32 {
        self.len
    }

    fn code(&self) -> char {
        self.kind as char
    }
}

impl FromAlignOp for LibOp {
    fn from_parts(length: u32, code: char) -> Self {
        LibOp {
            len: length,
            kind: code as u8,
        }
    }
}

const CIGARS: [&str; 6] = ["10M2I3D5M", "5S10M5S", "20M", "1X1M1X", "3S2=1X4I", "7D"];

#[test]
fn test_render_round_trip() {
    for text in CIGARS {
        let cigar: Cigar = text.parse().unwrap();
        assert_eq!(cigar.to_string(), text);
        assert_eq!(cigar.to_string().parse::<Cigar>().unwrap(), cigar);
    }
}

#[test]
fn test_lengths_bounded_by_total() {
    for text in CIGARS {
        let cigar: Cigar = text.parse().unwrap();
        assert!(cigar.ref_len() <= cigar.total_len(), "{text}");
        assert!(cigar.read_len() <= cigar.total_len(), "{text}");
    }
}

#[test]
fn test_append_associative() {
    init_logger();
    let (a, b, c): (Cigar, Cigar, Cigar) = (
        "3S4M".parse().unwrap(),
        "2M1D".parse().unwrap(),
        "1D6M2S".parse().unwrap(),
    );

    let mut left = a.clone();
    left.append(&b).unwrap();
    left.append(&c).unwrap();

    let mut bc = b.clone();
    bc.append(&c).unwrap();
    let mut right = a.clone();
    right.append(&bc).unwrap();

    assert_eq!(left.to_string(), right.to_string());
    assert_eq!(left.to_string(), "3S6M2D6M2S");
}

#[test]
fn test_append_identities() {
    let x: Cigar = "2S8M1I".parse().unwrap();

    let mut empty = Cigar::new();
    empty.append(&x).unwrap();
    assert_eq!(empty, x);

    for op in ['M', 'I', 'D', 'S', 'X'] {
        let mut y = x.clone();
        y.append(&Cigar::from_run(0, op)).unwrap();
        assert_eq!(y, x);
    }
}

#[test]
fn test_join_partial_alignments() {
    init_logger();
    let parts: Vec<Cigar> = ["4S", "6M", "2M", "0M", "1I", "3M", "4S"]
        .iter()
        .map(|text| text.parse().unwrap())
        .collect();
    let joined = join(&parts).unwrap();
    assert_eq!(joined.to_string(), "4S8M1I3M4S");
}

#[test]
fn test_scenarios() {
    let cigar: Cigar = "10M2I3D5M".parse().unwrap();
    assert_eq!(
        cigar.runs(),
        [
            CigarRun::new(10, 'M'),
            CigarRun::new(2, 'I'),
            CigarRun::new(3, 'D'),
            CigarRun::new(5, 'M'),
        ]
    );
    assert_eq!((cigar.ref_len(), cigar.read_len()), (18, 17));

    let clipped: Cigar = "5S10M5S".parse().unwrap();
    assert_eq!((clipped.soft_clip_start(), clipped.soft_clip_end()), (5, 5));
    assert!(!clipped.is_reference());

    let mut merged = Cigar::from_run(5, 'M');
    merged.append(&"3M2I".parse().unwrap()).unwrap();
    assert_eq!(merged.to_string(), "8M2I");

    assert!(Cigar::from_run(20, 'M').is_reference());
}

#[test]
fn test_alleles() {
    let alleles = vec![
        VariantAllele::new("AC", "AC"),
        VariantAllele::new("G", "T"),
        VariantAllele::new("AC", "AC"),
    ];
    let legacy = Cigar::from_alleles(&alleles).unwrap();
    assert_eq!(legacy.to_string(), "2M1M2M");

    let config = CigarConfig {
        allele_merge: AlleleMerge::Coalesce,
        ..Default::default()
    };
    let coalesced = Cigar::from_alleles_with(&alleles, &config).unwrap();
    assert_eq!(coalesced.to_string(), "5M");
    assert!(coalesced.is_reference());
    assert_eq!(legacy.ref_len(), coalesced.ref_len());
}

#[test]
fn test_external_ops() {
    let lib_ops = vec![
        LibOp { len: 2, kind: b'S' },
        LibOp { len: 9, kind: b'M' },
        LibOp { len: 1, kind: b'D' },
    ];
    let cigar = Cigar::from_ops(&lib_ops);
    assert_eq!(cigar.to_string(), "2S9M1D");
    assert_eq!(cigar.to_ops::<LibOp>(), lib_ops);

    let mut out = vec![LibOp { len: 1, kind: b'H' }];
    cigar.write_ops(&mut out);
    assert_eq!(out, lib_ops);
}

#[test]
fn test_strict_and_lenient_parsing() {
    init_logger();
    assert_eq!("".parse::<Cigar>(), Err(ParseError::Empty));
    assert_eq!(
        "10".parse::<Cigar>(),
        Err(ParseError::MissingOperation { length: 10 })
    );
    assert_eq!(
        "S5M".parse::<Cigar>(),
        Err(ParseError::MissingLength { op: 'S', pos: 0 })
    );

    let lenient = CigarConfig {
        parse_mode: ParseMode::Lenient,
        ..Default::default()
    };
    assert!(Cigar::parse_with("", &lenient).unwrap().is_empty());
    assert!(Cigar::parse_with("10", &lenient).unwrap().is_empty());
    assert_eq!(
        Cigar::parse_with("5MM3I7", &lenient).unwrap().to_string(),
        "5M3I"
    );
}
