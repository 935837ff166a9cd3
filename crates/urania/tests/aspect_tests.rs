use urania::aspects::{AspectCalculator, AspectKind, AspectTable};
use urania::{ParseError, Planet, PlanetPosition, ZodiacSign};

fn placed(name: Planet, sign: ZodiacSign, degree: f64) -> PlanetPosition {
    PlanetPosition::new(name, sign, degree, 1, false)
}

#[test]
fn test_calculate_aspect_conjunction() {
    let calculator = AspectCalculator::new();

    // Two planets 2 degrees apart, inside the 8 degree orb
    let aspect = calculator.calculate_aspect(100.0, 102.0);

    assert!(aspect.is_some());
    let aspect = aspect.unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!(aspect.orb <= 8.0);
}

#[test]
fn test_calculate_aspect_opposition() {
    let calculator = AspectCalculator::new();

    // 178 degrees apart
    let aspect = calculator.calculate_aspect(100.0, 278.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert_eq!(aspect.orb, 2.0);
}

#[test]
fn test_exact_opposition_between_planets() {
    let planets = vec![
        placed(Planet::Sun, ZodiacSign::Aries, 12.5),
        placed(Planet::Moon, ZodiacSign::Libra, 12.5),
    ];

    let aspects = AspectCalculator::new().generate_aspects(&planets);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].planet1, Planet::Sun);
    assert_eq!(aspects[0].planet2, Planet::Moon);
    assert_eq!(aspects[0].aspect, AspectKind::Opposition);
    assert_eq!(aspects[0].angle, 180.0);
    assert_eq!(aspects[0].orb, 0.0);
}

#[test]
fn test_pairs_follow_nested_order() {
    let planets = vec![
        placed(Planet::Sun, ZodiacSign::Aries, 0.0),
        placed(Planet::Moon, ZodiacSign::Leo, 0.0),
        placed(Planet::Mercury, ZodiacSign::Sagittarius, 0.0),
        placed(Planet::Venus, ZodiacSign::Taurus, 0.0),
    ];

    let aspects = AspectCalculator::new().generate_aspects(&planets);
    let pairs: Vec<(Planet, Planet)> = aspects.iter().map(|a| (a.planet1, a.planet2)).collect();

    // Grand trine between the first three; Venus squares the Moon only
    assert_eq!(
        pairs,
        vec![
            (Planet::Sun, Planet::Moon),
            (Planet::Sun, Planet::Mercury),
            (Planet::Moon, Planet::Mercury),
            (Planet::Moon, Planet::Venus),
        ]
    );
    assert!(aspects[..3].iter().all(|a| a.aspect == AspectKind::Trine));
    assert_eq!(aspects[3].aspect, AspectKind::Square);
}

#[test]
fn test_one_aspect_per_pair_with_wide_orbs() {
    // Orbs wide enough that 90 degrees falls inside both trine and square
    let table = AspectTable::default()
        .with_orb(AspectKind::Trine, 30.0)
        .with_orb(AspectKind::Square, 30.0);
    let planets = vec![
        placed(Planet::Sun, ZodiacSign::Aries, 0.0),
        placed(Planet::Mars, ZodiacSign::Cancer, 0.0),
    ];

    let aspects = AspectCalculator::with_table(table).generate_aspects(&planets);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect, AspectKind::Trine);
    assert_eq!(aspects[0].orb, 30.0);
}

#[test]
fn test_aspect_names_parse() {
    assert_eq!("  sextile ".parse::<AspectKind>(), Ok(AspectKind::Sextile));
    assert_eq!(
        "quincunx".parse::<AspectKind>(),
        Err(ParseError::UnknownAspect("quincunx".to_string()))
    );
    assert_eq!(
        ParseError::UnknownAspect("quincunx".to_string()).to_string(),
        "unknown aspect: quincunx"
    );
}
