use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;
use std::hint::black_box;

use magnetic_space_groups::catalogue::MagneticCatalogue;
use magnetic_space_groups::config::{CatalogueConfig, DEFAULT_ROUNDING_DECIMALS};
use magnetic_space_groups::interfaces::PointOperatorFamily;
use magnetic_space_groups::symmetries::{
    combine_with_centering, is_closed, multiplicity, parse_operation, to_text, Centering,
    NotationLabels,
};

const EXCERPT: &str = include_str!("../tests/data/magnetic_data_excerpt.txt");

fn bench_catalogue_parse(c: &mut Criterion) {
    let config = CatalogueConfig::default().with_expected_groups(6);
    c.bench_function("parse_catalogue_excerpt", |b| {
        b.iter(|| MagneticCatalogue::parse(black_box(EXCERPT), &config))
    });
}

fn bench_operator_algebra(c: &mut Criterion) {
    let config = CatalogueConfig::default().with_expected_groups(6);
    let catalogue = match MagneticCatalogue::parse(EXCERPT, &config) {
        Ok(catalogue) => catalogue,
        Err(e) => panic!("excerpt does not parse: {}", e),
    };
    let (generators, _) = catalogue
        .operators_with_centering(71, 536, PointOperatorFamily::NonHexagonal)
        .unwrap_or_default();
    let face_centering = Centering::FaceCentered.centering_vectors();

    let mut group = c.benchmark_group("operator_algebra");

    group.bench_function("combine_with_face_centering", |b| {
        b.iter(|| combine_with_centering(black_box(&generators), black_box(&face_centering)))
    });

    let full = combine_with_centering(&generators, &face_centering);
    group.bench_function("closure_check", |b| b.iter(|| is_closed(black_box(&full))));

    group.bench_function("general_multiplicity", |b| {
        b.iter(|| {
            multiplicity(
                black_box(&full),
                black_box(Vector3::new(0.12, 0.34, 0.56)),
                DEFAULT_ROUNDING_DECIMALS,
            )
        })
    });

    let labels = NotationLabels::default();
    group.bench_function("text_round_trip", |b| {
        b.iter(|| {
            full.iter()
                .map(|op| parse_operation(&to_text(op, &labels), &labels))
                .collect::<Result<Vec<_>, _>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_catalogue_parse, bench_operator_algebra);
criterion_main!(benches);
