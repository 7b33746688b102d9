//! Benchmarks for scenename-parser.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scenename_parser::config::ParserConfig;
use scenename_parser::{Parser, ReleaseType};

const MOVIE_SAMPLES: &[&str] = &[
    "Random.Movie.Name.2015.German.DL.1080p.BluRay.x265-ReleaseGroup",
    "Random.Movie.Name.666.2015.German.DL.1080p.BluRay.x265-ReleaseGroup",
    "Random Movie Name 666 2022 DIRECTORS CUT German DD71 2160p DV DL HDR10 WebUHD x265-ReleaseGroup",
    "Some_Old_Movie_1999_720p_WEBRip_x264-GRP",
];

const SHOW_SAMPLES: &[&str] = &[
    "Random.Show.Name.S03.Complete.German.DL.1080p.BluRay.x265-ReleaseGroup",
    "Random.Show.Episode.Name.S03E42.German.DL.1080p.BluRay.x265-ReleaseGroup",
    "Show.Name.2019.S01E05.720p.WEB.x264-GRP",
];

// No year, so the title is rebuilt from leftovers
const FALLBACK_SAMPLES: &[&str] = &[
    "Random Movie Name EXTENDED CUT German DL 1080p BluRay x265-ReleaseGroup",
    "Random.Movie.Name.German.DL.1080p.BluRay.x265-ReleaseGroup",
];

fn bench_parse_single(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("parse_single");

    group.bench_function("simple_movie", |b| {
        b.iter(|| parser.parse(black_box("Movie.2020.1080p.BluRay.x264-GROUP")))
    });

    group.bench_function("show_episode", |b| {
        b.iter(|| {
            parser.parse(black_box(
                "Random.Show.Episode.Name.S03E42.German.DL.1080p.BluRay.x265-ReleaseGroup",
            ))
        })
    });

    group.bench_function("no_year_fallback", |b| {
        b.iter(|| {
            parser.parse(black_box(
                "Random Movie Name EXTENDED CUT German DL 1080p BluRay x265-ReleaseGroup",
            ))
        })
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("parse_batch");

    for (name, samples) in [
        ("movies", MOVIE_SAMPLES),
        ("shows", SHOW_SAMPLES),
        ("fallback", FALLBACK_SAMPLES),
    ] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for sample in samples {
                    let _ = black_box(parser.parse(black_box(sample)));
                }
            })
        });
    }

    group.finish();
}

fn bench_hint_and_delimiter(c: &mut Criterion) {
    let input = "Random.Show.Name.S03.Complete.German.DL.1080p.BluRay.x265-ReleaseGroup";
    let guessing = Parser::default();
    let fixed = Parser::new(ParserConfig::builder().delimiter(".").build());

    let mut group = c.benchmark_group("hint_and_delimiter");
    for hint in [ReleaseType::Unknown, ReleaseType::Movie, ReleaseType::Show] {
        group.bench_with_input(
            BenchmarkId::new("guessed", hint),
            &hint,
            |b, &hint| b.iter(|| guessing.parse_as(black_box(input), hint)),
        );
        group.bench_with_input(BenchmarkId::new("fixed", hint), &hint, |b, &hint| {
            b.iter(|| fixed.parse_as(black_box(input), hint))
        });
    }
    group.finish();
}

fn bench_input_length(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("input_length");

    let inputs = [
        ("short", "Movie.2020.720p"),
        ("medium", "Random.Movie.Name.2015.German.DL.1080p.BluRay.x265-ReleaseGroup"),
        (
            "long",
            "The.Lord.of.the.Rings.The.Fellowship.of.the.Ring.2001.EXTENDED.2160p.BluRay.x265.DTS.HD.MA.German.DL-GROUP",
        ),
    ];

    for (name, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, input| {
            b.iter(|| parser.parse(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_single,
    bench_parse_batch,
    bench_hint_and_delimiter,
    bench_input_length,
);

criterion_main!(benches);
