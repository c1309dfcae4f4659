use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exif_props::parse_fn::datetime::parse_exif_datetime;
use exif_props::{RawTagValue, TagDecoder, TagId};

fn sample_entries() -> Vec<(TagId, RawTagValue)> {
    vec![
        (TagId::MAKE, RawTagValue::ascii("Acme")),
        (TagId::MODEL, RawTagValue::ascii("X10")),
        (TagId::ORIENTATION, RawTagValue::unsigned_shorts(&[6])),
        (TagId::EXPOSURE_PROGRAM, RawTagValue::unsigned_shorts(&[2])),
        (TagId::DATE_TIME, RawTagValue::ascii("2016:03:21 14:30:00")),
        (TagId::DATE_TIME_ORIGINAL, RawTagValue::ascii("2016:03:21 02:30:00 PM")),
    ]
}

fn bench_decoder(c: &mut Criterion) {
    c.bench_function("parse plain datetime", |b| {
        b.iter(|| parse_exif_datetime(black_box("2016:03:21 14:30:00")))
    });

    c.bench_function("parse nul meridiem datetime", |b| {
        b.iter(|| parse_exif_datetime(black_box("2016:03:21 02:30:00 PM\0")))
    });

    c.bench_function("reject datetime", |b| {
        b.iter(|| parse_exif_datetime(black_box("    :  :     :  :  ")))
    });

    c.bench_function("build decoder", |b| {
        b.iter(|| TagDecoder::new(black_box(sample_entries())))
    });

    let decoder = TagDecoder::new(sample_entries());
    c.bench_function("full summary", |b| b.iter(|| black_box(&decoder).summary()));
}

criterion_group!(benches, bench_decoder);
criterion_main!(benches);
