#![allow(missing_docs)]
//! Benchmarks for the marcfield library.
//!
//! Records are synthesized in memory so the suite runs without fixtures.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marcfield::fixed_field::decode_007;
use marcfield::parallel::parse_batch_parallel;
use marcfield::{encode_record, marcxml, Field, Leader, MarcReader, MarcWriter, Record, RecordFormat};
use std::io::Cursor;

fn sample_record(i: usize) -> Record {
    Record::builder(Leader::default())
        .control_field_str("001", &format!("ocm{i:08}"))
        .control_field_str("005", "19940223151047.0")
        .control_field_str("007", "sd fsngnnmmned")
        .control_field_str("008", "920219s1993    caua   j      000 0 eng d")
        .field(
            Field::builder("100".to_string(), '1', ' ')
                .subfield_str('a', "Fitzgerald, F. Scott")
                .subfield_str('d', "1896-1940.")
                .build(),
        )
        .field(
            Field::builder("245".to_string(), '1', '4')
                .subfield_str('a', "The great Gatsby /")
                .subfield_str('c', "F. Scott Fitzgerald.")
                .build(),
        )
        .field(
            Field::builder("650".to_string(), ' ', '0')
                .subfield_str('a', "Rich people")
                .subfield_str('z', "New York (State)")
                .subfield_str('v', "Fiction.")
                .build(),
        )
        .build()
}

/// Encode `count` records into one ISO 2709 buffer.
fn build_stream(count: usize) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut writer = MarcWriter::new(&mut buffer);
    for i in 0..count {
        if writer.write_record(&sample_record(i)).is_err() {
            break;
        }
    }
    buffer
}

fn benchmark_read_1k(c: &mut Criterion) {
    let stream = build_stream(1_000);

    c.bench_function("read_1k_records", |b| {
        b.iter(|| {
            let mut reader = MarcReader::new(Cursor::new(black_box(&stream)));
            let mut count = 0;
            while let Ok(Some(_record)) = reader.read_record() {
                count += 1;
            }
            count
        });
    });
}

fn benchmark_parallel_1k(c: &mut Criterion) {
    let stream = build_stream(1_000);

    c.bench_function("parallel_decode_1k_records", |b| {
        b.iter(|| parse_batch_parallel(black_box(&stream)).map(|results| results.len()));
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let record = sample_record(1);

    c.bench_function("encode_record", |b| {
        b.iter(|| encode_record(black_box(&record)));
    });
}

fn benchmark_marcxml(c: &mut Criterion) {
    let record = sample_record(1);
    let xml = marcxml::record_to_marcxml(&record).unwrap_or_default();

    c.bench_function("marcxml_serialize", |b| {
        b.iter(|| marcxml::record_to_marcxml(black_box(&record)));
    });
    c.bench_function("marcxml_parse", |b| {
        b.iter(|| marcxml::marcxml_to_record(black_box(&xml)));
    });
}

fn benchmark_fixed_fields(c: &mut Criterion) {
    let record = sample_record(1);

    c.bench_function("describe_008", |b| {
        b.iter(|| black_box(&record).describe_008());
    });
    c.bench_function("decode_007", |b| {
        b.iter(|| decode_007(RecordFormat::Bibliography, black_box("sd fsngnnmmned")));
    });
}

criterion_group!(
    benches,
    benchmark_read_1k,
    benchmark_parallel_1k,
    benchmark_encode,
    benchmark_marcxml,
    benchmark_fixed_fields
);
criterion_main!(benches);
