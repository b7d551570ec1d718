use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minirc_proto::{ChannelExt, LineCodec, Message, MessageRef, NickExt};
use tokio_util::codec::Decoder;

fn line_splitting_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let raw = "PRIVMSG #channel :Hello world, this is a reasonably sized line";
    group.throughput(Throughput::Bytes(raw.len() as u64));

    group.bench_function("split_privmsg", |b| {
        b.iter(|| {
            let msg = MessageRef::parse(black_box(raw)).unwrap();
            let (target, text) = msg.split_trailing().unwrap();
            (target.trim().is_channel_name(), text.len())
        })
    });

    group.bench_function("validate_nick", |b| {
        b.iter(|| black_box("alice_01").is_valid_nick())
    });

    group.finish();
}

fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let batch = "NICK alice\r\nUSER alice 0 * :Alice A\r\nJOIN #test\r\nPRIVMSG #test :hi\r\n".repeat(64);
    group.throughput(Throughput::Bytes(batch.len() as u64));

    group.bench_function("decode_batch", |b| {
        b.iter(|| {
            let mut codec = LineCodec::new();
            let mut buf = BytesMut::from(batch.as_str());
            let mut lines = 0;
            while let Ok(Some(_)) = codec.decode(&mut buf) {
                lines += 1;
            }
            lines
        })
    });

    group.bench_function("render_privmsg", |b| {
        b.iter(|| Message::privmsg("sender", "#channel", black_box("Hello world")).to_string())
    });

    group.finish();
}

criterion_group!(benches, line_splitting_benchmark, codec_benchmark);
criterion_main!(benches);
