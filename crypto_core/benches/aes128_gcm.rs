use criterion::{criterion_group, criterion_main, Criterion};
use crypto_core::{Block, LabelCipher};
use rand::rngs::OsRng;
use std::time::Duration;

fn bench_cipher_new(c: &mut Criterion) {
    c.bench_function("LabelCipher::new", |b| {
        let key = rand::random::<Block>();
        b.iter(|| {
            let cipher = LabelCipher::new(key.as_ref()).unwrap();
            criterion::black_box(cipher);
        });
    });
}

fn bench_cipher_encrypt(c: &mut Criterion) {
    c.bench_function("LabelCipher::encrypt", |b| {
        let cipher = LabelCipher::new(rand::random::<Block>().as_ref()).unwrap();
        let label = rand::random::<Block>();
        let mut rng = OsRng;
        b.iter(|| {
            let ct = cipher.encrypt(&mut rng, label.as_ref()).unwrap();
            criterion::black_box(ct)
        });
    });
}

fn bench_cipher_decrypt(c: &mut Criterion) {
    c.bench_function("LabelCipher::decrypt", |b| {
        let cipher = LabelCipher::new(rand::random::<Block>().as_ref()).unwrap();
        let ct = cipher
            .encrypt(&mut OsRng, rand::random::<Block>().as_ref())
            .unwrap();
        b.iter(|| {
            let pt = cipher.decrypt(&ct).unwrap();
            criterion::black_box(pt)
        });
    });
}

fn bench_cipher_reject(c: &mut Criterion) {
    c.bench_function("LabelCipher::decrypt wrong key", |b| {
        let cipher = LabelCipher::new(rand::random::<Block>().as_ref()).unwrap();
        let other = LabelCipher::new(rand::random::<Block>().as_ref()).unwrap();
        let ct = other
            .encrypt(&mut OsRng, rand::random::<Block>().as_ref())
            .unwrap();
        b.iter(|| {
            let res = cipher.decrypt(&ct).is_err();
            criterion::black_box(res)
        });
    });
}

criterion_group! {
    name = aes128_gcm;
    config = Criterion::default().warm_up_time(Duration::from_millis(100));
    targets = bench_cipher_new, bench_cipher_encrypt, bench_cipher_decrypt, bench_cipher_reject
}
criterion_main!(aes128_gcm);
