use criterion::{black_box, criterion_group, criterion_main, Criterion};
use k256::Secp256k1;
use psuw::{delegate, keygen, psign, pverify, Arkg, KeyDerivation, Signature};
use rand_core::OsRng;

fn bench_delegate(c: &mut Criterion) {
    let delegator = keygen::<Secp256k1>(&mut OsRng);
    let proxy = keygen::<Secp256k1>(&mut OsRng);

    c.bench_function("delegate (k256)", |b| {
        b.iter(|| {
            delegate::<Secp256k1, _>(
                &mut OsRng,
                &Arkg,
                black_box(&delegator.private_key),
                black_box(&proxy.public_key),
            )
            .unwrap()
        })
    });
}

fn bench_psign(c: &mut Criterion) {
    let delegator = keygen::<Secp256k1>(&mut OsRng);
    let proxy = keygen::<Secp256k1>(&mut OsRng);
    let (warrant, credential) = delegate::<Secp256k1, _>(
        &mut OsRng,
        &Arkg,
        &delegator.private_key,
        &proxy.public_key,
    )
    .unwrap();
    let msg = b"MESSAGE";

    c.bench_function("psign (k256)", |b| {
        b.iter(|| {
            psign(
                &mut OsRng,
                &Arkg,
                black_box(&proxy.private_key),
                &delegator.public_key,
                &warrant,
                &credential,
                black_box(msg),
            )
            .unwrap()
        })
    });
}

fn bench_pverify(c: &mut Criterion) {
    let delegator = keygen::<Secp256k1>(&mut OsRng);
    let proxy = keygen::<Secp256k1>(&mut OsRng);
    let (warrant, credential) = delegate::<Secp256k1, _>(
        &mut OsRng,
        &Arkg,
        &delegator.private_key,
        &proxy.public_key,
    )
    .unwrap();
    let msg = b"MESSAGE";
    let sig = psign(
        &mut OsRng,
        &Arkg,
        &proxy.private_key,
        &delegator.public_key,
        &warrant,
        &credential,
        msg,
    )
    .unwrap();

    c.bench_function("pverify (k256)", |b| {
        b.iter(|| pverify(black_box(&delegator.public_key), &sig, black_box(msg)))
    });
}

fn bench_arkg(c: &mut Criterion) {
    let keys = keygen::<Secp256k1>(&mut OsRng);
    let (_, credential) =
        KeyDerivation::<Secp256k1>::derive_public_key(&Arkg, &mut OsRng, &keys.public_key, b"")
            .unwrap();

    c.bench_function("arkg derive public key (k256)", |b| {
        b.iter(|| {
            KeyDerivation::<Secp256k1>::derive_public_key(
                &Arkg,
                &mut OsRng,
                black_box(&keys.public_key),
                b"",
            )
            .unwrap()
        })
    });
    c.bench_function("arkg derive secret key (k256)", |b| {
        b.iter(|| {
            Arkg.derive_secret_key(black_box(&keys.private_key), &credential)
                .unwrap()
        })
    });
}

// Plain single-key ECDSA, as a baseline for the protocol numbers above.
fn bench_ecdsa(c: &mut Criterion) {
    let keys = keygen::<Secp256k1>(&mut OsRng);
    let msg = b"MESSAGE";
    let sig = Signature::<Secp256k1>::sign(&mut OsRng, &keys.private_key, msg);

    c.bench_function("ecdsa sign (k256)", |b| {
        b.iter(|| {
            Signature::<Secp256k1>::sign(&mut OsRng, black_box(&keys.private_key), black_box(msg))
        })
    });
    c.bench_function("ecdsa verify (k256)", |b| {
        b.iter(|| sig.verify(black_box(&keys.public_key), black_box(msg)))
    });
}

criterion_group!(
    benches,
    bench_delegate,
    bench_psign,
    bench_pverify,
    bench_arkg,
    bench_ecdsa
);
criterion_main!(benches);
