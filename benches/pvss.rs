use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use pvss::constants::{LARGE_N, LARGE_THRESHOLD, SMALL_N, SMALL_THRESHOLD};
use pvss::keypair::{KeyPair, Participants};
use pvss::{pvss as pvss_scheme, scrape};
use rand::thread_rng;

pub fn all_groups(c: &mut Criterion) {
    pvss_group(SMALL_THRESHOLD, SMALL_N, c);
    pvss_group(LARGE_THRESHOLD, LARGE_N, c);
    scrape_group(SMALL_THRESHOLD, SMALL_N, c);
    scrape_group(LARGE_THRESHOLD, LARGE_N, c);
}

fn pvss_group(t: usize, n: usize, c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("pvss/{t}-of-{n}"));
    group.throughput(Throughput::Elements(n as u64));

    let mut rng = thread_rng();
    let kps: Vec<KeyPair> = (0..n).map(|_| KeyPair::generate(&mut rng)).collect();
    let participants = Participants::new(kps.iter().map(|kp| *kp.public_key()).collect());

    group.bench_function("escrow_new", |b| {
        b.iter(|| pvss_scheme::Escrow::new(t, &mut rng))
    });

    let escrow = pvss_scheme::Escrow::new(t, &mut rng);
    let commitments = escrow.create_commitments();

    group.bench_function("shares_create", |b| {
        b.iter(|| escrow.shares_create(&participants, &mut rng))
    });

    let shares = escrow.shares_create(&participants, &mut rng);
    let h = escrow.extra_gen();

    group.bench_function("verify_encrypted_share", |b| {
        b.iter(|| {
            pvss_scheme::verify_encrypted_share(
                &h,
                &commitments,
                participants.get(1).unwrap(),
                &shares[0],
            )
        })
    });

    group.bench_function("share_decrypt", |b| {
        b.iter(|| pvss_scheme::share_decrypt(&kps[0], &shares[0], &mut rng))
    });

    let decs: Vec<_> = kps
        .iter()
        .zip(shares.iter())
        .take(t)
        .map(|(kp, s)| pvss_scheme::share_decrypt(kp, s, &mut rng))
        .collect();
    let recovery_shares: Vec<(u32, pvss::Point)> = decs
        .iter()
        .enumerate()
        .map(|(i, d)| ((i + 1) as u32, d.s()))
        .collect();

    group.bench_function("recover", |b| b.iter(|| pvss_scheme::recover(&recovery_shares)));

    group.finish();
}

fn scrape_group(t: usize, n: usize, c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("scrape/{t}-of-{n}"));
    group.throughput(Throughput::Elements(n as u64));

    let mut rng = thread_rng();
    let kps: Vec<KeyPair> = (0..n).map(|_| KeyPair::generate(&mut rng)).collect();
    let participants = Participants::new(kps.iter().map(|kp| *kp.public_key()).collect());

    group.bench_function("escrow_new", |b| b.iter(|| scrape::Escrow::new(t, &mut rng)));

    let escrow = scrape::Escrow::new(t, &mut rng);
    let commitments = escrow.create_commitments(n);

    group.bench_function("create_shares", |b| {
        b.iter(|| escrow.create_shares(&participants, &mut rng))
    });

    let (e, proof) = escrow.create_shares(&participants, &mut rng);
    let h = escrow.extra_gen();

    group.bench_function("verify_encrypted_shares", |b| {
        b.iter(|| {
            scrape::verify_encrypted_shares(&h, t, &commitments, &proof, &e, &participants, &mut rng)
        })
    });

    group.bench_function("share_decrypt", |b| {
        b.iter(|| scrape::share_decrypt(&kps[0], &e[0], &mut rng))
    });

    let decs: Vec<_> = kps
        .iter()
        .zip(e.iter())
        .take(t)
        .map(|(kp, e_i)| scrape::share_decrypt(kp, e_i, &mut rng))
        .collect();
    let recovery_shares: Vec<(usize, pvss::Point)> =
        decs.iter().enumerate().map(|(i, d)| (i + 1, d.s())).collect();

    group.bench_function("recover", |b| b.iter(|| scrape::recover(&recovery_shares)));

    group.finish();
}

criterion_group!(benches, all_groups);
criterion_main!(benches);
