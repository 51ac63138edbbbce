use super::*;
extern crate test;
use test::Bencher;

const INITIAL_SIZE: usize = 100_000;

#[bench]
fn bench_cut_and_paste(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut tree: SplayTree<usize> = (0..INITIAL_SIZE).collect();
    b.iter(|| {
        let cut = random_cut(&mut rng, INITIAL_SIZE);
        let res = tree.cut_and_paste(cut.i, cut.j, cut.k);
        test::bench::black_box(res)
    });
}

#[bench]
fn bench_select(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut tree: SplayTree<usize> = (0..INITIAL_SIZE).collect();
    b.iter(|| {
        let rank = rng.gen_range(0..INITIAL_SIZE);
        test::bench::black_box(tree.select(rank).map(|value| *value))
    });
}
