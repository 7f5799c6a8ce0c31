use arbitrary::{unstructured::Unstructured, Arbitrary};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use structopt::StructOpt;

use std::{ops::Bound, thread, time};

use prbt::arc::RbTree;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "inserts", default_value = "0")]
    inserts: usize,

    #[structopt(long = "removes", default_value = "0")]
    removes: usize,

    #[structopt(long = "gets", default_value = "0")]
    gets: usize,

    #[structopt(long = "ranges", default_value = "0")]
    ranges: usize,

    #[structopt(long = "writers", default_value = "1")]
    writers: usize,

    #[structopt(long = "readers", default_value = "1")]
    readers: usize,
}

fn main() {
    let opts = Opt::from_args();
    let seed = opts.seed.unwrap_or_else(random);
    println!("seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: RbTree<u64, u64> = RbTree::new();

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        let (key, val): (u64, u64) = (rng.gen(), rng.gen());
        index = index.insert(key, val);
    }

    println!("loaded {} items in {:?}", opts.loads, start.elapsed());

    // every thread works on its own snapshot, writers do not block readers.
    let mut handles = vec![];
    for j in 0..opts.writers {
        let (mut opts, index) = (opts.clone(), index.clone());
        opts.gets = 0;
        opts.ranges = 0;
        let seed = seed + ((j as u64) * 100);
        let h = thread::spawn(move || do_incremental(j, seed, opts, index));
        handles.push(h);
    }
    for j in opts.writers..(opts.writers + opts.readers) {
        let (mut opts, index) = (opts.clone(), index.clone());
        opts.inserts = 0;
        opts.removes = 0;
        let seed = seed + ((j as u64) * 100);
        let h = thread::spawn(move || do_incremental(j, seed, opts, index));
        handles.push(h);
    }

    for handle in handles.into_iter() {
        handle.join().unwrap()
    }
}

fn do_incremental(j: usize, seed: u64, opts: Opt, mut index: RbTree<u64, u64>) {
    let mut rng = SmallRng::seed_from_u64(seed);

    let start = time::Instant::now();
    let total = opts.inserts + opts.removes + opts.gets + opts.ranges;
    let (mut n, mut n_items) = (total, 0);
    while n > 0 {
        let op = rng.gen::<usize>() % total;

        let key = rng.gen::<u64>();
        if op < opts.inserts {
            let val = rng.gen::<u64>();
            index = index.insert(key, val);
        } else if op < (opts.inserts + opts.removes) {
            // random keys mostly miss, remove an existing one instead.
            let key = index.random(&mut rng).map(|(k, _)| *k).unwrap_or(key);
            index = index.remove(&key);
        } else if op < (opts.inserts + opts.removes + opts.gets) {
            index.get(&key);
        } else {
            let bytes = rng.gen::<[u8; 32]>();
            let mut uns = Unstructured::new(&bytes);
            let r = match uns.arbitrary::<(Limit<u64>, Limit<u64>)>() {
                Ok((l, h)) => (Bound::from(l), Bound::from(h)),
                Err(_) => (Bound::Unbounded, Bound::Unbounded),
            };
            n_items += index.range(r).take(100).count();
        }
        n -= 1;
    }
    println!(
        "incremental-{} for operations {}, ranged over {} items, took {:?}",
        j,
        total,
        n_items,
        start.elapsed()
    );

    let start = time::Instant::now();
    let mut n = 0;
    for _e in index.iter() {
        n += 1;
    }
    println!("iter-{} for iterating {}, took {:?}", j, n, start.elapsed());

    let start = time::Instant::now();
    match index.validate() {
        Ok(()) => println!("validate-{} for {} items, took {:?}", j, n, start.elapsed()),
        Err(err) => println!("validate-{} failed {}", j, err),
    }
}

#[derive(Clone, Debug, Arbitrary, Eq, PartialEq)]
enum Limit<T> {
    Unbounded,
    Included(T),
    Excluded(T),
}

impl<T> From<Limit<T>> for Bound<T> {
    fn from(limit: Limit<T>) -> Self {
        match limit {
            Limit::Unbounded => Bound::Unbounded,
            Limit::Included(v) => Bound::Included(v),
            Limit::Excluded(v) => Bound::Excluded(v),
        }
    }
}
