use quickcheck::{quickcheck, Arbitrary, Gen};
use union_sort::{DisjointSets, QuickFind, QuickUnion, Strategy, UnionFinder,
                 WeightedQuickUnion};

// The number of sites in the union-finds we'll test on.
const UF_LEN: usize = 40;

// The percentage of commands that should be finds; the rest are unions.
const FIND_PCT: usize = 50;

quickcheck! {
    fn prop_variants_agree(script: Script) -> bool {
        let mut tester = Tester::new();
        tester.execute(&script) && tester.check()
    }

    fn prop_weighted_height_is_logarithmic(script: Script) -> bool {
        let mut uf = WeightedQuickUnion::new(UF_LEN);
        for cmd in &script.0 {
            if let Cmd::Union(p, q) = *cmd {
                uf.union(p, q).unwrap();
            }
        }

        let bound = UF_LEN.ilog2() as usize + 1;
        (0 .. UF_LEN).all(|site| uf.height(site).unwrap() <= bound)
    }

    fn prop_connected_is_an_equivalence(script: Script) -> bool {
        let mut uf = Strategy::Weighted.with_size(UF_LEN);
        for cmd in &script.0 {
            if let Cmd::Union(p, q) = *cmd {
                uf.union(p, q).unwrap();
            }
        }

        let connected = |p, q| uf.connected(p, q).unwrap();
        for i in 0 .. UF_LEN {
            if !connected(i, i) { return false; }
            for j in 0 .. UF_LEN {
                if connected(i, j) != connected(j, i) { return false; }
                for k in 0 .. UF_LEN {
                    if connected(i, j) && connected(j, k) && !connected(i, k) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn prop_out_of_range_sites_rejected(site: usize) -> bool {
        let site = UF_LEN + site;
        Strategy::ALL.iter().all(|strategy| {
            let mut uf = strategy.with_size(UF_LEN);
            uf.find(site).is_err()
                && uf.union(0, site).is_err()
                && uf.count() == UF_LEN
        })
    }
}

// We will run the same operations on every variant, and then check that
// the results are equivalent.
struct Tester {
    quick_find:  QuickFind,
    quick_union: QuickUnion,
    weighted:    UnionFinder,
    set_count:   usize,
}

impl Tester {
    // Creates a fresh tester.
    fn new() -> Self {
        Tester {
            quick_find:  QuickFind::new(UF_LEN),
            quick_union: QuickUnion::new(UF_LEN),
            weighted:    Strategy::Weighted.with_size(UF_LEN),
            set_count:   UF_LEN,
        }
    }

    // Checks that the three union-finds in the tester are equivalent.
    fn check(&self) -> bool {
        if self.quick_find.count() != self.set_count
            || self.quick_union.count() != self.set_count
            || self.weighted.count() != self.set_count
        {
            return false;
        }

        for i in 0 .. UF_LEN {
            for j in 0 .. UF_LEN {
                let expected = self.quick_find.connected(i, j).unwrap();
                if self.quick_union.connected(i, j).unwrap() != expected
                    || self.weighted.connected(i, j).unwrap() != expected
                {
                    return false;
                }
            }
        }

        true
    }

    // Executes the script on all three union-finds, checking after every
    // union that they agree on whether it merged anything.
    fn execute(&mut self, script: &Script) -> bool {
        for cmd in &script.0 {
            match *cmd {
                Cmd::Union(p, q) => {
                    let before = self.set_count;
                    let merged = self.quick_find.union(p, q).unwrap();
                    if merged != self.quick_union.union(p, q).unwrap()
                        || merged != self.weighted.union(p, q).unwrap()
                    {
                        return false;
                    }
                    if merged {
                        self.set_count -= 1;
                    }
                    if self.weighted.count() != self.set_count
                        || self.set_count + merged as usize != before
                    {
                        return false;
                    }
                }
                Cmd::Find(i) => {
                    self.quick_find.find(i).unwrap();
                    self.quick_union.find(i).unwrap();
                    self.weighted.find(i).unwrap();
                }
            }
        }

        true
    }
}

// A script is a sequence of commands.
#[derive(Clone, Debug)]
struct Script(Vec<Cmd>);

// A command is either a union or a find.
#[derive(Clone, Debug)]
enum Cmd {
    Union(usize, usize),
    Find(usize),
}

impl Arbitrary for Script {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Script(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Script))
    }
}

impl Arbitrary for Cmd {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let choice = usize::arbitrary(g) % 100;
        let mut gen_index = || usize::arbitrary(g) % UF_LEN;

        if choice < FIND_PCT {
            Cmd::Find(gen_index())
        } else {
            Cmd::Union(gen_index(), gen_index())
        }
    }
}

#[test]
fn chain_joins_everything() {
    for &strategy in &Strategy::ALL {
        let mut uf = strategy.build(5).unwrap();
        for (p, q) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            assert!(uf.union(p, q).unwrap());
        }
        assert_eq!(1, uf.count(), "{}", strategy);
    }
}

#[test]
fn transitive_through_unions() {
    for &strategy in &Strategy::ALL {
        let mut uf = strategy.build(3).unwrap();
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();
        assert!(uf.connected(0, 2).unwrap(), "{}", strategy);
        assert!(!uf.union(2, 0).unwrap(), "{}", strategy);
    }
}
