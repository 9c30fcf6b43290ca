use bijection::{Bimap, Overwritten};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Reference model: an ordered list of pairs, searched linearly
#[derive(Default)]
struct Model(Vec<(u8, u8)>);

impl Model {
    fn set(&mut self, k: u8, v: u8) -> usize {
        let before = self.0.len();
        self.0.retain(|&(a, b)| a != k && b != v);
        let evicted = before - self.0.len();
        self.0.push((k, v));
        evicted
    }
    fn delete(&mut self, k: u8) -> bool {
        let before = self.0.len();
        self.0.retain(|&(a, _)| a != k);
        self.0.len() != before
    }
    fn delete_by_value(&mut self, v: u8) -> bool {
        let before = self.0.len();
        self.0.retain(|&(_, b)| b != v);
        self.0.len() != before
    }
}

fn check(m: &Bimap<u8, u8>, model: &Model) {
    let pairs: Vec<(u8, u8)> = m.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, model.0, "pairs or order differ from model");
    assert_eq!(m.len(), m.iter().count());
    assert_eq!(m.len(), m.keys().len());
    assert_eq!(m.len(), m.values().len());
    for (k, v) in m {
        assert_eq!(m.get(k), Some(v));
        assert_eq!(m.get_by_value(v), Some(k));
    }
    for i in 0..=u8::MAX {
        if let Some(v) = m.get(&i) {
            assert_eq!(m.get_by_value(v), Some(&i));
        }
        if let Some(k) = m.get_by_value(&i) {
            assert_eq!(m.get(k), Some(&i));
        }
    }
}

#[test]
fn random_ops_match_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut m = Bimap::new();
    let mut model = Model::default();

    for _ in 0..5000 {
        // A small domain forces lots of collisions
        let k = rng.gen_range(0..12u8);
        let v = rng.gen_range(0..12u8);
        match rng.gen_range(0..10) {
            0..=5 => {
                let evicted = match m.insert(k, v) {
                    Overwritten::Neither => 0,
                    Overwritten::Pair(..) => 1,
                    Overwritten::Key(..) | Overwritten::Value(..) => 1,
                    Overwritten::Both(..) => 2,
                };
                assert_eq!(evicted, model.set(k, v));
            }
            6 => assert_eq!(m.delete(&k), model.delete(k)),
            7 => assert_eq!(m.delete_by_value(&v), model.delete_by_value(v)),
            8 => {
                let ok = m.insert_no_overwrite(k, v).is_ok();
                let free = !model.0.iter().any(|&(a, b)| a == k || b == v);
                assert_eq!(ok, free);
                if ok {
                    model.set(k, v);
                }
            }
            _ => {
                if rng.gen_bool(0.05) {
                    m.clear();
                    model.0.clear();
                }
            }
        }
        check(&m, &model);
    }
}

#[test]
fn rebuild_from_entries() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut a = Bimap::new();
    for _ in 0..200 {
        a.set(rng.gen_range(0..64u8), rng.gen_range(0..64u8));
    }

    // Content survives a round trip through iteration, in either order
    let b: Bimap<u8, u8> = a.iter().collect();
    let c: Bimap<u8, u8> = a.iter().rev().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(a, b);
    assert_eq!(a, c);
    let d = Bimap::from_entries(Some(a.clone()));
    assert_eq!(a, d);
}

#[test]
fn string_registry() {
    let mut names: Bimap<u32, String> = Bimap::new();
    names
        .set(1, "alice".to_owned())
        .set(2, "bob".to_owned())
        .set(3, "carol".to_owned());

    // Renaming user 2 frees the old name
    names.set(2, "robert".to_owned());
    assert_eq!(names.get_by_value("bob"), None);
    assert_eq!(names.get_by_value("robert"), Some(&2));

    // Handing an existing name to a new id evicts the old id
    names.set(4, "alice".to_owned());
    assert!(!names.contains_key(&1));
    assert_eq!(names.len(), 3);

    let ids: Vec<u32> = names.keys().copied().collect();
    assert_eq!(ids, [3, 2, 4]);
}
