#[cfg(test)]
mod tests {
    use life_bench::{
        benchmark::{self, BenchConfig, Strategy},
        patterns::{self, GLIDER},
        state_hash, LifeEngine,
    };

    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn assert_fields_equal(a: &LifeEngine, b: &LifeEngine) {
        assert_eq!(a.size(), b.size());
        assert_eq!(a.generation(), b.generation());
        assert_eq!(
            state_hash(&a.render()),
            state_hash(&b.render()),
            "Fields do not match:\n{}\n{}",
            a.render(),
            b.render()
        );
    }

    #[test]
    fn test_single_and_batched_updates() {
        for size in [1, 2, 3, 16, 33] {
            for generations in [0, 1, 5, 100] {
                let mut stepwise = LifeEngine::random(size, Some(SEED), FILL_RATE);
                let mut batched = LifeEngine::random(size, Some(SEED), FILL_RATE);
                assert_fields_equal(&stepwise, &batched);

                Strategy::Stepwise.advance(&mut stepwise, generations);
                Strategy::Batched.advance(&mut batched, generations);

                assert_fields_equal(&stepwise, &batched);
                assert_eq!(batched.generation(), generations);
            }
        }
    }

    #[test]
    fn test_repetitive_updates() {
        let mut stepwise = LifeEngine::random(64, Some(SEED), FILL_RATE);
        let mut batched = stepwise.clone();
        for generations in 0..10 {
            for _ in 0..generations {
                stepwise.step();
            }
            batched.multi_step(generations);
            assert_fields_equal(&stepwise, &batched);
        }
    }

    #[test]
    fn test_determinism() {
        let renders = (0..3)
            .map(|_| {
                let mut life = LifeEngine::random(32, Some(SEED), FILL_RATE);
                life.multi_step(50);
                life.render()
            })
            .collect::<Vec<_>>();
        assert!(renders.iter().all(|r| r == &renders[0]));
    }

    #[test]
    fn test_render_ignores_history() {
        // a block reached after a few generations renders like a freshly seeded one
        let mut evolved = LifeEngine::blank(8);
        for (x, y) in [(1, 1), (1, 2), (2, 1)] {
            evolved.set_alive(x, y);
        }
        evolved.multi_step(3);
        let fresh = patterns::BLOCK.engine(8);
        assert_ne!(evolved.generation(), fresh.generation());
        assert_eq!(evolved.render(), fresh.render());
    }

    #[test]
    fn test_independent_instances_on_threads() {
        let reference = {
            let mut life = LifeEngine::random(48, Some(SEED), FILL_RATE);
            life.multi_step(200);
            life.render()
        };
        let renders = std::thread::scope(|s| {
            let handles = (0..4)
                .map(|i| {
                    s.spawn(move || {
                        let mut life = LifeEngine::random(48, Some(SEED), FILL_RATE);
                        if i % 2 == 0 {
                            life.multi_step(200);
                        } else {
                            (0..200).for_each(|_| life.step());
                        }
                        life.render()
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });
        assert!(renders.iter().all(|r| r == &reference));
    }

    #[test]
    fn test_glider_from_rle_matches_builtin() {
        let data = b"#N Glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";
        let mut from_rle = LifeEngine::from_rle(data, 16).unwrap();
        from_rle.multi_step(4);
        // the built-in glider sits one cell further from the origin
        let expected = GLIDER.engine(16);
        assert_eq!(from_rle.render(), expected.render());
    }

    #[test]
    fn test_default_benchmark() {
        let report = benchmark::run(&BenchConfig::default());
        assert!(report.hashes_match(), "{}", report);
        let mut expected = patterns::demo_engine();
        expected.multi_step(1000);
        for run in &report.runs {
            assert_eq!(run.generation, 1000);
            assert_eq!(run.hash, state_hash(&expected.render()));
        }
    }
}
